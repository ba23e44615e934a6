//! 인증 관련 도메인 모델
//!
//! 미들웨어와 핸들러 사이에서 인증 상태를 전달하는 모델들을 정의합니다.
//! Spring Security의 `SecurityContextHolder` + `@AuthenticationPrincipal`과
//! 동일한 역할을 request extensions 기반으로 수행합니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use authentication_request::AuthMode;
