//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//! 이 모듈은 DDD(Domain Driven Design)의 도메인 모델을 구현하며,
//! entities와는 구별되는 역할을 담당합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `User`
//!
//! ### Models (`./`)
//! - **비즈니스 로직**: 도메인의 핵심 비즈니스 규칙 포함
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 일반적으로 불변 객체로 설계
//! - **예시**: `AuthenticatedUser`, `ApiResponse`
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | Rust Domain Models |
//! |--------|-------------------|
//! | `@Entity` | `../entities/` |
//! | `@AuthenticationPrincipal` | `auth::AuthenticatedUser` |
//! | `ResponseEntity.ok(body)` | `ApiResponse::ok(data)` |
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── mod.rs              ← 이 파일 (모듈 진입점)
//! ├── api_response.rs     ← 성공 응답 봉투 {"code": 0, "data": ...}
//! └── auth/               ← 인증 관련 모델
//!     └── authenticated_user.rs
//! ```

pub mod api_response;
pub mod auth;

pub use api_response::ApiResponse;
pub use auth::{AuthenticatedUser, OptionalUser};
