//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 도메인과 관련된 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@ResponseBody`와 유사한 역할을 하며, 비즈니스 로직 처리 결과를
//! 클라이언트에게 안전하고 일관된 형태로 전달하는 역할을 담당합니다.
//!
//! ## 설계 철학
//!
//! - **데이터 은닉**: 비밀번호 해시와 세션 토큰은 응답에 포함하지 않음
//! - **마스킹**: 휴대폰 번호는 항상 마스킹된 형태로만 노출
//! - **일관성**: 모든 응답이 `{"code": 0, "data": ...}` 봉투에 감싸짐
//!
//! ## 응답 DTO 계층 구조
//!
//! - `ProfileResponse` - 프로필 조회 응답
//! - `RegisterResponse` - 회원가입 완료 응답 (id, nickname)
//! - `TokenResponse` - 로그인/갱신 시 발급되는 세션 토큰
//! - `AvatarResponse` - 아바타 업로드 완료 응답
//!
//! ## JSON 응답 예제
//!
//! ### 프로필 응답
//! ```json
//! {
//!   "code": 0,
//!   "data": {
//!     "id": "507f1f77bcf86cd799439011",
//!     "phone": "138******00",
//!     "nickname": "user_0000",
//!     "avatar": "/public/uploads/avatar/3f7c2a1e.png",
//!     "last_login_at": "2024-06-07T12:00:00Z",
//!     "created_at": "2024-06-01T10:00:00Z"
//!   }
//! }
//! ```
//!
//! ### 로그인 응답
//! ```json
//! {
//!   "code": 0,
//!   "data": {
//!     "token": "3f7c2a1e-8d4b-4f6a-9c0e-5b2d1a8e7f3c",
//!     "expires_at": "2024-06-14T12:00:00Z"
//!   }
//! }
//! ```

pub mod user_response;
pub mod token_response;

pub use user_response::{ProfileResponse, RegisterResponse};
pub use token_response::{TokenResponse, AvatarResponse};
