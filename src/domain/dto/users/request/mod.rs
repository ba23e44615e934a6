//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@RequestBody`와 유사한 역할을 하며, 클라이언트로부터 받은 JSON 데이터를
//! 구조화된 Rust 타입으로 변환하고 검증하는 역할을 담당합니다.
//!
//! ## 주요 기능
//!
//! - **타입 안전성**: 컴파일 타임에 데이터 구조 검증
//! - **자동 역직렬화**: `serde`를 통한 JSON ↔ Rust 타입 변환
//! - **입력 검증**: `validator` 크레이트를 통한 형식/비즈니스 규칙 검증
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use validator::Validate;
//! use crate::domain::dto::users::request::RegisterRequest;
//!
//! #[actix_web::post("/register")]
//! async fn register(req: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
//!     req.validate()
//!         .map_err(|e| AppError::InvalidParam(e.to_string()))?;
//!     // ...
//! }
//! ```
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성
//! 2. **형식 검증**: 휴대폰 번호 패턴, 코드 자릿수, 비밀번호 길이
//! 3. **비즈니스 검증**: 비밀번호 확인 일치, 로그인 자격 증명 택일
//!
//! 검증 실패는 핸들러에서 `AppError::InvalidParam`으로 변환되어
//! 항상 동일한 `{"code": 1001}` 응답이 됩니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub mod register_request;
pub mod login_request;
pub mod reset_password_request;
pub mod send_code_request;
pub mod refresh_query;

pub use register_request::RegisterRequest;
pub use login_request::LoginRequest;
pub use reset_password_request::ResetPasswordRequest;
pub use send_code_request::SendCodeRequest;
pub use refresh_query::RefreshQuery;

/// 중국 본토 휴대폰 번호 패턴 (1로 시작, 두 번째 자리 3~9, 총 11자리)
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("invalid phone regex"));

/// 6자리 숫자 인증 코드 패턴
pub static CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{6}$").expect("invalid code regex"));

/// 휴대폰 번호 형식 검증
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(phone) {
        return Err(ValidationError::new("invalid_phone")
            .with_message("유효한 휴대폰 번호를 입력해주세요".into()));
    }
    Ok(())
}

/// 인증 코드 형식 검증 (6자리 숫자)
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if !CODE_REGEX.is_match(code) {
        return Err(ValidationError::new("invalid_code")
            .with_message("인증 코드는 6자리 숫자여야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_pattern() {
        assert!(validate_phone("13800000000").is_ok());
        assert!(validate_phone("19912345678").is_ok());

        assert!(validate_phone("12800000000").is_err()); // 두 번째 자리 2
        assert!(validate_phone("1380000000").is_err()); // 10자리
        assert!(validate_phone("138000000000").is_err()); // 12자리
        assert!(validate_phone("23800000000").is_err()); // 1로 시작하지 않음
        assert!(validate_phone("1380000000a").is_err()); // 숫자 아님
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_code_pattern() {
        assert!(validate_code("000000").is_ok());
        assert!(validate_code("482913").is_ok());

        assert!(validate_code("48291").is_err());
        assert!(validate_code("4829133").is_err());
        assert!(validate_code("48a913").is_err());
    }
}
