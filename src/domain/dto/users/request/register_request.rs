//! 회원가입 요청 DTO
//!
//! 휴대폰 번호 기반 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 인증 코드의 실제 일치 여부는 서비스 계층에서 Redis와 대조합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct RegisterRequest {
    /// 휴대폰 번호 (1로 시작하는 11자리)
    #[validate(custom(function = "super::validate_phone"))]
    pub phone: String,

    /// SMS로 수신한 6자리 인증 코드
    #[validate(custom(function = "super::validate_code"))]
    pub code: String,

    /// 계정 비밀번호 (6-64자)
    #[validate(length(
        min = 6,
        max = 64,
        message = "비밀번호는 6-64자 사이여야 합니다"
    ))]
    pub password: String,

    /// 비밀번호 확인 (password와 일치해야 함)
    pub re_password: String,
}

/// 비밀번호 일치 여부를 검증
fn validate_passwords_match(req: &RegisterRequest) -> Result<(), ValidationError> {
    if req.password != req.re_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            phone: "13800000000".to_string(),
            code: "482913".to_string(),
            password: "secret1".to_string(),
            re_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut req = valid_request();
        req.re_password = "different".to_string();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_bad_phone_rejected() {
        let mut req = valid_request();
        req.phone = "12345".to_string();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut req = valid_request();
        req.password = "abc".to_string();
        req.re_password = "abc".to_string();

        assert!(req.validate().is_err());
    }
}
