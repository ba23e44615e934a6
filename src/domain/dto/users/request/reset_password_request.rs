//! 비밀번호 재설정 요청 DTO
//!
//! 회원가입과 동일한 형식 검증을 적용하되, 기존 계정이 존재해야 합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 비밀번호 재설정 요청 DTO
///
/// 인증 코드로 본인 확인 후 새 비밀번호를 설정합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct ResetPasswordRequest {
    /// 휴대폰 번호
    #[validate(custom(function = "super::validate_phone"))]
    pub phone: String,

    /// SMS로 수신한 6자리 인증 코드
    #[validate(custom(function = "super::validate_code"))]
    pub code: String,

    /// 새 비밀번호 (6-64자)
    #[validate(length(
        min = 6,
        max = 64,
        message = "비밀번호는 6-64자 사이여야 합니다"
    ))]
    pub password: String,

    /// 새 비밀번호 확인
    pub re_password: String,
}

/// 비밀번호 일치 여부를 검증
fn validate_passwords_match(req: &ResetPasswordRequest) -> Result<(), ValidationError> {
    if req.password != req.re_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reset_request() {
        let req = ResetPasswordRequest {
            phone: "13800000000".to_string(),
            code: "482913".to_string(),
            password: "newpass1".to_string(),
            re_password: "newpass1".to_string(),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_mismatched_passwords_rejected() {
        let req = ResetPasswordRequest {
            phone: "13800000000".to_string(),
            code: "482913".to_string(),
            password: "newpass1".to_string(),
            re_password: "other".to_string(),
        };

        assert!(req.validate().is_err());
    }
}
