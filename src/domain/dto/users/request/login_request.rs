//! 로그인 요청 DTO
//!
//! 비밀번호 또는 SMS 인증 코드 중 하나로 로그인하는 요청 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::deserialize_optional_string;

/// 로그인 요청 DTO
///
/// `password`와 `code` 중 정확히 하나 이상이 있어야 하며,
/// 둘 다 있으면 비밀번호가 우선합니다. 빈 문자열은 역직렬화 단계에서
/// None으로 정규화되므로 `{"password": ""}`는 자격 증명 누락으로 처리됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_credential_present"))]
pub struct LoginRequest {
    /// 휴대폰 번호
    #[validate(custom(function = "super::validate_phone"))]
    pub phone: String,

    /// 계정 비밀번호
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub password: Option<String>,

    /// SMS 인증 코드
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,
}

impl LoginRequest {
    /// 비밀번호 로그인 요청인지 확인 (비밀번호 우선)
    pub fn uses_password(&self) -> bool {
        self.password.is_some()
    }
}

/// 비밀번호 또는 코드 중 하나는 반드시 존재해야 함
fn validate_credential_present(req: &LoginRequest) -> Result<(), ValidationError> {
    if req.password.is_none() && req.code.is_none() {
        return Err(ValidationError::new("credential_missing")
            .with_message("비밀번호 또는 인증 코드가 필요합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_login_valid() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"phone": "13800000000", "password": "secret1"}"#).unwrap();

        assert!(req.validate().is_ok());
        assert!(req.uses_password());
    }

    #[test]
    fn test_code_login_valid() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"phone": "13800000000", "code": "482913"}"#).unwrap();

        assert!(req.validate().is_ok());
        assert!(!req.uses_password());
    }

    #[test]
    fn test_missing_credential_rejected() {
        let req: LoginRequest = serde_json::from_str(r#"{"phone": "13800000000"}"#).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_password_treated_as_missing() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"phone": "13800000000", "password": ""}"#).unwrap();

        assert_eq!(req.password, None);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_password_takes_priority_when_both_present() {
        let req: LoginRequest = serde_json::from_str(
            r#"{"phone": "13800000000", "password": "secret1", "code": "482913"}"#,
        )
        .unwrap();

        assert!(req.uses_password());
    }
}
