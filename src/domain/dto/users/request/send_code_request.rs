//! 인증 코드 발송 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// SMS 인증 코드 발송 요청 DTO
///
/// 가입 여부와 무관하게 형식이 맞는 번호라면 코드를 발급합니다.
/// 재전송 제한은 서비스 계층에서 Redis 가드 키로 처리됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// 휴대폰 번호
    #[validate(custom(function = "super::validate_phone"))]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_accepted() {
        let req = SendCodeRequest {
            phone: "13800000000".to_string(),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_invalid_phone_rejected() {
        let req = SendCodeRequest {
            phone: "010-1234-5678".to_string(),
        };

        assert!(req.validate().is_err());
    }
}
