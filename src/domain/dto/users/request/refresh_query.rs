//! 토큰 갱신 쿼리 파라미터 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 토큰 갱신 요청의 쿼리 파라미터
///
/// `GET /api/v1/auth/refresh?token=...` 형태로 전달됩니다.
/// 토큰은 불투명 문자열이므로 비어있지 않은지만 검증하고,
/// 실제 유효성은 사용자 문서 조회로 판단합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshQuery {
    /// 현재 보유한 세션 토큰
    #[validate(length(min = 1, message = "토큰이 필요합니다"))]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        let query = RefreshQuery {
            token: String::new(),
        };

        assert!(query.validate().is_err());
    }

    #[test]
    fn test_opaque_token_accepted() {
        let query = RefreshQuery {
            token: "3f7c2a1e-8d4b-4f6a-9c0e-5b2d1a8e7f3c".to_string(),
        };

        assert!(query.validate().is_ok());
    }
}
