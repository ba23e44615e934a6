use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::User;
use crate::utils::string_utils::mask_phone;

/// 프로필 응답 DTO
///
/// 세션 토큰과 비밀번호 해시는 절대 포함하지 않으며,
/// 휴대폰 번호는 마스킹된 형태로만 노출됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    /// 마스킹된 휴대폰 번호 (예: `138******00`)
    pub phone: String,
    pub nickname: String,
    pub avatar: Option<String>,
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            phone: mask_phone(&user.phone),
            nickname: user.nickname,
            avatar: user.avatar,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// 회원가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: String,
    pub nickname: String,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            nickname: user.nickname,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_response_masks_phone() {
        let user = User::new("13800000000".to_string(), "$2b$04$hash".to_string());
        let profile = ProfileResponse::from(user);

        assert_eq!(profile.phone, "138******00");
        assert_eq!(profile.nickname, "user_0000");
    }

    #[test]
    fn test_profile_response_never_serializes_secrets() {
        let user = User::new("13800000000".to_string(), "$2b$04$hash".to_string());
        let json = serde_json::to_string(&ProfileResponse::from(user)).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("session_token"));
    }
}
