//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 휴대폰 번호를 유일한 식별 수단으로 사용하는 계정 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 휴대폰 번호가 유일 키이며, 세션 토큰과 만료 시각이
/// 사용자 문서에 함께 저장되어 토큰 조회가 단일 쿼리로 끝납니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 휴대폰 번호 (unique)
    pub phone: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 표시 닉네임 (가입 시 번호 기반으로 자동 생성)
    pub nickname: String,
    /// 아바타 파일의 공개 경로
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// 현재 유효한 세션 토큰 (로그아웃 시 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// 세션 토큰 만료 시각
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime>,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성 (휴대폰/패스워드)
    ///
    /// 세션 토큰 없이 생성되며, 첫 로그인 시 토큰이 발급됩니다.
    pub fn new(phone: String, password_hash: String) -> Self {
        let now = DateTime::now();
        let nickname = Self::default_nickname(&phone);

        Self {
            id: None,
            phone,
            password_hash,
            nickname,
            avatar: None,
            session_token: None,
            token_expires_at: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 휴대폰 번호 뒷자리로 기본 닉네임을 생성합니다.
    ///
    /// 예: `13800000000` → `user_0000`
    pub fn default_nickname(phone: &str) -> String {
        let len = phone.chars().count();
        let tail: String = if len >= 4 {
            phone.chars().skip(len - 4).collect()
        } else {
            phone.to_string()
        };
        format!("user_{}", tail)
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 시각 기준으로 세션 토큰이 만료되었는지 확인
    ///
    /// 토큰이 없으면 만료로 취급합니다.
    pub fn is_token_expired(&self, now: DateTime) -> bool {
        match self.token_expires_at {
            Some(expires_at) => expires_at <= now,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nickname_uses_last_four_digits() {
        assert_eq!(User::default_nickname("13800001234"), "user_1234");
        assert_eq!(User::default_nickname("123"), "user_123");
    }

    #[test]
    fn test_new_user_has_no_session() {
        let user = User::new("13800000000".to_string(), "$2b$04$hash".to_string());

        assert!(user.id.is_none());
        assert!(user.session_token.is_none());
        assert!(user.token_expires_at.is_none());
        assert_eq!(user.nickname, "user_0000");
    }

    #[test]
    fn test_token_expiry_check() {
        let mut user = User::new("13800000000".to_string(), "$2b$04$hash".to_string());
        let now = DateTime::now();

        // 토큰이 없으면 만료로 취급
        assert!(user.is_token_expired(now));

        user.token_expires_at = Some(DateTime::from_millis(now.timestamp_millis() + 60_000));
        assert!(!user.is_token_expired(now));

        user.token_expires_at = Some(DateTime::from_millis(now.timestamp_millis() - 60_000));
        assert!(user.is_token_expired(now));
    }
}
