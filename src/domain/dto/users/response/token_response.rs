//! 세션 토큰 응답 DTO

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;

/// 로그인/갱신 성공 시 반환되는 토큰 응답
///
/// 토큰은 서명 없는 불투명 문자열이며, 클라이언트는 만료 시각을 보고
/// 갱신 시점을 판단합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// 불투명 세션 토큰
    pub token: String,
    /// 토큰 만료 시각
    pub expires_at: DateTime,
}

/// 아바타 업로드 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarResponse {
    /// 업로드된 아바타의 공개 URL 경로
    pub avatar: String,
}
