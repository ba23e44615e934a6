//! 세션 토큰 관리 서비스 구현
//!
//! 서명 없는 불투명(opaque) 토큰 기반의 인증 시스템을 제공합니다.
//! 토큰의 발급, 검증, 갱신(회전), 폐기를 담당하며,
//! 토큰 원문과 만료 시각은 사용자 문서에 저장됩니다.

use chrono::{Duration, Utc};
use mongodb::bson::{doc, Bson, DateTime};
use singleton_macro::service;
use std::sync::Arc;
use uuid::Uuid;
use crate::{
    config::SessionConfig,
    domain::dto::users::response::TokenResponse,
    domain::entities::users::user::User,
    repositories::users::user_repo::UserRepository,
};
use crate::errors::errors::AppError;

/// 세션 토큰 관리 서비스
///
/// UUID v4 기반의 불투명 토큰을 발급하고, MongoDB에 저장된 토큰과
/// 대조하여 검증합니다. 사용자당 토큰은 항상 하나이며,
/// 발급/갱신할 때마다 이전 토큰은 무효화됩니다(회전).
#[service(name = "token")]
pub struct TokenService {
    /// 토큰 영속화를 담당하는 사용자 리포지토리
    user_repo: Arc<UserRepository>,
}

impl TokenService {
    /// 사용자에게 새 세션 토큰 발급
    ///
    /// 새 토큰을 생성하여 사용자 문서에 저장합니다. 기존 토큰은
    /// 덮어써지므로 다른 기기의 세션은 즉시 무효화됩니다.
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 사용자 (ID 보유 필수)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenResponse)` - 발급된 토큰과 만료 시각
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 사용자 ID 없음
    /// * `AppError::DatabaseError` - 토큰 저장 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::instance();
    /// let issued = token_service.issue(&user).await?;
    /// println!("token: {}", issued.token);
    /// ```
    pub async fn issue(&self, user: &User) -> Result<TokenResponse, AppError> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        let token = Uuid::new_v4().to_string();
        let expiration = Utc::now() + Duration::hours(SessionConfig::token_ttl_hours());
        let expires_at = DateTime::from_millis(expiration.timestamp_millis());

        self.user_repo
            .update(&user_id, doc! {
                "session_token": &token,
                "token_expires_at": expires_at,
                "updated_at": DateTime::now(),
            })
            .await?
            .ok_or_else(|| AppError::InternalError("토큰 저장 대상 사용자가 없습니다".to_string()))?;

        Ok(TokenResponse { token, expires_at })
    }

    /// 토큰 검증 후 사용자 반환
    ///
    /// 미들웨어와 갱신 플로우가 공유하는 핵심 검증 로직입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenError` - 저장된 어떤 토큰과도 일치하지 않음
    /// * `AppError::TokenExpired` - 토큰은 존재하나 만료 시각 경과
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let user = self.user_repo
            .find_by_session_token(token)
            .await?
            .ok_or(AppError::TokenError)?;

        if user.is_token_expired(DateTime::now()) {
            return Err(AppError::TokenExpired);
        }

        Ok(user)
    }

    /// 기존 토큰으로 새 토큰 발급 (회전)
    ///
    /// 만료되지 않은 유효한 토큰만 갱신할 수 있습니다.
    /// 갱신 성공 시 이전 토큰은 더 이상 사용할 수 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenError` - 유효하지 않은 토큰
    /// * `AppError::TokenExpired` - 만료된 토큰 (재로그인 필요)
    pub async fn refresh(&self, token: &str) -> Result<TokenResponse, AppError> {
        let user = self.authenticate(token).await?;
        self.issue(&user).await
    }

    /// 사용자의 세션 토큰 폐기
    ///
    /// 로그아웃과 비밀번호 재설정 시 호출됩니다.
    /// 토큰 필드를 null로 만들어 이후의 모든 검증이 실패하게 합니다.
    pub async fn revoke(&self, user_id: &str) -> Result<(), AppError> {
        self.user_repo
            .update(user_id, doc! {
                "session_token": Bson::Null,
                "token_expires_at": Bson::Null,
                "updated_at": DateTime::now(),
            })
            .await?;

        Ok(())
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenError` - 잘못된 헤더 형식
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer 3f7c2a1e-8d4b-4f6a-9c0e-5b2d1a8e7f3c";
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::TokenError)
        }
    }
}
