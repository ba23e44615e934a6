//! User HTTP Handlers
//!
//! 인증된 사용자 본인의 계정을 다루는 HTTP 엔드포인트 핸들러들입니다.
//! `/api/v1/me` 스코프 전체가 `AuthMiddleware::required()` 뒤에 있으므로
//! 모든 핸들러는 [`AuthenticatedUser`] 추출기로 호출자 정보를 받습니다.
//!
//! # 엔드포인트 목록
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/api/v1/me/profile` | 내 프로필 조회 |
//! | `POST` | `/api/v1/me/avatar` | 아바타 업로드 (raw body 스트리밍) |
//! | `POST` | `/api/v1/me/logout` | 로그아웃 (세션 토큰 폐기) |
//!
//! # 아바타 업로드 방식
//!
//! multipart가 아닌 raw body 방식입니다. 클라이언트는 이미지 바이트를
//! 본문에 그대로 싣고, 원본 파일명은 `?filename=` 쿼리로, 형식은
//! `Content-Type` 헤더로 전달합니다. 스트림은 항상 끝까지 소비한 뒤
//! 응답하므로 실패 시에도 커넥션이 재사용 가능한 상태로 남습니다.
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use serde::Deserialize;
use serde_json::Value;
use crate::config::AvatarConfig;
use crate::core::errors::AppError;
use crate::domain::{ApiResponse, AuthenticatedUser};
use crate::services::users::{avatar_service::AvatarService, user_service::UserService};

/// 아바타 업로드 쿼리 파라미터
///
/// `filename`은 선택 사항이며 확장자 판별에만 사용됩니다.
#[derive(Debug, Deserialize)]
pub struct AvatarUploadQuery {
    pub filename: Option<String>,
}

/// 본인 프로필 조회 핸들러
///
/// 인증 미들웨어가 주입한 사용자 ID로 프로필을 조회합니다.
/// 비밀번호 해시와 세션 토큰은 응답에 포함되지 않습니다.
///
/// # Endpoint
/// `GET /api/v1/me/profile`
///
/// # Response (200 OK)
/// ```json
/// {
///   "code": 0,
///   "data": {
///     "id": "507f1f77bcf86cd799439011",
///     "phone": "13800000000",
///     "nickname": "user_9011",
///     "avatar": "/public/uploads/avatar/3f7c2a1e.png",
///     "created_at": "2024-06-01T09:00:00Z"
///   }
/// }
/// ```
///
/// # 사용 예제
/// ```bash
/// curl http://localhost:8080/api/v1/me/profile \
///   -H "Authorization: Bearer {token}"
/// ```
#[get("/profile")]
pub async fn get_profile(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let profile = service.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(profile)))
}

/// 아바타 업로드 핸들러
///
/// 요청 본문의 이미지 바이트를 전량 버퍼링한 뒤 [`AvatarService`]에
/// 저장을 위임합니다. 크기 제한을 초과하거나 저장에 실패해도 남은
/// 스트림을 모두 비운 뒤에 에러를 반환합니다.
///
/// # Endpoint
/// `POST /api/v1/me/avatar?filename=me.png`
///
/// # Response (200 OK)
/// ```json
/// {
///   "code": 0,
///   "data": { "avatar": "/public/uploads/avatar/9a1b3c5d-....png" }
/// }
/// ```
///
/// # Errors
/// - 빈 본문 / 크기 초과 / 미지원 형식 → `1001` (400)
/// - 디스크 저장 실패 → `1008` (500), 기존 아바타 경로는 유지됩니다
///
/// # 사용 예제
/// ```bash
/// curl -X POST "http://localhost:8080/api/v1/me/avatar?filename=me.png" \
///   -H "Authorization: Bearer {token}" \
///   -H "Content-Type: image/png" \
///   --data-binary @me.png
/// ```
#[post("/avatar")]
pub async fn upload_avatar(
    user: AuthenticatedUser,
    req: HttpRequest,
    query: web::Query<AvatarUploadQuery>,
    mut payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let max_bytes = AvatarConfig::max_bytes();
    let mut buffer: Vec<u8> = Vec::new();
    let mut oversized = false;

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            log::warn!("❌ 아바타 업로드 스트림 오류: {} (사용자: {})", e, user.user_id);
            AppError::UploadError(format!("업로드 스트림 읽기 실패: {}", e))
        })?;

        if buffer.len() + chunk.len() > max_bytes {
            oversized = true;
            break;
        }
        buffer.extend_from_slice(&chunk);
    }

    // 크기 초과 시에도 스트림을 끝까지 비워 커넥션을 살려둔다
    if oversized {
        drain(&mut payload).await;
        return Err(AppError::InvalidParam(format!(
            "아바타 파일이 너무 큽니다 (최대 {}바이트)",
            max_bytes
        )));
    }

    let content_type = req
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let service = AvatarService::instance();
    let response = service
        .upload(
            &user.user_id,
            buffer,
            query.filename.as_deref(),
            content_type.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

/// 로그아웃 핸들러
///
/// 현재 세션 토큰을 폐기합니다. 이미 폐기된 토큰으로 재호출해도
/// 멱등하게 성공합니다.
///
/// # Endpoint
/// `POST /api/v1/me/logout`
///
/// # Response (200 OK)
/// ```json
/// { "code": 0, "data": null }
/// ```
#[post("/logout")]
pub async fn logout(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.logout(&user.user_id).await?;

    log::info!("✅ 로그아웃 완료: {}", user.user_id);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(Value::Null)))
}

/// 남은 본문 청크를 읽어서 버립니다.
async fn drain(payload: &mut web::Payload) {
    while let Some(chunk) = payload.next().await {
        if chunk.is_err() {
            break;
        }
    }
}
