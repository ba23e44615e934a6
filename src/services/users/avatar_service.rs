//! 아바타 저장 서비스 구현
//!
//! 업로드된 이미지 바이트를 로컬 디스크에 저장하고 사용자 문서의
//! 아바타 경로를 갱신합니다. 저장된 파일은 정적 파일 핸들러를 통해
//! `/public/uploads/avatar/{파일명}` 경로로 노출됩니다.

use singleton_macro::service;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;
use actix_web::web;
use mongodb::bson::{doc, DateTime};
use crate::{
    config::AvatarConfig,
    domain::dto::users::response::AvatarResponse,
    repositories::users::user_repo::UserRepository,
};
use crate::errors::errors::AppError;
use crate::utils::string_utils::file_extension;

/// 허용되는 아바타 이미지 확장자
const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// 아바타 저장 서비스
///
/// 파일명은 `{uuid}.{확장자}` 형식으로 생성하여 충돌과 경로 조작을
/// 원천 차단합니다. 디스크 쓰기는 임시 파일에 기록 후 rename 하므로
/// 절반만 쓰인 파일이 공개 경로에 노출되지 않습니다.
#[service(name = "avatar")]
pub struct AvatarService {
    /// 아바타 경로 갱신을 담당하는 사용자 리포지토리
    user_repo: Arc<UserRepository>,
}

impl AvatarService {
    /// 업로드된 아바타 저장 및 사용자 프로필 반영
    ///
    /// # 처리 과정
    ///
    /// 1. **확장자 결정**: 파일명 우선, 없으면 Content-Type으로 판별
    /// 2. **디스크 저장**: 임시 파일 기록 후 rename (blocking 스레드풀 사용)
    /// 3. **프로필 갱신**: 사용자 문서의 `avatar` 필드 업데이트
    /// 4. **실패 정리**: 갱신 실패 시 저장된 파일 제거
    ///
    /// # Arguments
    ///
    /// * `user_id` - 업로드한 사용자의 ID
    /// * `bytes` - 완전히 버퍼링된 이미지 바이트
    /// * `filename` - 클라이언트가 제시한 원본 파일명 (선택)
    /// * `content_type` - 요청의 Content-Type 헤더 값 (선택)
    ///
    /// # Returns
    ///
    /// * `Ok(AvatarResponse)` - 공개 URL 경로
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidParam` - 허용되지 않는 이미지 형식
    /// * `AppError::UploadError` - 디스크 저장 실패
    pub async fn upload(
        &self,
        user_id: &str,
        bytes: Vec<u8>,
        filename: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<AvatarResponse, AppError> {
        if bytes.is_empty() {
            return Err(AppError::InvalidParam("업로드된 파일이 비어 있습니다".to_string()));
        }

        let extension = Self::resolve_extension(filename, content_type)?;
        let stored_name = format!("{}.{}", Uuid::new_v4(), extension);

        let dir = PathBuf::from(AvatarConfig::dir());
        let final_path = dir.join(&stored_name);
        let temp_path = dir.join(format!("{}.tmp", stored_name));

        // 디스크 I/O는 워커 스레드를 막지 않도록 blocking 풀에서 수행
        let write_final_path = final_path.clone();
        web::block(move || -> std::io::Result<()> {
            std::fs::create_dir_all(&dir)?;
            std::fs::write(&temp_path, &bytes)?;
            std::fs::rename(&temp_path, &write_final_path)
        })
        .await
        .map_err(|e| AppError::UploadError(format!("저장 작업 실행 실패: {}", e)))?
        .map_err(|e| AppError::UploadError(format!("아바타 파일 저장 실패: {}", e)))?;

        let public_path = format!("{}/{}", AvatarConfig::public_prefix(), stored_name);

        // 프로필 반영 실패 시 방금 저장한 파일은 제거
        let updated = self.user_repo
            .update(user_id, doc! {
                "avatar": &public_path,
                "updated_at": DateTime::now(),
            })
            .await;

        match updated {
            Ok(Some(_)) => {
                log::info!("✅ 아바타 업로드 완료: {} → {}", user_id, public_path);
                Ok(AvatarResponse { avatar: public_path })
            }
            Ok(None) => {
                let _ = std::fs::remove_file(&final_path);
                Err(AppError::UnRegistered)
            }
            Err(e) => {
                let _ = std::fs::remove_file(&final_path);
                Err(e)
            }
        }
    }

    /// 파일명과 Content-Type으로부터 저장 확장자 결정
    ///
    /// 파일명의 확장자가 허용 목록에 있으면 그대로 사용하고,
    /// 없으면 Content-Type MIME 타입으로 판별합니다.
    fn resolve_extension(
        filename: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<String, AppError> {
        if let Some(name) = filename {
            if let Some(ext) = file_extension(name) {
                if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
                    return Ok(ext);
                }
            }
        }

        match content_type {
            Some("image/png") => Ok("png".to_string()),
            Some("image/jpeg") => Ok("jpg".to_string()),
            Some("image/gif") => Ok("gif".to_string()),
            Some("image/webp") => Ok("webp".to_string()),
            _ => Err(AppError::InvalidParam(
                "지원하지 않는 이미지 형식입니다 (png/jpg/gif/webp)".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_extension_prefers_filename() {
        let ext = AvatarService::resolve_extension(Some("me.PNG"), Some("image/jpeg")).unwrap();
        assert_eq!(ext, "png");
    }

    #[test]
    fn test_resolve_extension_falls_back_to_content_type() {
        let ext = AvatarService::resolve_extension(None, Some("image/webp")).unwrap();
        assert_eq!(ext, "webp");

        // 허용되지 않는 파일명 확장자도 Content-Type으로 복구
        let ext = AvatarService::resolve_extension(Some("note.txt"), Some("image/png")).unwrap();
        assert_eq!(ext, "png");
    }

    #[test]
    fn test_resolve_extension_rejects_unknown_type() {
        let result = AvatarService::resolve_extension(Some("script.sh"), Some("text/plain"));
        assert!(matches!(result, Err(AppError::InvalidParam(_))));
    }
}
