//! # Application Error Handling System
//!
//! 계정 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 결합하여 모든 실패가
//! 동일한 JSON 형식으로 클라이언트에 전달되도록 보장합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 닫힌 에러 집합
//! - 비즈니스 에러는 고정된 코드(1001~1009)를 가진 열거형 변형으로만 표현
//! - 인프라 에러(2000번대)는 내부 원인을 포함하되 클라이언트에는 메시지만 노출
//! - 새로운 실패 유형은 반드시 변형 추가로만 도입 (문자열 기반 에러 금지)
//!
//! ### 2. 자동 HTTP 응답 변환
//! - `ResponseError` 구현으로 핸들러는 `Result<HttpResponse, AppError>`만 반환
//! - 모든 실패 응답은 `{"code": <number>, "message": <text>}` 형식
//!
//! ## 에러 코드 매핑
//!
//! | AppError | code | HTTP Status |
//! |----------|------|-------------|
//! | `InvalidParam` | 1001 | 400 Bad Request |
//! | `CodeError` | 1002 | 400 Bad Request |
//! | `AlreadyRegistered` | 1003 | 409 Conflict |
//! | `UnRegistered` | 1004 | 404 Not Found |
//! | `PasswordError` | 1005 | 401 Unauthorized |
//! | `TokenError` | 1006 | 401 Unauthorized |
//! | `TokenExpired` | 1007 | 401 Unauthorized |
//! | `UploadError` | 1008 | 500 Internal Server Error |
//! | `SendSmsError` | 1009 | 502 Bad Gateway |
//! | `InternalError` | 2000 | 500 Internal Server Error |
//! | `DatabaseError` | 2001 | 500 Internal Server Error |
//! | `RedisError` | 2002 | 500 Internal Server Error |
//! | `AuthenticationError` | 2003 | 401 Unauthorized |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
//!     if self.user_repo.find_by_phone(&req.phone).await?.is_some() {
//!         return Err(AppError::AlreadyRegistered);
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 계정 서비스의 모든 실패 경로를 포괄하는 열거형입니다.
/// 1000번대는 클라이언트가 분기 처리하는 비즈니스 에러,
/// 2000번대는 인프라/시스템 에러입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패 (형식 오류, 비밀번호 불일치 등)
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// 휴대폰 인증 코드 불일치 혹은 만료
    #[error("verification code is incorrect or expired")]
    CodeError,

    /// 이미 가입된 휴대폰 번호로 재가입 시도
    #[error("phone number is already registered")]
    AlreadyRegistered,

    /// 가입되지 않은 휴대폰 번호
    #[error("phone number is not registered")]
    UnRegistered,

    /// 비밀번호 불일치
    #[error("password is incorrect")]
    PasswordError,

    /// 알 수 없거나 위조된 세션 토큰
    #[error("session token is invalid")]
    TokenError,

    /// 만료된 세션 토큰
    #[error("session token has expired")]
    TokenExpired,

    /// 아바타 저장 실패
    #[error("upload failed: {0}")]
    UploadError(String),

    /// SMS 게이트웨이 전송 실패
    #[error("failed to send sms: {0}")]
    SendSmsError(String),

    /// 데이터베이스 관련 에러
    #[error("database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    #[error("redis error: {0}")]
    RedisError(String),

    /// 인증 컨텍스트 누락 등 미들웨어 수준의 인증 실패
    #[error("authentication error: {0}")]
    AuthenticationError(String),

    /// 예상하지 못한 내부 오류
    #[error("internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문에 실리는 고정 비즈니스 코드를 반환합니다.
    pub fn business_code(&self) -> u16 {
        match self {
            AppError::InvalidParam(_) => 1001,
            AppError::CodeError => 1002,
            AppError::AlreadyRegistered => 1003,
            AppError::UnRegistered => 1004,
            AppError::PasswordError => 1005,
            AppError::TokenError => 1006,
            AppError::TokenExpired => 1007,
            AppError::UploadError(_) => 1008,
            AppError::SendSmsError(_) => 1009,
            AppError::InternalError(_) => 2000,
            AppError::DatabaseError(_) => 2001,
            AppError::RedisError(_) => 2002,
            AppError::AuthenticationError(_) => 2003,
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 실패는 다음 형식의 JSON으로 직렬화됩니다:
    ///
    /// ```json
    /// {
    ///   "code": 1005,
    ///   "message": "password is incorrect"
    /// }
    /// ```
    ///
    /// 5xx 에러는 내부 원인을 서버 로그에만 남기고,
    /// 클라이언트에는 변형의 표시 메시지만 노출합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::InvalidParam(_) | AppError::CodeError => StatusCode::BAD_REQUEST,
            AppError::AlreadyRegistered => StatusCode::CONFLICT,
            AppError::UnRegistered => StatusCode::NOT_FOUND,
            AppError::PasswordError
            | AppError::TokenError
            | AppError::TokenExpired
            | AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::SendSmsError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            log::error!("request failed ({}): {}", self.business_code(), self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "code": self.business_code(),
            "message": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let user = collection.find_one(filter).await
///     .context("Failed to find user")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_invalid_param_response() {
        let error = AppError::InvalidParam("phone format".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.business_code(), 1001);
    }

    #[test]
    fn test_code_error_response() {
        let error = AppError::CodeError;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.business_code(), 1002);
    }

    #[test]
    fn test_already_registered_response() {
        let error = AppError::AlreadyRegistered;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(error.business_code(), 1003);
    }

    #[test]
    fn test_unregistered_response() {
        let error = AppError::UnRegistered;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.business_code(), 1004);
    }

    #[test]
    fn test_password_error_response() {
        let error = AppError::PasswordError;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.business_code(), 1005);
    }

    #[test]
    fn test_token_errors_are_distinct() {
        assert_eq!(AppError::TokenError.business_code(), 1006);
        assert_eq!(AppError::TokenExpired.business_code(), 1007);

        let unknown = AppError::TokenError.error_response();
        let expired = AppError::TokenExpired.error_response();
        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_upload_error_response() {
        let error = AppError::UploadError("disk full".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.business_code(), 1008);
    }

    #[test]
    fn test_send_sms_error_response() {
        let error = AppError::SendSmsError("gateway timeout".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(error.business_code(), 1009);
    }

    #[test]
    fn test_infrastructure_errors_map_to_500() {
        let db = AppError::DatabaseError("connection reset".to_string());
        let redis = AppError::RedisError("timeout".to_string());

        assert_eq!(db.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(redis.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.business_code(), 2001);
        assert_eq!(redis.business_code(), 2002);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
