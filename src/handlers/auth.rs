//! Authentication HTTP Handlers
//!
//! 인증 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 인증번호 발송, 회원가입, 로그인, 비밀번호 재설정, 토큰 갱신을 담당합니다.
//!
//! # 엔드포인트 목록
//!
//! | 메서드 | 경로 | 설명 | 인증 |
//! |--------|------|------|------|
//! | `POST` | `/api/v1/auth/code` | SMS 인증번호 발송 | 불필요 |
//! | `POST` | `/api/v1/auth/register` | 회원가입 | 불필요 |
//! | `POST` | `/api/v1/auth/login` | 로그인 (비밀번호/인증번호) | 불필요 |
//! | `POST` | `/api/v1/auth/reset-password` | 비밀번호 재설정 | 불필요 |
//! | `GET` | `/api/v1/auth/refresh` | 토큰 갱신 (`?token=`) | 토큰 |
//!
//! # 응답 형식
//!
//! 성공 응답은 항상 `{"code": 0, "data": ...}` 봉투를 사용하고,
//! 실패 응답은 `{"code": n, "message": "..."}` 형태로 비즈니스 코드를 포함합니다.
use actix_web::{get, post, web, HttpResponse};
use serde_json::Value;
use validator::Validate;
use crate::domain::{
    ApiResponse, LoginRequest, RefreshQuery, RegisterRequest, ResetPasswordRequest,
    SendCodeRequest,
};
use crate::core::errors::AppError;
use crate::services::auth::{CodeService, TokenService};
use crate::services::users::user_service::UserService;

/// SMS 인증번호 발송 핸들러
///
/// 지정된 휴대폰 번호로 6자리 인증번호를 발송합니다.
/// 같은 번호로는 60초에 한 번만 재요청할 수 있습니다.
///
/// # Endpoint
/// `POST /api/v1/auth/code`
///
/// # Request Body
/// ```json
/// { "phone": "13800000000" }
/// ```
///
/// # Errors
/// - 잘못된 번호 형식 / 재발송 간격 미경과 → `1001` (400)
/// - SMS 게이트웨이 오류 → `1009` (502)
#[post("/code")]
pub async fn send_code(
    payload: web::Json<SendCodeRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::InvalidParam(e.to_string()))?;

    CodeService::instance().send_code(&payload.phone).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(Value::Null)))
}

/// 회원가입 핸들러
///
/// SMS 인증번호 검증을 거쳐 새 계정을 생성합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/register`
///
/// # Request Body
/// ```json
/// {
///   "phone": "13800000000",
///   "code": "123456",
///   "password": "secret1",
///   "re_password": "secret1"
/// }
/// ```
///
/// # Response (201 Created)
/// ```json
/// {
///   "code": 0,
///   "data": { "id": "507f1f77bcf86cd799439011", "nickname": "user_9011" }
/// }
/// ```
///
/// # Errors
/// - 비밀번호 확인 불일치 → `1001` (400)
/// - 인증번호 오류 → `1002` (400)
/// - 이미 가입된 번호 → `1003` (409)
///
/// # 사용 예제
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/register \
///   -H "Content-Type: application/json" \
///   -d '{"phone":"13800000000","code":"123456","password":"secret1","re_password":"secret1"}'
/// ```
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 (형식 + 비밀번호 확인 일치)
    payload.validate()
        .map_err(|e| AppError::InvalidParam(e.to_string()))?;

    let service = UserService::instance();
    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(response)))
}

/// 로그인 핸들러
///
/// 비밀번호 또는 SMS 인증번호로 로그인하고 세션 토큰을 발급합니다.
/// 두 자격증명이 모두 오면 비밀번호가 우선합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
///
/// # Request Body
/// ```json
/// { "phone": "13800000000", "password": "secret1" }
/// ```
/// 또는
/// ```json
/// { "phone": "13800000000", "code": "123456" }
/// ```
///
/// # Response (200 OK)
/// ```json
/// {
///   "code": 0,
///   "data": {
///     "token": "3f7c2a1e-8d4b-4f6a-9c0e-5b2d1a8e7f3c",
///     "expires_at": "2024-06-21T12:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
/// - 미가입 번호 → `1004` (404)
/// - 비밀번호 오류 → `1005` (401)
/// - 인증번호 오류 → `1002` (400)
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 (자격증명 최소 하나 필수)
    payload.validate()
        .map_err(|e| AppError::InvalidParam(e.to_string()))?;

    let service = UserService::instance();
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

/// 비밀번호 재설정 핸들러
///
/// SMS 인증번호로 본인 확인 후 비밀번호를 교체합니다.
/// 성공 시 기존 세션 토큰은 폐기되므로 재로그인이 필요합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/reset-password`
///
/// # Request Body
/// 회원가입과 동일한 형식입니다 (phone, code, password, re_password).
///
/// # Errors
/// - 미가입 번호 → `1004` (404)
/// - 인증번호 오류 → `1002` (400)
#[post("/reset-password")]
pub async fn reset_password(
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::InvalidParam(e.to_string()))?;

    let service = UserService::instance();
    service.reset_password(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(Value::Null)))
}

/// 토큰 갱신 핸들러
///
/// 기존 토큰으로 새 토큰을 발급받습니다(회전).
/// 갱신 성공 시 이전 토큰은 즉시 무효화됩니다.
///
/// # Endpoint
/// `GET /api/v1/auth/refresh?token={token}`
///
/// # Response (200 OK)
/// ```json
/// {
///   "code": 0,
///   "data": {
///     "token": "9a1b3c5d-7e9f-4a2b-8c4d-6e8f0a2b4c6d",
///     "expires_at": "2024-06-28T12:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
/// - 알 수 없는 토큰 → `1006` (401)
/// - 만료된 토큰 → `1007` (401), 재로그인 필요
#[get("/refresh")]
pub async fn refresh(
    query: web::Query<RefreshQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::InvalidParam(e.to_string()))?;

    let response = TokenService::instance().refresh(&query.token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}
