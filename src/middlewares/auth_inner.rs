//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::domain::dto::users::request::RefreshQuery;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::auth::authentication_request::AuthMode;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            // TokenService 인스턴스 가져오기
            let token_service = TokenService::instance();

            // 헤더/쿼리에서 토큰 추출 후 DB 대조 검증
            let auth_result = authenticate_request(&req, &token_service).await;

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패: 에러 분류 체계 그대로 응답
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                // 인증 성공: 사용자 정보를 Request Extensions에 저장
                (_, Ok(user)) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                },
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 세션 토큰을 추출하고 검증
///
/// Authorization 헤더의 Bearer 토큰이 우선하고, 없으면 `?token=` 쿼리
/// 파라미터를 확인합니다. 추출된 토큰은 DB에 저장된 토큰과 대조됩니다.
async fn authenticate_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> actix_web::Result<AuthenticatedUser, AppError> {
    let token = extract_token(req, token_service)?;

    let user = token_service.authenticate(&token).await?;

    let user_id = user.id_string().ok_or_else(|| {
        AppError::InternalError("사용자 ID가 없습니다".to_string())
    })?;

    // AuthenticatedUser 구조체 생성
    Ok(AuthenticatedUser {
        user_id,
        phone: user.phone,
        nickname: user.nickname,
    })
}

/// 헤더 또는 쿼리 스트링에서 토큰 문자열 추출
fn extract_token(req: &ServiceRequest, token_service: &TokenService) -> Result<String, AppError> {
    if let Some(auth_header) = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        return token_service
            .extract_bearer_token(auth_header)
            .map(str::to_string);
    }

    if let Ok(query) = web::Query::<RefreshQuery>::from_query(req.query_string()) {
        return Ok(query.into_inner().token);
    }

    Err(AppError::TokenError)
}
