use serde::Serialize;

/// 성공 응답 봉투
///
/// 모든 성공 응답은 `{"code": 0, "data": ...}` 형태로 감싸서 반환합니다.
/// 실패 응답(`{"code": n, "message": ...}`)은 `AppError::error_response()`가
/// 생성하므로, 클라이언트는 항상 `code` 필드로 성공 여부를 판별할 수 있습니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// Ok(HttpResponse::Ok().json(ApiResponse::ok(ProfileResponse::from(user))))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// 비즈니스 코드 (성공은 항상 0)
    pub code: u16,

    /// 응답 데이터
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { code: 0, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let body = ApiResponse::ok(json!({"token": "abc"}));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["code"], 0);
        assert_eq!(value["data"]["token"], "abc");
    }
}
