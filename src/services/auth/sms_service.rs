//! SMS 발송 서비스 구현
//!
//! 외부 SMS 게이트웨이를 통해 인증번호 문자를 발송합니다.
//! 게이트웨이 URL이 설정되지 않은 환경에서는 실제 발송 대신
//! 로그로 대체하는 목(mock) 모드로 동작합니다.

use serde_json::json;
use singleton_macro::service;
use crate::config::SmsConfig;
use crate::errors::errors::AppError;
use crate::utils::string_utils::mask_phone;

/// SMS 발송 서비스
///
/// 발송 자체에만 책임을 가지며, 인증번호의 생성/저장/검증은
/// `CodeService`가 담당합니다.
///
/// ## 동작 모드
///
/// | `SMS_GATEWAY_URL` | 동작 |
/// |-------------------|------|
/// | 설정됨 | 게이트웨이로 HTTP POST 발송 |
/// | 미설정 | 발송 생략, 인증번호를 로그로 출력 (개발용) |
#[service(name = "sms")]
pub struct SmsService {
    // 외부 의존성 없음
}

impl SmsService {
    /// 인증번호 문자 발송
    ///
    /// # Arguments
    ///
    /// * `phone` - 수신자 휴대폰 번호
    /// * `code` - 6자리 인증번호
    ///
    /// # Errors
    ///
    /// * `AppError::SendSmsError` - 게이트웨이 호출 실패 또는 비정상 응답
    pub async fn send_code(&self, phone: &str, code: &str) -> Result<(), AppError> {
        let Some(gateway_url) = SmsConfig::gateway_url() else {
            // 게이트웨이 미설정: 개발 환경에서 코드를 직접 확인할 수 있게 로그로 대체
            log::info!("📨 [MOCK SMS] {} 에게 인증번호 {} 발송", phone, code);
            return Ok(());
        };

        let client = reqwest::Client::new();

        let body = json!({
            "phone": phone,
            "content": format!("[인증번호] {} (5분 내 입력)", code),
        });

        let response = client
            .post(&gateway_url)
            .bearer_auth(SmsConfig::gateway_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::SendSmsError(format!("SMS 게이트웨이 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::SendSmsError(format!(
                "SMS 게이트웨이 응답 오류 ({}): {}", status, error_text
            )));
        }

        log::info!("📨 SMS 발송 완료: {}", mask_phone(phone));
        Ok(())
    }
}
