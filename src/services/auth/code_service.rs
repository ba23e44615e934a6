//! 인증번호 관리 서비스 구현
//!
//! SMS 인증번호의 생성, Redis 저장, 검증, 소모를 담당합니다.
//! 발송 자체는 [`SmsService`](super::sms_service::SmsService)에 위임합니다.
//!
//! ## Redis 키 구조
//!
//! | 키 | 값 | TTL | 용도 |
//! |----|----|-----|------|
//! | `sms:code:{phone}` | 6자리 코드 | 300초 | 인증번호 저장 |
//! | `sms:sent:{phone}` | `"1"` | 60초 | 재발송 간격 제한 |

use rand::Rng;
use singleton_macro::service;
use std::sync::Arc;
use crate::{
    caching::redis::RedisClient,
    config::SmsConfig,
    services::auth::sms_service::SmsService,
};
use crate::errors::errors::AppError;
use crate::utils::string_utils::mask_phone;

/// SMS 인증번호 서비스
///
/// 인증번호는 휴대폰 번호당 하나만 유효하며, 새로 발급하면 이전 번호를
/// 덮어씁니다. 검증에 성공한 번호는 즉시 삭제되어 재사용이 불가능합니다.
#[service(name = "code")]
pub struct CodeService {
    /// 인증번호 저장소
    redis: Arc<RedisClient>,
}

impl CodeService {
    /// 인증번호 생성·저장 후 발송
    ///
    /// # 처리 과정
    ///
    /// 1. 재발송 간격 확인 (`sms:sent:{phone}` 존재 여부)
    /// 2. 6자리 난수 생성
    /// 3. Redis에 TTL과 함께 저장 (기존 번호 덮어쓰기)
    /// 4. SMS 발송 (실패 시 저장된 번호 롤백)
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidParam` - 재발송 간격(60초) 미경과
    /// * `AppError::SendSmsError` - SMS 발송 실패
    /// * `AppError::RedisError` - Redis 접근 실패
    pub async fn send_code(&self, phone: &str) -> Result<(), AppError> {
        let sent_key = format!("sms:sent:{}", phone);

        let already_sent = self.redis
            .exists(&sent_key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        if already_sent {
            return Err(AppError::InvalidParam(
                "인증번호는 60초에 한 번만 요청할 수 있습니다".to_string(),
            ));
        }

        let code = Self::generate_code();
        let code_key = format!("sms:code:{}", phone);

        self.redis
            .set_with_expiry(&code_key, &code, SmsConfig::code_ttl_seconds())
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        if let Err(e) = SmsService::instance().send_code(phone, &code).await {
            // 발송 실패 시 저장된 번호를 지워 다음 요청이 즉시 가능하게 함
            let _ = self.redis.del(&code_key).await;
            return Err(e);
        }

        self.redis
            .set_with_expiry(&sent_key, &"1".to_string(), SmsConfig::resend_interval_seconds())
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::info!("✅ 인증번호 발급 완료: {}", mask_phone(phone));
        Ok(())
    }

    /// 인증번호 검증 및 소모
    ///
    /// 저장된 번호와 일치하면 즉시 삭제하여 일회용으로 만듭니다.
    /// 저장된 번호가 없거나(만료 포함) 불일치하면 모두 동일한 에러를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::CodeError` - 번호 불일치, 미발급, 만료
    /// * `AppError::RedisError` - Redis 접근 실패
    pub async fn verify_and_consume(&self, phone: &str, code: &str) -> Result<(), AppError> {
        let code_key = format!("sms:code:{}", phone);

        let stored = self.redis
            .get::<String>(&code_key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        match stored {
            Some(ref stored_code) if stored_code == code => {
                let _ = self.redis.del(&code_key).await;
                Ok(())
            }
            _ => Err(AppError::CodeError),
        }
    }

    /// 000000-999999 범위의 6자리 인증번호 생성
    fn generate_code() -> String {
        let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
        format!("{:06}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_is_six_digits() {
        for _ in 0..100 {
            let code = CodeService::generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
