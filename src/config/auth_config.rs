//! # Authentication Configuration Module
//!
//! 세션 토큰, SMS 인증 코드, 아바타 업로드 등 인증·계정 관련 설정을
//! 관리하는 모듈입니다. Spring Security의 프로퍼티 기반 설정과 유사하게
//! 모든 값을 환경 변수에서 읽어오며 합리적인 기본값을 제공합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 세션 토큰 설정
//! ```bash
//! export TOKEN_TTL_HOURS="168"            # 7일
//! ```
//!
//! ### SMS 인증 코드 설정
//! ```bash
//! export SMS_CODE_TTL_SECONDS="300"       # 코드 유효 시간
//! export SMS_RESEND_INTERVAL_SECONDS="60" # 재전송 제한
//! export SMS_GATEWAY_URL="https://sms.example.com/send"
//! export SMS_GATEWAY_KEY="your-gateway-api-key"
//! ```
//!
//! ### 아바타 업로드 설정
//! ```bash
//! export AVATAR_DIR="./public/uploads/avatar"
//! export AVATAR_MAX_BYTES="2097152"       # 2 MiB
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{SessionConfig, SmsConfig, AvatarConfig};
//!
//! let ttl = SessionConfig::token_ttl_hours();
//! let code_ttl = SmsConfig::code_ttl_seconds();
//! let max_bytes = AvatarConfig::max_bytes();
//! ```

use std::env;

/// 세션 토큰 관련 설정을 관리하는 구조체
///
/// 불투명(opaque) 세션 토큰의 수명을 관리합니다.
/// 토큰 자체는 서명 없는 랜덤 UUID이며, 유효성은 사용자 문서에 저장된
/// 만료 시각과의 비교로만 판단합니다.
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 토큰의 유효 시간을 시간 단위로 반환합니다.
    ///
    /// 로그인과 토큰 갱신 시 `now + TTL`로 만료 시각을 다시 계산합니다.
    ///
    /// # 기본값
    ///
    /// 168시간 (7일)
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export TOKEN_TTL_HOURS="24"
    /// ```
    pub fn token_ttl_hours() -> i64 {
        env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "168".to_string())
            .parse()
            .unwrap_or(168)
    }
}

/// SMS 인증 코드 관련 설정을 관리하는 구조체
///
/// 인증 코드의 수명과 재전송 제한, 그리고 외부 SMS 게이트웨이
/// 연동 정보를 관리합니다.
pub struct SmsConfig;

impl SmsConfig {
    /// 인증 코드의 유효 시간을 초 단위로 반환합니다.
    ///
    /// Redis 키 `sms:code:{phone}`의 TTL로 사용됩니다.
    ///
    /// # 기본값
    ///
    /// 300초 (5분)
    pub fn code_ttl_seconds() -> usize {
        env::var("SMS_CODE_TTL_SECONDS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .unwrap_or(300)
    }

    /// 동일 번호에 대한 재전송 최소 간격을 초 단위로 반환합니다.
    ///
    /// Redis 키 `sms:sent:{phone}`의 TTL로 사용되며,
    /// 이 키가 살아있는 동안 재전송 요청은 거부됩니다.
    ///
    /// # 기본값
    ///
    /// 60초
    pub fn resend_interval_seconds() -> usize {
        env::var("SMS_RESEND_INTERVAL_SECONDS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .unwrap_or(60)
    }

    /// SMS 게이트웨이 엔드포인트 URL을 반환합니다.
    ///
    /// 설정되지 않은 경우 `None`을 반환하며, 이때 서비스는
    /// 실제 발송 대신 코드를 로그로 출력하는 모의 모드로 동작합니다.
    /// 로컬 개발 환경에서 게이트웨이 계정 없이 전체 플로우를 검증할 수 있습니다.
    pub fn gateway_url() -> Option<String> {
        env::var("SMS_GATEWAY_URL").ok().filter(|v| !v.is_empty())
    }

    /// SMS 게이트웨이 API 키를 반환합니다.
    ///
    /// # 보안 주의사항
    ///
    /// - 이 값을 로그에 출력하지 마세요
    /// - 환경 변수나 보안 저장소에만 저장하세요
    pub fn gateway_key() -> String {
        env::var("SMS_GATEWAY_KEY").unwrap_or_default()
    }
}

/// 아바타 업로드 관련 설정을 관리하는 구조체
///
/// 업로드 파일의 저장 위치와 크기 제한을 관리합니다.
pub struct AvatarConfig;

impl AvatarConfig {
    /// 아바타 파일이 저장될 디렉토리 경로를 반환합니다.
    ///
    /// 서버 시작 시 이 디렉토리가 없으면 생성됩니다.
    ///
    /// # 기본값
    ///
    /// `./public/uploads/avatar`
    pub fn dir() -> String {
        env::var("AVATAR_DIR").unwrap_or_else(|_| "./public/uploads/avatar".to_string())
    }

    /// 업로드 가능한 최대 바이트 수를 반환합니다.
    ///
    /// 스트리밍 수신 중 누적 크기가 이 값을 넘으면 나머지 본문을
    /// 소진한 뒤 업로드 에러로 응답합니다.
    ///
    /// # 기본값
    ///
    /// 2097152 (2 MiB)
    pub fn max_bytes() -> usize {
        env::var("AVATAR_MAX_BYTES")
            .unwrap_or_else(|_| (2 * 1024 * 1024).to_string())
            .parse()
            .unwrap_or(2 * 1024 * 1024)
    }

    /// 클라이언트에 반환되는 공개 URL 접두사를 반환합니다.
    ///
    /// 저장된 파일명 앞에 붙어 `/public/uploads/avatar/{uuid}.png` 형태의
    /// 경로를 만듭니다. 정적 파일 마운트 경로와 일치해야 합니다.
    ///
    /// # 기본값
    ///
    /// `/public/uploads/avatar`
    pub fn public_prefix() -> String {
        env::var("AVATAR_PUBLIC_PREFIX")
            .unwrap_or_else(|_| "/public/uploads/avatar".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_default() {
        if env::var("TOKEN_TTL_HOURS").is_err() {
            assert_eq!(SessionConfig::token_ttl_hours(), 168);
        }
    }

    #[test]
    fn test_sms_config_defaults() {
        if env::var("SMS_CODE_TTL_SECONDS").is_err() {
            assert_eq!(SmsConfig::code_ttl_seconds(), 300);
        }
        if env::var("SMS_RESEND_INTERVAL_SECONDS").is_err() {
            assert_eq!(SmsConfig::resend_interval_seconds(), 60);
        }
    }

    #[test]
    fn test_avatar_config_defaults() {
        if env::var("AVATAR_MAX_BYTES").is_err() {
            assert_eq!(AvatarConfig::max_bytes(), 2 * 1024 * 1024);
        }
        if env::var("AVATAR_DIR").is_err() {
            assert_eq!(AvatarConfig::dir(), "./public/uploads/avatar");
        }
    }

    #[test]
    fn test_gateway_url_absent_means_mock_mode() {
        if env::var("SMS_GATEWAY_URL").is_err() {
            assert!(SmsConfig::gateway_url().is_none());
        }
    }
}
