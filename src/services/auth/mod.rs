//! 인증 및 보안 서비스 모듈
//!
//! 불투명 세션 토큰 인증과 SMS 인증번호 플로우를 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 세션 토큰 발급, 검증, 갱신(회전), 폐기
//! - SMS 인증번호 생성/저장/검증 (Redis, 일회용)
//! - SMS 게이트웨이 발송 (미설정 시 로그 목 모드)
//!
//! # Security
//!
//! - UUID v4 토큰 (추측 불가)
//! - 사용자당 단일 세션 (발급 시 이전 토큰 무효화)
//! - 인증번호 일회성 소모 및 재발송 간격 제한
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{TokenService, CodeService};
//!
//! // 세션 토큰 발급
//! let token_service = TokenService::instance();
//! let issued = token_service.issue(&user).await?;
//!
//! // 인증번호 발송
//! let code_service = CodeService::instance();
//! code_service.send_code("13800000000").await?;
//! ```

pub mod token_service;
pub mod code_service;
pub mod sms_service;

pub use token_service::*;
pub use code_service::*;
pub use sms_service::*;
