//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 패스워드 해싱, 서버 바인딩 설정
//! - [`auth_config`] - 세션 토큰, SMS 인증 코드, 아바타 업로드 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//! Spring Profile과 유사한 방식으로 동작합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보(게이트웨이 키 등)는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//!
//! ### 3. 타입 안전성 (Type Safety)
//!
//! - 설정값 파싱 실패 시 기본값으로 폴백
//! - 숫자 범위 검증 (bcrypt cost 등)
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, SessionConfig, SmsConfig};
//!
//! let env = Environment::current();
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//!
//! let token_ttl = SessionConfig::token_ttl_hours();
//! let code_ttl = SmsConfig::code_ttl_seconds();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 세션 토큰 설정
//! export TOKEN_TTL_HOURS="168"
//!
//! # SMS 설정
//! export SMS_CODE_TTL_SECONDS="300"
//! export SMS_RESEND_INTERVAL_SECONDS="60"
//! export SMS_GATEWAY_URL="https://sms.example.com/send"
//! export SMS_GATEWAY_KEY="your-gateway-api-key"
//!
//! # 아바타 업로드 설정
//! export AVATAR_DIR="./public/uploads/avatar"
//! export AVATAR_MAX_BYTES="2097152"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
