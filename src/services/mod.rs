//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 사용자 관리와 인증/보안 기능을 담당합니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (가입, 로그인, 비밀번호 재설정, 로그아웃)
//! - 불투명 세션 토큰 기반 인증 시스템
//! - SMS 인증번호 발급 및 검증
//! - 아바타 업로드 및 저장
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::TokenService};
//!
//! let user_service = UserService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod users;
pub mod auth;
