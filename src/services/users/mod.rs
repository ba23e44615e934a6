//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당하는 서비스들을 제공합니다.
//! 회원가입, 로그인, 프로필 관리, 아바타 업로드 등의 핵심 기능을 구현합니다.
//!
//! # Features
//!
//! - 회원가입 (SMS 인증번호 검증 포함)
//! - 비밀번호/인증번호 이중 로그인
//! - 비밀번호 재설정 및 세션 폐기
//! - 프로필 조회 및 아바타 업로드
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 휴대폰 번호 중복 방지
//! - 타이밍 공격 방지
//! - 프로필 응답의 휴대폰 번호 마스킹
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::RegisterRequest;
//!
//! let user_service = UserService::instance();
//! let request = RegisterRequest { /* ... */ };
//! let response = user_service.register(request).await?;
//! ```

pub mod user_service;
pub mod avatar_service;

pub use user_service::*;
pub use avatar_service::*;
