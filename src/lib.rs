//! 휴대폰 계정 서비스 백엔드
//!
//! Rust 기반의 휴대폰 번호 중심 계정 관리 서비스입니다.
//! SMS 인증번호 기반 회원가입/로그인, 불투명 세션 토큰 인증,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **SMS 인증**: 6자리 인증번호 발송과 일회성 검증
//! - **계정 관리**: 회원가입, 비밀번호/인증번호 로그인, 비밀번호 재설정
//! - **세션 토큰**: UUID 기반 불투명 토큰, 갱신 시 회전(rotation)
//! - **아바타 업로드**: raw body 스트리밍 수신 후 정적 파일로 공개
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 사용자 데이터 영구 저장
//! - **Redis**: 조회 캐싱, 인증번호 저장, 재발송 제한
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::services::users::UserService;
//! use account_service_backend::services::auth::TokenService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let token_service = TokenService::instance();
//!
//! // 로그인 및 토큰 발급
//! let token = user_service.login(request).await?;
//! let user = token_service.authenticate(&token.token).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
