//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 로직과 도메인 규칙을 담당합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행하며,
//! Domain-Driven Design (DDD) 원칙에 따라 설계되었습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (JPA Entity와 유사)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 인증 컨텍스트 & 응답 봉투 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `@AuthenticationPrincipal` | `models::auth` | 인증 컨텍스트 전달 |
//! | `@Valid` | `validator` 검증 | 데이터 유효성 검사 |
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 저장되는 영속 객체입니다. 현재는 휴대폰 번호를 식별자로 하는
//! `User` 엔티티 하나로 구성되며, 세션 토큰과 만료 시각을 함께 보관합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! 요청 DTO는 validator로 형식을 검증하고(휴대폰 번호, 인증번호, 비밀번호),
//! 응답 DTO는 민감 정보(비밀번호 해시, 세션 토큰 원문)를 제외합니다.
//!
//! ### [`models`] - 인증 및 응답 모델
//!
//! - `AuthenticatedUser`: 미들웨어가 검증한 사용자 정보 extractor
//! - `ApiResponse`: `{"code": 0, "data": ...}` 성공 응답 봉투
//!
//! ## 실제 사용 예제
//!
//! ### 회원가입 플로우
//!
//! ```rust,ignore
//! use crate::domain::{entities::users::User, dto::users::RegisterRequest};
//! use crate::core::errors::AppError;
//!
//! // 1. DTO로 입력 받기 + 유효성 검증
//! request.validate().map_err(|e| AppError::InvalidParam(e.to_string()))?;
//!
//! // 2. 인증번호 검증 후 도메인 엔티티 생성
//! let user = User::new(request.phone, password_hash);
//!
//! // 3. 리포지토리를 통한 영속화
//! let saved_user = user_repository.create(user).await?;
//!
//! // 4. 응답 DTO로 변환
//! let response = RegisterResponse::from(saved_user);
//! ```
//!
//! ## 베스트 프랙티스
//!
//! 1. **작은 인터페이스**: 각 DTO는 특정 용도에만 최적화
//! 2. **불변성 우선**: 가능한 한 불변 객체로 설계
//! 3. **명시적 변환**: From/Into trait을 통한 타입 변환
//! 4. **민감 정보 격리**: 응답 DTO에서 해시/토큰 제외, 휴대폰 번호 마스킹

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
