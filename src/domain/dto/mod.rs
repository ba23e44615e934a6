//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | `ResponseEntity<T>` | `Result<T, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선 (API Contract First)
//! - **명시적 인터페이스**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **버전 호환성**: API 변경 시 하위 호환성 유지
//!
//! ### 2. 유효성 검증 내장 (Built-in Validation)
//! - **타입 안전성**: 컴파일 타임 타입 검증
//! - **런타임 검증**: validator crate를 통한 비즈니스 규칙 검증
//! - **에러 메시지**: 사용자 친화적인 검증 실패 메시지
//!
//! ### 3. 도메인 분리 (Domain Separation)
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **보안**: 민감한 정보(비밀번호 해시, 세션 토큰)의 노출 방지
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/              # 사용자 관련 DTO
//!     ├── request/        # 요청 DTO (클라이언트 → 서버)
//!     │   ├── send_code_request.rs
//!     │   ├── register_request.rs
//!     │   ├── login_request.rs
//!     │   ├── reset_password_request.rs
//!     │   └── refresh_query.rs
//!     └── response/       # 응답 DTO (서버 → 클라이언트)
//!         ├── user_response.rs
//!         └── token_response.rs
//! ```
//!
//! ## 유효성 검증 (Validation)
//!
//! | Spring | Rust | 설명 |
//! |--------|------|------|
//! | `@NotNull` | 기본 동작 | Option<T>가 아닌 필드는 필수 |
//! | `@NotBlank` | `#[validate(length(min = 1))]` | 빈 문자열 방지 |
//! | `@Size(min, max)` | `#[validate(length(min, max))]` | 문자열 길이 검증 |
//! | `@Pattern` | `#[validate(custom)]` | 정규표현식 검증 |
//!
//! ## 명명 규칙
//!
//! - **Request DTO**: `{Action}Request` (예: `RegisterRequest`)
//! - **Response DTO**: `{Entity}Response` (예: `ProfileResponse`)
//! - **쿼리 파라미터**: `{Action}Query` (예: `RefreshQuery`)

pub mod users;

// 공통 re-exports
pub use users::*;
