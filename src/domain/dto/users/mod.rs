//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! Spring Framework의 User 관련 DTO와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 사용자 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody RegisterDto` | `RegisterRequest` | 회원가입 요청 |
//! | `@RequestBody LoginDto` | `LoginRequest` | 로그인 요청 |
//! | `@RequestParam("token")` | `RefreshQuery` | 토큰 갱신 쿼리 |
//! | `@ResponseBody UserDto` | `ProfileResponse` | 프로필 응답 |
//! | `JwtAuthenticationToken` | `TokenResponse` | 세션 토큰 응답 |
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                      # 클라이언트 → 서버 요청 DTO
//! │   ├── send_code_request.rs     # 인증번호 발송 요청
//! │   ├── register_request.rs      # 회원가입 요청
//! │   ├── login_request.rs         # 로그인 요청 (비밀번호 또는 인증번호)
//! │   ├── reset_password_request.rs # 비밀번호 재설정 요청
//! │   └── refresh_query.rs         # 토큰 갱신 쿼리 파라미터
//! └── response/                     # 서버 → 클라이언트 응답 DTO
//!     ├── user_response.rs         # 프로필/회원가입 응답
//!     └── token_response.rs        # 토큰/아바타 응답
//! ```
//!
//! ## 요청 DTO 검증 규칙
//!
//! - **휴대폰 번호**: 11자리 (`1`로 시작, 두 번째 자리 3-9)
//! - **인증번호**: 숫자 6자리
//! - **비밀번호**: 6-64자
//! - **비밀번호 확인**: 원본 비밀번호와 일치 검증
//!
//! ## 보안 고려사항
//!
//! - **민감 정보 제외**: Response DTO에서 비밀번호 해시, 세션 토큰 제외
//! - **마스킹**: 프로필 응답의 휴대폰 번호는 항상 마스킹
//! - **입력 검증**: 모든 Request DTO에 validator 유효성 검증 적용

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
