//! # HTTP Handlers 모듈
//!
//! HTTP 요청을 받아 서비스 계층으로 위임하는 핸들러 함수들을 정의합니다.
//! Spring Boot의 `@RestController` 클래스들에 해당하는 계층입니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring Boot | 이 모듈 | 설명 |
//! |-------------|---------|------|
//! | `@RestController` | 핸들러 모듈 (`auth`, `users`) | 엔드포인트 그룹 |
//! | `@PostMapping("/login")` | `#[post("/login")]` | 라우트 매핑 |
//! | `@RequestBody` + `@Valid` | `web::Json<T>` + `validate()` | 본문 역직렬화/검증 |
//! | `@AuthenticationPrincipal` | [`AuthenticatedUser`] 추출기 | 인증 주체 주입 |
//! | `ResponseEntity<T>` | `Result<HttpResponse, AppError>` | 응답/에러 |
//!
//! ## 모듈 구성
//!
//! - [`auth`]: 공개 엔드포인트 (인증번호, 회원가입, 로그인, 비밀번호 재설정, 토큰 갱신)
//! - [`users`]: 인증 필요 엔드포인트 (프로필, 아바타, 로그아웃)
//!
//! ## 핸들러 계층의 책임
//!
//! 1. **역직렬화와 검증**: `web::Json`/`web::Query` + `validator`
//! 2. **서비스 위임**: `XxxService::instance()`로 싱글톤을 얻어 호출
//! 3. **응답 봉투**: 성공은 `ApiResponse::ok(data)`, 실패는 `AppError`의
//!    `ResponseError` 구현이 비즈니스 코드 응답으로 변환
//!
//! 비즈니스 로직은 이 계층에 두지 않습니다. 핸들러에서 분기가 필요해
//! 보이면 서비스 메서드로 내리는 것이 규칙입니다.
//!
//! ## 에러 처리 패턴
//!
//! ```rust,ignore
//! payload.validate()
//!     .map_err(|e| AppError::InvalidParam(e.to_string()))?;
//! let response = UserService::instance().register(payload.into_inner()).await?;
//! Ok(HttpResponse::Created().json(ApiResponse::ok(response)))
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::AuthenticatedUser

pub mod users;
pub mod auth;
