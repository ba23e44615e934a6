//! 애플리케이션 전역 에러 재노출
//!
//! `AppError`는 [`crate::core::errors`]에 한 번만 정의됩니다.
//! 핸들러와 서비스 코드가 `crate::errors::errors::AppError` 경로로도
//! 접근할 수 있도록 여기서 다시 노출합니다.

pub use crate::core::errors::{AppError, AppResult, ErrorContext};
