//! 에러 모듈
//!
//! 과거 `crate::errors::AppError` 경로로 import하던 코드와의 호환을 위한
//! 재노출 모듈입니다. 실제 정의는 [`crate::core::errors`]에 있습니다.

pub mod errors;

pub use errors::*;
