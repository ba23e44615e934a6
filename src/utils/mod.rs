//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리(휴대폰 마스킹, 확장자 추출), 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 마스킹, 변환 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::mask_phone;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! log::info!("code issued for {}", mask_phone(&phone));
//!
//! print_boxed_title("System Initialized");
//! ```

pub mod string_utils;
pub mod display_terminal;
