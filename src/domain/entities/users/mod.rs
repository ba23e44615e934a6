//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 휴대폰 번호 기반 계정과 불투명 세션 토큰을 담는 User 엔티티를 포함합니다.
//!
//! # 주요 구성 요소
//!
//! ### User Entity
//! - **계정 식별**: 휴대폰 번호 (유니크 인덱스)
//! - **인증 정보**: bcrypt 비밀번호 해시
//! - **세션**: 불투명 세션 토큰과 만료 시각
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new("13800000000".to_string(), password_hash);
//! assert_eq!(user.nickname, "user_0000");
//! ```

pub mod user;
