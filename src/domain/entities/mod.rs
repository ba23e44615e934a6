//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## MongoDB 통합
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **인덱스 설정**: 성능 최적화를 위한 인덱스 지원 (휴대폰 번호 유니크 인덱스)
//!
//! ## 싱글톤 매크로 연동
//!
//! 이 엔티티들은 프로젝트의 `#[repository]` 매크로와 함께 사용됩니다:
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! #[repository(name = "user", collection = "users")]
//! struct UserRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! impl UserRepository {
//!     async fn find_by_phone(&self, phone: &str) -> Option<User> {
//!         self.collection::<User>()
//!             .find_one(doc! { "phone": phone })
//!             .await
//!             .ok()
//!             .flatten()
//!     }
//! }
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id` | `#[serde(rename = "_id")]` |
//! | `@CreatedDate` | `created_at: DateTime` |
//! | Bean Validation | Rust 타입 시스템 + 커스텀 검증 |
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs          ← 이 파일
//! └── users/          ← 사용자 관련 엔티티
//!     ├── mod.rs
//!     └── user.rs     ← User 엔티티 (계정 + 세션 토큰)
//! ```
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **인덱스 설계**: 쿼리 패턴에 맞는 인덱스 설계 필수 (phone 유니크)
//! - **민감 정보**: password_hash, session_token은 DTO 변환 시 제외

pub mod users;
