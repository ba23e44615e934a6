//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 분산 캐시 지원과 JSON 기반 객체 직렬화를 제공합니다.
//! 사용자 엔티티 캐싱과 더불어 SMS 인증 코드의 수명 관리를 담당합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 멀티플렉싱 연결
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원 (인증 코드 만료, 재전송 가드)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("sms:code:13800000000", &code, 300).await?;
//!
//! let cached_user: Option<User> = cache.get("user:phone:13800000000").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
