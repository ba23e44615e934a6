//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **스마트 캐싱**: 조회 성능 최적화를 위한 캐시 우선 조회
//! - **데이터 무결성**: 휴대폰 번호 유니크 인덱스 관리

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산을 담당하며, MongoDB 컬렉션과 Redis 캐시를
/// 통합하여 최적화된 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**:
///   - ID 조회: `user:id:{id}`
///   - 휴대폰 번호 조회: `user:phone:{phone}`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: phone(unique), session_token, created_at(desc)
///
/// ## 캐시 일관성
///
/// 세션 토큰 조회는 캐싱하지 않습니다. 토큰은 로그인/갱신/로그아웃마다
/// 회전하므로 캐시된 토큰이 실제 DB 상태와 어긋나면 인증 우회 또는
/// 조기 만료로 이어질 수 있습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::users::user_repo::UserRepository;
///
/// async fn user_operations() -> Result<(), AppError> {
///     let repo = UserRepository::instance();
///
///     let created = repo.create(User::new(phone, password_hash)).await?;
///     let user_id = created.id.unwrap().to_hex();
///
///     // 휴대폰 번호로 조회 (캐시 활용)
///     let found = repo.find_by_phone("13800000000").await?;
///
///     // 세션 토큰으로 조회 (캐싱 없음)
///     let by_token = repo.find_by_session_token(&token).await?;
///
///     Ok(())
/// }
/// ```
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    ///
    /// 자동 주입되는 데이터베이스 컴포넌트입니다.
    /// `users` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    ///
    /// 자동 주입되는 Redis 클라이언트입니다.
    /// 조회 성능 향상을 위한 캐싱 레이어를 제공합니다.
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 휴대폰 번호로 사용자 조회
    ///
    /// 휴대폰 번호는 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    /// 캐시 우선 조회를 통해 성능을 최적화합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:phone:{phone}`
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
        // 캐시에서 먼저 확인
        let cache_key = format!("user:phone:{}", phone);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let user = self.collection::<User>()
            .find_one(doc! { "phone": phone })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, 600)
                .await;
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// MongoDB ObjectId를 사용하여 사용자를 조회합니다.
    /// 프로필 조회 등 가장 빈번한 조회 패턴이므로 적극적인 캐싱을 적용합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:id:{id}`
    /// - **TTL**: 600초 (10분)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::InvalidParam("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = format!("user:id:{}", id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let user = self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, 600)
                .await;
        }

        Ok(user)
    }

    /// 세션 토큰으로 사용자 조회
    ///
    /// 토큰은 회전(로그인/갱신/로그아웃)할 때마다 바뀌므로 캐싱하지 않고
    /// 항상 DB에서 직접 조회합니다. `session_token` 인덱스를 활용합니다.
    pub async fn find_by_session_token(&self, token: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "session_token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 휴대폰 번호 중복 여부를 사전에 검증하고 DB에 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::AlreadyRegistered)` - 휴대폰 번호 중복
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.find_by_phone(&user.phone).await?.is_some() {
            return Err(AppError::AlreadyRegistered);
        }

        // DB에 저장
        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                // 유니크 인덱스 위반은 동시 가입 경합에서도 발생할 수 있음
                if e.to_string().contains("E11000") {
                    AppError::AlreadyRegistered
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// 기존 사용자의 정보를 부분적으로 업데이트합니다.
    /// `$set` 연산자와 `find_one_and_update`로 조회와 업데이트를 원자적으로
    /// 수행하고, 성공 시 해당 사용자의 ID/휴대폰 번호 캐시를 모두 무효화합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use mongodb::bson::doc;
    ///
    /// let update_doc = doc! {
    ///     "session_token": &token,
    ///     "token_expires_at": expires_at,
    /// };
    /// let updated = repo.update(&user_id, update_doc).await?;
    /// ```
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::InvalidParam("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self.collection::<User>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화 (ID 키 + 휴대폰 번호 키)
        if let Some(ref user) = updated_user {
            let _ = self.redis
                .del_multiple(&[
                    format!("user:id:{}", id),
                    format!("user:phone:{}", user.phone),
                ])
                .await;
        }

        Ok(updated_user)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 사용자 컬렉션에 필요한 모든 인덱스를 생성합니다.
    /// 서버 기동 시점에 한 번 실행하여 쿼리 성능을 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **휴대폰 번호 유니크 인덱스**: 중복 가입 방지 및 로그인 조회 최적화
    /// 2. **세션 토큰 인덱스**: 토큰 검증 조회 최적화 (sparse)
    /// 3. **생성일 인덱스**: 최근 가입자 조회 및 정렬 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        // 휴대폰 번호 유니크 인덱스
        let phone_index = IndexModel::builder()
            .keys(doc! { "phone": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("phone_unique".to_string())
                .build())
            .build();

        // 세션 토큰 인덱스 (토큰 미보유 사용자는 제외)
        let token_index = IndexModel::builder()
            .keys(doc! { "session_token": 1 })
            .options(IndexOptions::builder()
                .sparse(true)
                .name("session_token_sparse".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([phone_index, token_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
