//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! Spring Framework의 UserService와 AuthenticationManager 패턴을 참고하여 설계되었으며,
//! 회원가입, 로그인, 비밀번호 재설정, 프로필 조회, 로그아웃을 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │  Registration   │  │  Authentication │  │  Profile Query  │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Code Verify   │  │ • Password Ver  │  │ • By User ID    │  │
//! │  │ • Duplicate Chk │  │ • Code Login    │  │ • Entity → DTO  │  │
//! │  │ • Password Hash │  │ • Last Login    │  │ • Phone Masking │  │
//! │  │ • Entity Create │  │ • Token Issue   │  │ • Cache Support │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐                       │
//! │  │ Password Reset  │  │     Logout      │                       │
//! │  │                 │  │                 │                       │
//! │  │ • Code Verify   │  │ • Token Revoke  │                       │
//! │  │ • Re-hash       │  │                 │                       │
//! │  │ • Session Kill  │  │                 │                       │
//! │  └─────────────────┘  └─────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                │                    │
//!                ▼                    ▼
//!         UserRepository       CodeService / TokenService
//! ```
//!
//! ## 보안 설계 원칙
//!
//! ### 1. 비밀번호 보안
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지
//! - **환경별 Cost**: 개발(4-8) vs 운영(12-15) 환경별 보안 강도
//! - **솔트 자동 생성**: 레인보우 테이블 공격 방지
//!
//! ### 2. 인증 보안
//!
//! - **이중 로그인 방식**: 비밀번호 또는 SMS 인증번호
//! - **토큰 회전**: 로그인마다 새 토큰 발급, 이전 세션 무효화
//! - **재설정 시 세션 폐기**: 비밀번호 변경 즉시 기존 토큰 무효화
//!
//! ### 3. 데이터 보안
//!
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시와 토큰 원문 제외
//! - **휴대폰 번호 마스킹**: 프로필 응답에서 중간 자리 마스킹
//! - **중복 방지**: 휴대폰 번호 유니크 제약

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::{doc, DateTime};
use singleton_macro::service;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::{
            request::{LoginRequest, RegisterRequest, ResetPasswordRequest},
            response::{ProfileResponse, RegisterResponse, TokenResponse},
        },
    },
    repositories::users::user_repo::UserRepository,
    services::auth::{code_service::CodeService, token_service::TokenService},
    core::{
        errors::AppError,
    },
};
use crate::config::PasswordConfig;
use crate::utils::string_utils::mask_phone;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 담당합니다.
/// Spring Framework의 `@Service` 어노테이션이 적용된 UserService와 유사한 역할을
/// 수행하며, 인증번호 검증과 토큰 발급은 각각 `CodeService`, `TokenService`에
/// 위임하고 이 서비스는 플로우를 조율합니다.
///
/// ## 싱글톤 패턴 및 의존성 주입
///
/// `#[service]` 매크로를 통해 자동으로 싱글톤으로 관리되며,
/// UserRepository가 자동으로 주입됩니다:
///
/// ```rust,ignore
/// let user_service = UserService::instance(); // 항상 동일한 인스턴스
/// ```
///
/// ## 에러 처리 전략
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환하며,
/// 닫힌 비즈니스 에러 분류 체계를 따릅니다:
///
/// - **CodeError** (1002): 인증번호 불일치/만료
/// - **AlreadyRegistered** (1003): 휴대폰 번호 중복 가입
/// - **UnRegistered** (1004): 미가입 번호로 로그인/재설정 시도
/// - **PasswordError** (1005): 비밀번호 불일치
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    ///
    /// 자동 의존성 주입을 통해 UserRepository 싱글톤이 주입됩니다.
    /// 모든 데이터베이스 작업은 이 리포지토리를 통해 수행되며,
    /// MongoDB 영구 저장과 Redis 캐싱을 지원합니다.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 계정 생성 (회원가입)
    ///
    /// SMS 인증번호를 검증한 뒤 계정을 생성합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. **인증번호 검증**: 일치 시 즉시 소모 (일회용)
    /// 2. **중복 확인**: 이미 가입된 번호면 `AlreadyRegistered`
    /// 3. **비밀번호 해싱**: 환경별 cost로 bcrypt 해싱
    /// 4. **엔티티 생성**: 번호 뒷자리 기반 기본 닉네임 부여
    /// 5. **영구 저장**: Repository를 통한 데이터베이스 저장
    ///
    /// # 인증번호 소모 순서
    ///
    /// 인증번호는 중복 확인보다 먼저 검증됩니다. 이미 가입된 번호로
    /// 재가입을 시도해도 인증번호는 소모되므로, 같은 번호로 연속 시도하려면
    /// 새 인증번호를 발급받아야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::CodeError` - 인증번호 불일치/만료
    /// * `AppError::AlreadyRegistered` - 휴대폰 번호 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    ///
    /// # 사용 예제
    ///
    /// ```rust,ignore
    /// let response = UserService::instance().register(request).await?;
    /// println!("가입 완료: {} ({})", response.nickname, response.id);
    /// ```
    ///
    /// # 로깅 및 모니터링
    ///
    /// ```text
    /// [INFO] Password hashing took: 156ms
    /// [INFO] ✅ 회원가입 완료: 138******00
    /// ```
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 인증번호 검증 (성공 시 소모)
        CodeService::instance()
            .verify_and_consume(&request.phone, &request.code)
            .await?;

        // 중복 확인 (유니크 인덱스가 최종 방어선)
        if self.user_repo.find_by_phone(&request.phone).await?.is_some() {
            return Err(AppError::AlreadyRegistered);
        }

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        // 비밀번호 해싱
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        let hash_duration = hash_start.elapsed();

        log::info!("Password hashing took: {:?}", hash_duration);

        // 사용자 엔티티 생성
        let user = User::new(request.phone, password_hash);

        // 저장
        let created_user = self.user_repo.create(user).await?;

        let total_duration = start_time.elapsed();
        log::info!("✅ 회원가입 완료: {} ({:?})", mask_phone(&created_user.phone), total_duration);

        Ok(RegisterResponse::from(created_user))
    }

    /// 로그인 (비밀번호 또는 인증번호)
    ///
    /// 두 가지 자격증명 방식을 지원합니다:
    ///
    /// - **비밀번호**: bcrypt 해시와 대조
    /// - **인증번호**: SMS로 발급된 일회용 번호와 대조
    ///
    /// 둘 다 제공되면 비밀번호가 우선합니다. 인증번호 로그인이라도
    /// 미가입 번호는 계정을 자동 생성하지 않고 `UnRegistered`를 반환합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. **사용자 조회**: 휴대폰 번호로 조회, 없으면 `UnRegistered`
    /// 2. **자격증명 검증**: 비밀번호 or 인증번호
    /// 3. **로그인 시각 기록**: `last_login_at` 갱신
    /// 4. **토큰 발급**: 새 세션 토큰 발급 (기존 세션 무효화)
    ///
    /// # 보안 특징
    ///
    /// bcrypt의 특성상 검증 시간이 일정하여 타이밍 공격을 방지합니다.
    /// 미가입 번호와 비밀번호 불일치는 서로 다른 에러 코드를 반환하는데,
    /// 이는 가입 여부를 클라이언트 플로우 분기(가입 유도)에 쓰기 위한
    /// 의도된 API 계약입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UnRegistered` - 미가입 휴대폰 번호
    /// * `AppError::PasswordError` - 비밀번호 불일치
    /// * `AppError::CodeError` - 인증번호 불일치/만료
    /// * `AppError::InvalidParam` - 자격증명 누락
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        let user = self.user_repo
            .find_by_phone(&request.phone)
            .await?
            .ok_or(AppError::UnRegistered)?;

        if request.uses_password() {
            let password = request.password.as_deref().unwrap_or_default();

            let verify_start = std::time::Instant::now();
            let is_valid = bcrypt::verify(password, &user.password_hash)
                .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
            log::debug!("Password verification took: {:?}", verify_start.elapsed());

            if !is_valid {
                log::warn!("❌ 로그인 실패 (비밀번호 불일치): {}", mask_phone(&user.phone));
                return Err(AppError::PasswordError);
            }
        } else if let Some(ref code) = request.code {
            CodeService::instance()
                .verify_and_consume(&request.phone, code)
                .await?;
        } else {
            // 요청 DTO의 schema 검증을 통과했다면 도달하지 않음
            return Err(AppError::InvalidParam(
                "password 또는 code 중 하나는 필수입니다".to_string(),
            ));
        }

        // 로그인 시각 기록
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        self.user_repo
            .update(&user_id, doc! { "last_login_at": DateTime::now() })
            .await?;

        let issued = TokenService::instance().issue(&user).await?;

        log::info!("✅ 로그인 성공: {}", mask_phone(&user.phone));
        Ok(issued)
    }

    /// 비밀번호 재설정
    ///
    /// SMS 인증번호로 본인 확인 후 비밀번호를 교체합니다.
    /// 재설정 성공 시 기존 세션 토큰을 폐기하여 탈취된 세션이 있어도
    /// 새 비밀번호로 다시 로그인해야만 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UnRegistered` - 미가입 휴대폰 번호
    /// * `AppError::CodeError` - 인증번호 불일치/만료
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), AppError> {
        let user = self.user_repo
            .find_by_phone(&request.phone)
            .await?
            .ok_or(AppError::UnRegistered)?;

        CodeService::instance()
            .verify_and_consume(&request.phone, &request.code)
            .await?;

        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        self.user_repo
            .update(&user_id, doc! {
                "password_hash": password_hash,
                "updated_at": DateTime::now(),
            })
            .await?;

        // 기존 세션 폐기
        TokenService::instance().revoke(&user_id).await?;

        log::info!("✅ 비밀번호 재설정 완료: {}", mask_phone(&user.phone));
        Ok(())
    }

    /// 프로필 조회
    ///
    /// 인증된 사용자의 프로필을 반환합니다. Repository 레이어의
    /// Redis 캐싱을 활용하며(TTL 10분), 휴대폰 번호는 마스킹됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UnRegistered` - 토큰은 유효하나 사용자가 삭제된 경우
    pub async fn get_profile(&self, user_id: &str) -> Result<ProfileResponse, AppError> {
        let user = self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UnRegistered)?;

        Ok(ProfileResponse::from(user))
    }

    /// 로그아웃
    ///
    /// 현재 세션 토큰을 폐기합니다. 이미 폐기된 토큰으로의 중복 호출은
    /// 멱등하게 성공 처리됩니다.
    pub async fn logout(&self, user_id: &str) -> Result<(), AppError> {
        TokenService::instance().revoke(user_id).await?;

        log::info!("✅ 로그아웃 완료: {}", user_id);
        Ok(())
    }
}
