//! 저장소 추상화 모듈
//!
//! 인증 서비스가 사용하는 영속화 계층을 트레이트로 분리합니다.
//! - **AuthStore**: 사용자/세션/블랙리스트 저장소 인터페이스
//! - **MemoryStore**: 프로세스 메모리 기반 기본 구현체
//!
//! 서비스 계층은 `Arc<dyn AuthStore>`로 주입받으므로
//! 구현체를 교체해도 서비스 코드는 변경되지 않습니다.

pub mod memory;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::users::user::{User, UserUpdate};
use crate::errors::errors::AuthResult;

/// 사용자/세션/블랙리스트 저장소 인터페이스
///
/// 모든 메서드는 저장소 구현에 따라 실패할 수 있으므로 `AuthResult`를 반환합니다.
/// 메모리 구현체는 항상 성공하지만, 외부 저장소 구현체는 I/O 에러를
/// `AuthError::InternalError`로 매핑해야 합니다.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// 이메일로 사용자 조회
    async fn get_user_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// 사용자 생성 (이미 존재하면 기존 레코드 반환)
    ///
    /// 동일 이메일에 대한 동시 호출에도 단일 레코드만 생성됩니다.
    /// 반환값은 저장소에 실제로 남아 있는 레코드입니다.
    async fn create_user(&self, user: User) -> AuthResult<User>;

    /// 사용자 프로필 부분 수정
    ///
    /// # Returns
    /// 수정된 사용자. 해당 이메일이 없으면 `None`.
    async fn update_user(&self, email: &str, update: &UserUpdate) -> AuthResult<Option<User>>;

    /// 전체 사용자 목록 조회
    async fn list_users(&self) -> AuthResult<Vec<User>>;

    /// 활성 세션 등록 (access token → 이메일)
    async fn add_session(&self, token: &str, email: &str) -> AuthResult<()>;

    /// 세션 제거
    ///
    /// # Returns
    /// 해당 토큰의 세션이 존재했으면 `true`
    async fn remove_session(&self, token: &str) -> AuthResult<bool>;

    /// 활성 세션 수
    async fn session_count(&self) -> AuthResult<usize>;

    /// 토큰 블랙리스트 등록 여부 확인
    async fn is_blacklisted(&self, token: &str) -> AuthResult<bool>;

    /// 토큰을 블랙리스트에 추가 (등록 시각 기록)
    async fn add_to_blacklist(&self, token: &str) -> AuthResult<()>;

    /// 등록된 지 `max_age`를 넘긴 블랙리스트 항목 제거
    ///
    /// # Returns
    /// 제거된 항목 수
    async fn prune_blacklist(&self, max_age: Duration) -> AuthResult<usize>;
}
