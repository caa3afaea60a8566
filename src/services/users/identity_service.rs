//! 사용자 계정 결정 서비스
//!
//! 제공자 인증을 통과한 사용자 정보를 내부 사용자 레코드로 결정합니다.
//! 이메일을 계정의 기본 식별자로 사용하며, 같은 이메일로 어느 제공자를
//! 통해 로그인하든 같은 계정으로 이어집니다.
//!
//! ## 이메일이 없는 사용자
//!
//! 카카오처럼 이메일 동의를 거부할 수 있는 제공자를 위해
//! `{provider}_{외부ID}@{provider}.local` 형태의 합성 이메일을 만들어
//! 식별자로 사용합니다. `.local`은 실제 메일 라우팅이 불가능한 예약
//! 도메인이므로 실 주소와 충돌하지 않습니다.

use std::sync::Arc;

use crate::config::OAuthProvider;
use crate::domain::oauth::provider_user::ProviderUserInfo;
use crate::domain::users::user::{User, UserUpdate};
use crate::errors::errors::{AuthError, AuthResult};
use crate::store::AuthStore;

/// 사용자 계정 결정/조회 서비스
pub struct IdentityService {
    store: Arc<dyn AuthStore>,
}

impl IdentityService {
    pub fn new(store: Arc<dyn AuthStore>) -> Self {
        Self { store }
    }

    /// 제공자 사용자 정보를 내부 계정으로 결정
    ///
    /// 이메일(없으면 합성 이메일)로 기존 계정을 찾고, 없으면 새로
    /// 만듭니다. 같은 입력으로 몇 번을 호출해도 같은 계정이 반환됩니다.
    ///
    /// 기존 계정의 프로필은 덮어쓰지 않습니다. Apple이 최초 인증에만
    /// 전달하는 이름도 계정 생성 시점에만 반영됩니다.
    pub async fn resolve_or_create(
        &self,
        provider: OAuthProvider,
        info: ProviderUserInfo,
    ) -> AuthResult<User> {
        let email = resolve_email(provider, &info);

        if let Some(existing) = self.store.get_user_by_email(&email).await? {
            log::info!("{} 사용자 로그인: {}", provider.as_str(), email);
            return Ok(existing);
        }

        log::info!("새 {} 사용자 등록: {}", provider.as_str(), email);

        let name = resolve_name(&email, info.display_name);
        let user = User::new_oauth(
            provider,
            info.external_id,
            email,
            name,
            info.avatar_url,
            info.email_verified,
        );

        self.store.create_user(user).await
    }

    /// 이메일로 사용자 조회
    ///
    /// # Errors
    /// * `AuthError::UserNotFound` - 해당 이메일의 계정 없음
    pub async fn get_user(&self, email: &str) -> AuthResult<User> {
        self.store
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(email.to_string()))
    }

    /// 전체 사용자 목록 조회
    pub async fn list_users(&self) -> AuthResult<Vec<User>> {
        self.store.list_users().await
    }

    /// 사용자 프로필 부분 수정
    ///
    /// # Errors
    /// * `AuthError::UserNotFound` - 해당 이메일의 계정 없음
    pub async fn update_profile(&self, email: &str, update: &UserUpdate) -> AuthResult<User> {
        self.store
            .update_user(email, update)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(email.to_string()))
    }
}

/// 계정 식별에 사용할 이메일 결정
///
/// 제공자가 이메일을 주지 않은 경우 합성 이메일을 만듭니다.
fn resolve_email(provider: OAuthProvider, info: &ProviderUserInfo) -> String {
    match &info.email {
        Some(email) => email.clone(),
        None => format!(
            "{}_{}@{}.local",
            provider.as_str(),
            info.external_id,
            provider.as_str()
        ),
    }
}

/// 표시 이름 결정. 제공자가 이름을 주지 않으면 이메일의 로컬 파트를 씁니다.
fn resolve_name(email: &str, display_name: Option<String>) -> String {
    display_name.unwrap_or_else(|| email.split('@').next().unwrap_or(email).to_string())
}
