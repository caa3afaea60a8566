//! 인증 오케스트레이션 서비스
//!
//! OAuth 로그인부터 토큰 갱신, 로그아웃, 요청 인증까지 인증의 전체
//! 수명주기를 조율합니다. 제공자 클라이언트, 토큰 서비스, 계정 결정
//! 서비스, 저장소를 묶는 유일한 지점이며 HTTP 계층은 이 서비스의
//! 메서드만 호출합니다.
//!
//! ## 순서 보장
//!
//! 로그인 과정에서 저장소 쓰기(계정 생성, 세션 등록)는 제공자 인증이
//! 성공한 뒤에만 일어납니다. 제공자 호출이 실패하면 저장소는 호출 전
//! 상태 그대로 남습니다.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;

use super::token_service::{TokenService, REFRESH_EXPIRATION_DAYS};
use crate::config::OAuthProvider;
use crate::domain::token::token::{TokenKind, TokenPair};
use crate::domain::users::user::User;
use crate::errors::errors::{AuthError, AuthResult};
use crate::services::oauth::client::OAuthClient;
use crate::services::oauth::state::StateManager;
use crate::services::users::identity_service::IdentityService;
use crate::store::AuthStore;

/// 인증 오케스트레이터
///
/// 모든 협력자는 생성자 주입으로 받습니다. 저장소와 제공자 클라이언트가
/// 트레이트 객체이므로 테스트에서는 메모리 저장소와 가짜 클라이언트로
/// 전체 플로우를 네트워크 없이 검증할 수 있습니다.
pub struct AuthService {
    store: Arc<dyn AuthStore>,
    tokens: TokenService,
    identity: Arc<IdentityService>,
    state: StateManager,
    clients: HashMap<OAuthProvider, Arc<dyn OAuthClient>>,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn AuthStore>,
        tokens: TokenService,
        identity: Arc<IdentityService>,
        state: StateManager,
        clients: Vec<Arc<dyn OAuthClient>>,
    ) -> Self {
        let clients = clients
            .into_iter()
            .map(|client| (client.provider(), client))
            .collect();

        Self {
            store,
            tokens,
            identity,
            state,
            clients,
        }
    }

    fn client(&self, provider: OAuthProvider) -> AuthResult<&dyn OAuthClient> {
        self.clients
            .get(&provider)
            .map(|client| client.as_ref())
            .ok_or_else(|| {
                AuthError::InternalError(format!(
                    "등록되지 않은 OAuth 제공자: {}",
                    provider.as_str()
                ))
            })
    }

    /// 로그인 시작용 제공자 인가 URL 생성
    ///
    /// state는 항상 새로 발급하여 전달하며, state를 쓰지 않는 제공자의
    /// 클라이언트는 이를 무시합니다.
    pub fn login_url(&self, provider: OAuthProvider) -> AuthResult<String> {
        let client = self.client(provider)?;
        let state = self.state.issue();
        Ok(client.authorize_url(Some(&state)))
    }

    /// OAuth 콜백 처리: 인가 코드를 사용자와 토큰 쌍으로 교환
    ///
    /// # Arguments
    ///
    /// * `provider` - 콜백을 보낸 제공자
    /// * `code` - 인가 코드
    /// * `state` - 콜백으로 돌아온 state (검증 여부는 제공자별 정책)
    /// * `user_payload` - Apple 최초 인증의 `user` 폼 필드
    pub async fn login(
        &self,
        provider: OAuthProvider,
        code: &str,
        state: Option<&str>,
        user_payload: Option<&str>,
    ) -> AuthResult<(User, TokenPair)> {
        // 1. 제공자 인증 (토큰 교환 + 사용자 정보 조회)
        let client = self.client(provider)?;
        let info = client.authenticate(code, state, user_payload).await?;

        // 2. 내부 계정 결정 (여기서부터 저장소 쓰기)
        let user = self.identity.resolve_or_create(provider, info).await?;

        // 3. 토큰 쌍 발급 및 세션 등록
        let pair = self.tokens.issue_pair(&user.email)?;
        self.store.add_session(&pair.access_token, &user.email).await?;

        Ok((user, pair))
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    ///
    /// 사용한 리프레시 토큰은 회수하지 않으므로 만료 전까지 재사용할 수
    /// 있습니다. 회수가 필요한 경우는 로그아웃으로 처리합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenExpired` / `AuthError::TokenInvalid` - 토큰 자체의 문제
    /// * `AuthError::UserNotFound` - 토큰은 유효하나 계정이 삭제됨
    pub async fn refresh(&self, refresh_token: &str) -> AuthResult<(User, TokenPair)> {
        let claims = self.tokens.decode_token(refresh_token, TokenKind::Refresh)?;

        let user = self
            .store
            .get_user_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(claims.sub.clone()))?;

        let pair = self.tokens.issue_pair(&user.email)?;
        self.store.add_session(&pair.access_token, &user.email).await?;

        Ok((user, pair))
    }

    /// 로그아웃: 세션 제거 및 액세스 토큰 블랙리스트 등록
    ///
    /// 토큰을 해석하지 않습니다. 만료되었거나 위조된 토큰으로도
    /// 로그아웃 요청은 항상 성공하며, 블랙리스트 등록은 해가 없습니다.
    pub async fn logout(&self, access_token: &str) -> AuthResult<()> {
        self.store.remove_session(access_token).await?;
        self.store.add_to_blacklist(access_token).await?;
        Ok(())
    }

    /// 액세스 토큰으로 요청 주체 인증
    ///
    /// 검증 순서: 서명/만료/용도 → 블랙리스트 → 계정 존재.
    /// 서명이 유효해도 로그아웃된 토큰이면 `TokenRevoked`입니다.
    pub async fn authenticate_request(&self, access_token: &str) -> AuthResult<User> {
        let claims = self.tokens.decode_token(access_token, TokenKind::Access)?;

        if self.store.is_blacklisted(access_token).await? {
            return Err(AuthError::TokenRevoked);
        }

        self.store
            .get_user_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(claims.sub.clone()))
    }

    /// Authorization 헤더에서 Bearer 토큰 추출
    pub fn bearer_token<'a>(&self, auth_header: &'a str) -> AuthResult<&'a str> {
        self.tokens.extract_bearer_token(auth_header)
    }

    /// 보존 기간이 지난 블랙리스트 항목 정리
    ///
    /// 리프레시 토큰 만료 기간(7일)보다 오래된 항목은 어차피 서명
    /// 검증에서 거부되므로 블랙리스트에 남겨 둘 이유가 없습니다.
    pub async fn prune_blacklist(&self) -> AuthResult<usize> {
        self.store
            .prune_blacklist(Duration::days(REFRESH_EXPIRATION_DAYS))
            .await
    }

    /// 활성 세션 수 (상태 점검용)
    pub async fn session_count(&self) -> AuthResult<usize> {
        self.store.session_count().await
    }
}
