//! # 네이버 아이디로 로그인 클라이언트
//!
//! 네이버 OAuth 2.0 Authorization Code Flow를 구현합니다.
//! 네 제공자 중 유일하게 state 검증이 필수입니다. 네이버 개발자 가이드가
//! state를 요구하며, 콜백의 state가 없거나 검증에 실패하면 코드 교환 없이
//! 인증을 거부합니다.
//!
//! ## 네이버 특유의 동작
//!
//! - 토큰 엔드포인트가 오류를 HTTP 200 본문의 `error` 필드로 보고할 수 있습니다.
//! - 사용자 정보는 `{resultcode, message, response}` 봉투로 감싸져 오며
//!   `resultcode != "00"`은 거부를 의미합니다.
//! - 이메일 동의는 필수 항목으로 요청하므로, 응답에 이메일이 없으면
//!   제공자 응답 이상으로 처리합니다.

use async_trait::async_trait;

use super::client::{build_query, decode_response, send_error, OAuthClient};
use super::state::StateManager;
use crate::config::{NaverOAuthConfig, OAuthProvider};
use crate::domain::oauth::naver::{NaverTokenResponse, NaverUserEnvelope, NaverUserProfile};
use crate::domain::oauth::provider_user::ProviderUserInfo;
use crate::errors::errors::{AuthError, AuthResult};

/// 네이버 OAuth 클라이언트
pub struct NaverOAuthClient {
    config: NaverOAuthConfig,
    state: StateManager,
    http: reqwest::Client,
}

impl NaverOAuthClient {
    pub fn new(config: NaverOAuthConfig, state: StateManager, http: reqwest::Client) -> Self {
        Self {
            config,
            state,
            http,
        }
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// 네이버는 교환 실패를 200 응답의 `error` 필드로 알리는 경우가 있어
    /// 본문의 에러 필드까지 확인합니다.
    async fn exchange_code_for_token(&self, code: &str, state: &str) -> AuthResult<String> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("state", state),
        ];

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| send_error("네이버 토큰", e))?;

        let tokens: NaverTokenResponse = decode_response("네이버 토큰", response).await?;

        if let Some(error) = tokens.error {
            let detail = tokens.error_description.unwrap_or(error);
            return Err(AuthError::AuthenticationFailed(format!(
                "네이버 토큰 발급 거부: {}",
                detail
            )));
        }

        tokens.access_token.ok_or_else(|| {
            AuthError::MalformedResponse("네이버 토큰 응답에 access_token이 없습니다".to_string())
        })
    }

    /// Access Token으로 네이버 사용자 정보 조회
    async fn get_user_info(&self, access_token: &str) -> AuthResult<NaverUserProfile> {
        let response = self
            .http
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| send_error("네이버 사용자 정보", e))?;

        let envelope: NaverUserEnvelope =
            decode_response("네이버 사용자 정보", response).await?;

        if !envelope.is_success() {
            return Err(AuthError::AuthenticationFailed(format!(
                "네이버 API 오류 [{}]: {}",
                envelope.resultcode,
                envelope.message.unwrap_or_default()
            )));
        }

        envelope.response.ok_or_else(|| {
            AuthError::MalformedResponse("네이버 응답에 사용자 정보가 없습니다".to_string())
        })
    }
}

fn to_user_info(profile: NaverUserProfile) -> AuthResult<ProviderUserInfo> {
    let email = profile.email.clone().ok_or_else(|| {
        AuthError::MalformedResponse("네이버 응답에 이메일이 없습니다".to_string())
    })?;

    Ok(ProviderUserInfo {
        external_id: profile.id.clone(),
        email: Some(email),
        display_name: profile.display_name(),
        avatar_url: profile.profile_image,
        // 네이버 계정은 이메일 인증을 거친 계정만 발급된다
        email_verified: true,
    })
}

#[async_trait]
impl OAuthClient for NaverOAuthClient {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Naver
    }

    fn authorize_url(&self, state: Option<&str>) -> String {
        // state가 없으면 직접 발급 (네이버는 state 필수)
        let state = state
            .map(str::to_string)
            .unwrap_or_else(|| self.state.issue());

        let params = [
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("state", state.as_str()),
        ];

        format!("{}?{}", self.config.auth_uri, build_query(&params))
    }

    async fn authenticate(
        &self,
        code: &str,
        state: Option<&str>,
        _user_payload: Option<&str>,
    ) -> AuthResult<ProviderUserInfo> {
        // 1. State 검증 (누락도 거부)
        let state = state.ok_or_else(|| {
            AuthError::AuthenticationFailed("네이버 콜백에 state가 없습니다".to_string())
        })?;
        self.state.verify(state)?;

        // 2. Authorization code로 액세스 토큰 교환
        let access_token = self.exchange_code_for_token(code, state).await?;

        // 3. 액세스 토큰으로 사용자 정보 조회
        let profile = self.get_user_info(&access_token).await?;

        to_user_info(profile)
    }
}
