//! # Google OAuth 2.0 클라이언트
//!
//! Google OAuth 2.0 Authorization Code Flow를 구현합니다.
//! RFC 6749를 준수하며, 토큰 교환 후 UserInfo API로 프로필을 조회합니다.
//!
//! ## 사용하는 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | Authorization | `https://accounts.google.com/o/oauth2/v2/auth` | GET |
//! | Token Exchange | `https://oauth2.googleapis.com/token` | POST |
//! | User Info | `https://www.googleapis.com/oauth2/v2/userinfo` | GET |
//!
//! ## 요청 스코프
//!
//! - `openid`: OpenID Connect 식별자
//! - `email`: 이메일 주소와 인증 여부
//! - `profile`: 이름, 프로필 사진

use async_trait::async_trait;

use super::client::{build_query, decode_response, send_error, OAuthClient};
use crate::config::{GoogleOAuthConfig, OAuthProvider};
use crate::domain::oauth::google::{GoogleTokenResponse, GoogleUserInfo};
use crate::domain::oauth::provider_user::ProviderUserInfo;
use crate::errors::errors::AuthResult;

/// Google OAuth 2.0 클라이언트
///
/// 인가 URL 생성과 코드 → 프로필 교환을 담당합니다.
/// Google은 state 매개변수 없이 운용하므로 `authorize_url`의 state 인자는
/// 무시됩니다.
pub struct GoogleOAuthClient {
    config: GoogleOAuthConfig,
    http: reqwest::Client,
}

impl GoogleOAuthClient {
    pub fn new(config: GoogleOAuthConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Authorization Code를 Access Token으로 교환
    async fn exchange_code_for_token(&self, code: &str) -> AuthResult<GoogleTokenResponse> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
        ];

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| send_error("Google 토큰", e))?;

        decode_response("Google 토큰", response).await
    }

    /// Access Token으로 Google 사용자 정보 조회
    async fn get_user_info(&self, access_token: &str) -> AuthResult<GoogleUserInfo> {
        let response = self
            .http
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| send_error("Google 사용자 정보", e))?;

        decode_response("Google 사용자 정보", response).await
    }
}

fn to_user_info(profile: GoogleUserInfo) -> ProviderUserInfo {
    ProviderUserInfo {
        external_id: profile.id,
        email: Some(profile.email),
        display_name: profile.name,
        avatar_url: profile.picture,
        email_verified: profile.verified_email,
    }
}

#[async_trait]
impl OAuthClient for GoogleOAuthClient {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Google
    }

    fn authorize_url(&self, _state: Option<&str>) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", "openid email profile"),
            ("response_type", "code"),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ];

        format!("{}?{}", self.config.auth_uri, build_query(&params))
    }

    async fn authenticate(
        &self,
        code: &str,
        _state: Option<&str>,
        _user_payload: Option<&str>,
    ) -> AuthResult<ProviderUserInfo> {
        // 1. Authorization code로 액세스 토큰 교환
        let tokens = self.exchange_code_for_token(code).await?;

        // 2. 액세스 토큰으로 사용자 정보 조회
        let profile = self.get_user_info(&tokens.access_token).await?;

        Ok(to_user_info(profile))
    }
}
