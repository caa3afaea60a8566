//! # 카카오 로그인 클라이언트
//!
//! 카카오 OAuth 2.0 Authorization Code Flow를 구현합니다.
//!
//! ## 카카오 특유의 동작
//!
//! - 사용자 ID가 숫자로 오므로 문자열로 변환하여 다룹니다.
//! - 이메일은 사용자가 동의를 거부하면 응답에서 빠지며, 이는 오류가 아닌
//!   정상적인 로그인 결과입니다. 이메일이 없는 사용자의 식별은
//!   계정 결정 단계에서 합성 이메일로 해결합니다.
//! - client secret은 콘솔에서 활성화한 경우에만 사용하므로 선택 항목입니다.

use async_trait::async_trait;

use super::client::{build_query, decode_response, send_error, OAuthClient};
use crate::config::{KakaoOAuthConfig, OAuthProvider};
use crate::domain::oauth::kakao::{KakaoTokenResponse, KakaoUserResponse};
use crate::domain::oauth::provider_user::ProviderUserInfo;
use crate::errors::errors::AuthResult;

/// 카카오 OAuth 클라이언트
pub struct KakaoOAuthClient {
    config: KakaoOAuthConfig,
    http: reqwest::Client,
}

impl KakaoOAuthClient {
    pub fn new(config: KakaoOAuthConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Authorization Code를 Access Token으로 교환
    async fn exchange_code_for_token(&self, code: &str) -> AuthResult<KakaoTokenResponse> {
        let mut params = vec![
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ];

        if let Some(secret) = self.config.client_secret.as_deref() {
            params.push(("client_secret", secret));
        }

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| send_error("카카오 토큰", e))?;

        decode_response("카카오 토큰", response).await
    }

    /// Access Token으로 카카오 사용자 정보 조회
    async fn get_user_info(&self, access_token: &str) -> AuthResult<KakaoUserResponse> {
        let response = self
            .http
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=utf-8",
            )
            .send()
            .await
            .map_err(|e| send_error("카카오 사용자 정보", e))?;

        decode_response("카카오 사용자 정보", response).await
    }
}

fn to_user_info(user: KakaoUserResponse) -> ProviderUserInfo {
    let account = user.kakao_account.unwrap_or_default();
    let profile = account.profile.unwrap_or_default();

    ProviderUserInfo {
        external_id: user.id.to_string(),
        email: account.email,
        display_name: profile.nickname,
        avatar_url: profile.profile_image_url,
        email_verified: account.is_email_verified.unwrap_or(false),
    }
}

#[async_trait]
impl OAuthClient for KakaoOAuthClient {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Kakao
    }

    fn authorize_url(&self, state: Option<&str>) -> String {
        let mut params = vec![
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", "profile_nickname,profile_image,account_email"),
        ];

        if let Some(state) = state {
            params.push(("state", state));
        }

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
        let user = self.get_user_info(&tokens.access_token).await?;

        Ok(to_user_info(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::oauth::kakao::{KakaoAccount, KakaoProfile};

    fn test_client() -> KakaoOAuthClient {
        let config = KakaoOAuthConfig {
            client_id: "kakao-rest-key".to_string(),
            client_secret: None,
            redirect_uri: "http://localhost:8080/api/auth/kakao/callback".to_string(),
            auth_uri: "https://kauth.kakao.com/oauth/authorize".to_string(),
            token_uri: "https://kauth.kakao.com/oauth/token".to_string(),
            userinfo_uri: "https://kapi.kakao.com/v2/user/me".to_string(),
        };
        KakaoOAuthClient::new(config, reqwest::Client::new())
    }

    #[test]
    fn test_provider() {
        assert_eq!(test_client().provider(), OAuthProvider::Kakao);
    }

    #[test]
    fn test_authorize_url() {
        let url = test_client().authorize_url(Some("xyz"));

        assert!(url.starts_with("https://kauth.kakao.com/oauth/authorize?"));
        assert!(url.contains("client_id=kakao-rest-key"));
        assert!(url.contains("scope=profile_nickname%2Cprofile_image%2Caccount_email"));
        assert!(url.contains("state=xyz"));

        let without_state = test_client().authorize_url(None);
        assert!(!without_state.contains("state="));
    }

    #[test]
    fn test_to_user_info_converts_numeric_id() {
        let user = KakaoUserResponse {
            id: 4321098765,
            connected_at: None,
            kakao_account: Some(KakaoAccount {
                email: Some("yuna@kakao.com".to_string()),
                is_email_verified: Some(true),
                is_email_valid: Some(true),
                profile: Some(KakaoProfile {
                    nickname: Some("유나".to_string()),
                    profile_image_url: Some("http://k.kakaocdn.net/img.jpg".to_string()),
                    thumbnail_image_url: None,
                    is_default_image: Some(false),
                }),
            }),
        };

        let info = to_user_info(user);
        assert_eq!(info.external_id, "4321098765");
        assert_eq!(info.email.as_deref(), Some("yuna@kakao.com"));
        assert_eq!(info.display_name.as_deref(), Some("유나"));
        assert!(info.email_verified);
    }

    #[test]
    fn test_to_user_info_without_email_consent() {
        // 이메일 동의 거부는 오류가 아니다
        let user = KakaoUserResponse {
            id: 999,
            connected_at: None,
            kakao_account: Some(KakaoAccount {
                email: None,
                is_email_verified: None,
                is_email_valid: None,
                profile: Some(KakaoProfile {
                    nickname: Some("손님".to_string()),
                    ..Default::default()
                }),
            }),
        };

        let info = to_user_info(user);
        assert_eq!(info.external_id, "999");
        assert_eq!(info.email, None);
        assert!(!info.email_verified);
    }

    #[test]
    fn test_to_user_info_minimal_response() {
        let user = KakaoUserResponse {
            id: 1,
            connected_at: None,
            kakao_account: None,
        };

        let info = to_user_info(user);
        assert_eq!(info.external_id, "1");
        assert_eq!(info.email, None);
        assert_eq!(info.display_name, None);
    }
}
