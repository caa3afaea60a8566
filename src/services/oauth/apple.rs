//! # Sign in with Apple 클라이언트
//!
//! Apple의 OAuth 플로우는 다른 제공자와 구조가 다릅니다:
//!
//! 1. **form_post 콜백**: 인가 결과가 GET 리다이렉트가 아닌 POST 폼으로 돌아옵니다.
//! 2. **동적 client secret**: 정적 secret 대신 `.p8` 개인키로 ES256 서명한
//!    단기 JWT를 client secret으로 사용합니다.
//! 3. **userinfo 엔드포인트 없음**: 사용자 신원은 토큰 응답의 `id_token`에
//!    담겨 오며, Apple의 JWKS 공개 키로 서명을 검증해야 신뢰할 수 있습니다.
//! 4. **이름 사이드 채널**: 사용자 이름은 최초 인증 콜백의 `user` 폼 필드로
//!    단 한 번만 전달됩니다.
//!
//! ID 토큰은 반드시 서명 검증을 통과해야 합니다. 콜백 폼은 누구나 위조해
//! 보낼 수 있으므로 서명 없이 디코드한 클레임을 신뢰하면
//! 임의 계정 탈취가 가능해집니다.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::jwk::{AlgorithmParameters, JwkSet};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::client::{build_query, decode_response, send_error, OAuthClient};
use crate::config::{AppleOAuthConfig, OAuthProvider};
use crate::domain::oauth::apple::{
    AppleClientSecretClaims, AppleIdTokenClaims, AppleTokenResponse, AppleUserPayload,
};
use crate::domain::oauth::provider_user::ProviderUserInfo;
use crate::errors::errors::{AuthError, AuthResult};

/// Apple ID 토큰과 client secret의 발급자/대상 식별자
const APPLE_ISSUER: &str = "https://appleid.apple.com";

/// client secret JWT의 유효 기간 (Apple 허용 최대치는 6개월)
const CLIENT_SECRET_TTL_DAYS: i64 = 180;

/// Sign in with Apple 클라이언트
///
/// `.p8` 개인키는 생성 시점에 한 번만 읽어 `EncodingKey`로 보관합니다.
/// 키 파일이 없거나 파싱할 수 없으면 생성이 실패하므로,
/// 설정 오류는 서버 시작 시점에 드러납니다.
pub struct AppleOAuthClient {
    config: AppleOAuthConfig,
    http: reqwest::Client,
    signing_key: EncodingKey,
}

impl AppleOAuthClient {
    /// # Arguments
    /// * `config` - Apple OAuth 설정 (Services ID, 팀 ID, 키 ID, 키 파일 경로)
    /// * `http` - 공유 HTTP 클라이언트
    ///
    /// # Returns
    /// * `Err(AuthError::InternalError)` - `.p8` 키 파일 읽기 또는 파싱 실패
    pub fn new(config: AppleOAuthConfig, http: reqwest::Client) -> AuthResult<Self> {
        let pem = std::fs::read(&config.private_key_path).map_err(|e| {
            AuthError::InternalError(format!(
                "Apple 개인 키 파일을 읽을 수 없습니다 ({}): {}",
                config.private_key_path, e
            ))
        })?;

        let signing_key = EncodingKey::from_ec_pem(&pem)
            .map_err(|e| AuthError::InternalError(format!("Apple 개인 키 파싱 실패: {}", e)))?;

        Ok(Self {
            config,
            http,
            signing_key,
        })
    }

    /// Apple 토큰 엔드포인트용 client secret JWT 생성
    fn client_secret(&self) -> AuthResult<String> {
        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(self.config.key_id.clone());

        let claims = secret_claims(&self.config, Utc::now());

        jsonwebtoken::encode(&header, &claims, &self.signing_key)
            .map_err(|e| AuthError::InternalError(format!("Apple client secret 생성 실패: {}", e)))
    }

    /// Authorization Code를 토큰 응답으로 교환
    async fn exchange_code_for_token(&self, code: &str) -> AuthResult<AppleTokenResponse> {
        let client_secret = self.client_secret()?;

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| send_error("Apple 토큰", e))?;

        decode_response("Apple 토큰", response).await
    }

    /// Apple JWKS 공개 키 목록 조회
    async fn fetch_public_keys(&self) -> AuthResult<JwkSet> {
        let response = self
            .http
            .get(&self.config.keys_uri)
            .send()
            .await
            .map_err(|e| send_error("Apple 공개 키", e))?;

        decode_response("Apple 공개 키", response).await
    }
}

/// 인가 URL 구성
fn authorize_url_for(config: &AppleOAuthConfig, state: Option<&str>) -> String {
    let mut params = vec![
        ("client_id", config.client_id.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("response_type", "code"),
        ("scope", "name email"),
        // 애플은 form_post 응답 모드를 권장
        ("response_mode", "form_post"),
    ];

    if let Some(state) = state {
        params.push(("state", state));
    }

    format!("{}?{}", config.auth_uri, build_query(&params))
}

/// client secret assertion의 클레임 구성
fn secret_claims(config: &AppleOAuthConfig, now: DateTime<Utc>) -> AppleClientSecretClaims {
    AppleClientSecretClaims {
        iss: config.team_id.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::days(CLIENT_SECRET_TTL_DAYS)).timestamp(),
        aud: APPLE_ISSUER.to_string(),
        sub: config.client_id.clone(),
    }
}

/// ID 토큰을 Apple JWKS 공개 키로 검증하고 클레임 추출
///
/// 검증 항목:
/// 1. 헤더의 `kid`에 해당하는 공개 키가 JWKS에 존재
/// 2. RS256 서명이 해당 공개 키와 일치
/// 3. `iss`가 `https://appleid.apple.com`, `aud`가 우리 client_id
/// 4. `exp` 미경과
fn verify_id_token(client_id: &str, id_token: &str, keys: &JwkSet) -> AuthResult<AppleIdTokenClaims> {
    let header = jsonwebtoken::decode_header(id_token).map_err(|e| {
        AuthError::AuthenticationFailed(format!("Apple ID 토큰 헤더 파싱 실패: {}", e))
    })?;

    let kid = header.kid.ok_or_else(|| {
        AuthError::AuthenticationFailed("Apple ID 토큰에 kid 헤더가 없습니다".to_string())
    })?;

    let jwk = keys.find(&kid).ok_or_else(|| {
        AuthError::AuthenticationFailed(format!("알 수 없는 Apple key ID: {}", kid))
    })?;

    let decoding_key = match &jwk.algorithm {
        AlgorithmParameters::RSA(rsa) => DecodingKey::from_rsa_components(&rsa.n, &rsa.e)
            .map_err(|e| AuthError::InternalError(format!("Apple 공개 키 변환 실패: {}", e)))?,
        _ => {
            return Err(AuthError::MalformedResponse(
                "지원하지 않는 Apple 공개 키 형식".to_string(),
            ));
        }
    };

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[client_id]);
    validation.set_issuer(&[APPLE_ISSUER]);

    let token_data =
        jsonwebtoken::decode::<AppleIdTokenClaims>(id_token, &decoding_key, &validation)
            .map_err(|e| {
                AuthError::AuthenticationFailed(format!("Apple ID 토큰 검증 실패: {}", e))
            })?;

    Ok(token_data.claims)
}

/// 최초 인증 콜백의 `user` 폼 필드에서 표시 이름 추출
fn name_from_user_payload(raw: &str) -> Option<String> {
    serde_json::from_str::<AppleUserPayload>(raw)
        .ok()
        .and_then(|payload| payload.name)
        .and_then(|name| name.full_name())
}

#[async_trait]
impl OAuthClient for AppleOAuthClient {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Apple
    }

    fn authorize_url(&self, state: Option<&str>) -> String {
        authorize_url_for(&self.config, state)
    }

    async fn authenticate(
        &self,
        code: &str,
        _state: Option<&str>,
        user_payload: Option<&str>,
    ) -> AuthResult<ProviderUserInfo> {
        // 1. Authorization code를 id_token이 포함된 토큰 응답으로 교환
        let tokens = self.exchange_code_for_token(code).await?;

        // 2. JWKS 공개 키로 id_token 서명 검증
        let keys = self.fetch_public_keys().await?;
        let claims = verify_id_token(&self.config.client_id, &tokens.id_token, &keys)?;

        // 3. 첫 로그인에만 오는 user 페이로드에서 이름 포착
        let display_name = user_payload.and_then(name_from_user_payload);

        Ok(ProviderUserInfo {
            external_id: claims.sub,
            email: claims.email,
            display_name,
            avatar_url: None,
            email_verified: claims.email_verified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> AppleOAuthConfig {
        AppleOAuthConfig {
            client_id: "com.example.service".to_string(),
            team_id: "TEAM123456".to_string(),
            key_id: "KEY1234567".to_string(),
            private_key_path: "./apple_private_key.p8".to_string(),
            redirect_uri: "http://localhost:8080/api/auth/apple/callback".to_string(),
            auth_uri: "https://appleid.apple.com/auth/authorize".to_string(),
            token_uri: "https://appleid.apple.com/auth/token".to_string(),
            keys_uri: "https://appleid.apple.com/auth/keys".to_string(),
        }
    }

    fn test_jwks() -> JwkSet {
        // 서명 검증에는 쓰이지 않는 형식상의 RSA 키
        serde_json::from_value(json!({
            "keys": [{
                "kty": "RSA",
                "kid": "apple-key-1",
                "use": "sig",
                "alg": "RS256",
                "n": "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw",
                "e": "AQAB"
            }]
        }))
        .unwrap()
    }

    /// kid 헤더가 들어간 형식상의 JWT 생성 (서명 알고리즘은 무관)
    fn token_with_kid(kid: &str) -> String {
        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some(kid.to_string());
        jsonwebtoken::encode(
            &header,
            &json!({"sub": "001234.abcdef", "exp": 4102444800i64}),
            &EncodingKey::from_secret(b"test"),
        )
        .unwrap()
    }

    #[test]
    fn test_secret_claims_shape() {
        let now = Utc::now();
        let claims = secret_claims(&test_config(), now);

        assert_eq!(claims.iss, "TEAM123456");
        assert_eq!(claims.sub, "com.example.service");
        assert_eq!(claims.aud, "https://appleid.apple.com");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 180 * 24 * 3600);
    }

    #[test]
    fn test_authorize_url_includes_form_post_mode() {
        let url = authorize_url_for(&test_config(), Some("abc"));

        assert!(url.starts_with("https://appleid.apple.com/auth/authorize?"));
        assert!(url.contains("response_mode=form_post"));
        assert!(url.contains("scope=name%20email"));
        assert!(url.contains("state=abc"));
    }

    #[test]
    fn test_authorize_url_without_state() {
        let url = authorize_url_for(&test_config(), None);
        assert!(!url.contains("state="));
    }

    #[test]
    fn test_verify_id_token_rejects_unknown_kid() {
        let token = token_with_kid("not-in-jwks");
        let err = verify_id_token("com.example.service", &token, &test_jwks()).unwrap_err();

        match err {
            AuthError::AuthenticationFailed(msg) => assert!(msg.contains("not-in-jwks")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_verify_id_token_rejects_missing_kid() {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &json!({"sub": "x"}),
            &EncodingKey::from_secret(b"test"),
        )
        .unwrap();

        assert!(verify_id_token("com.example.service", &token, &test_jwks()).is_err());
    }

    #[test]
    fn test_verify_id_token_rejects_wrong_algorithm() {
        // kid는 일치하지만 RS256 서명이 아니므로 검증 단계에서 거부된다
        let token = token_with_kid("apple-key-1");
        let err = verify_id_token("com.example.service", &token, &test_jwks()).unwrap_err();

        match err {
            AuthError::AuthenticationFailed(msg) => assert!(msg.contains("검증 실패")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_verify_id_token_rejects_garbage() {
        assert!(verify_id_token("com.example.service", "not-a-jwt", &test_jwks()).is_err());
    }

    #[test]
    fn test_name_from_user_payload() {
        let raw = r#"{"name": {"firstName": "Jane", "lastName": "Doe"}, "email": "j@e.com"}"#;
        assert_eq!(name_from_user_payload(raw).as_deref(), Some("Jane Doe"));

        assert_eq!(name_from_user_payload("{}"), None);
        assert_eq!(name_from_user_payload("broken json"), None);
    }
}
