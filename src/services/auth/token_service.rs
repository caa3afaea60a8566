//! JWT 토큰 발급/검증 서비스 구현
//!
//! HMAC-SHA256 서명 기반의 JWT 토큰 시스템을 제공합니다.
//! 액세스 토큰(기본 24시간)과 리프레시 토큰(7일)의 발급과 검증을 담당하며,
//! 두 토큰은 `type` 클레임으로 구분되어 서로 호환되지 않습니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::token::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::errors::{AuthError, AuthResult};

/// 리프레시 토큰 유효 기간 (일)
///
/// 블랙리스트 정리 주기가 이 값을 기준으로 하므로,
/// 변경 시 블랙리스트 보존 기간도 함께 조정해야 합니다.
pub const REFRESH_EXPIRATION_DAYS: i64 = 7;

/// JWT 토큰 관리 서비스
///
/// 서명 시크릿과 액세스 토큰 만료 시간은 `JwtConfig`로 주입받습니다.
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// 기준 시각을 지정하여 토큰 발급
    ///
    /// 발급 시각을 주입받는 기본 연산입니다. 일반 경로는
    /// `issue_access_token`/`issue_refresh_token`을 사용하고,
    /// 만료 동작을 검증하는 테스트는 과거 시각을 넘겨 이미 만료된
    /// 토큰을 만들어 사용합니다.
    ///
    /// # Arguments
    ///
    /// * `sub` - 토큰 주체 (사용자 이메일)
    /// * `kind` - 토큰 용도 (만료 시간이 용도에 따라 결정됨)
    /// * `now` - 발급 기준 시각
    pub fn issue_at(
        &self,
        sub: &str,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> AuthResult<String> {
        let ttl = match kind {
            TokenKind::Access => Duration::hours(self.config.access_expiration_hours),
            TokenKind::Refresh => Duration::days(REFRESH_EXPIRATION_DAYS),
        };

        let claims = TokenClaims {
            sub: sub.to_string(),
            kind,
            exp: (now + ttl).timestamp(),
        };

        let header = Header::new(self.config.algorithm);
        let encoding_key = EncodingKey::from_secret(self.config.secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AuthError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰 발급
    pub fn issue_access_token(&self, sub: &str) -> AuthResult<String> {
        self.issue_at(sub, TokenKind::Access, Utc::now())
    }

    /// 리프레시 토큰 발급
    pub fn issue_refresh_token(&self, sub: &str) -> AuthResult<String> {
        self.issue_at(sub, TokenKind::Refresh, Utc::now())
    }

    /// 토큰 쌍 발급 (액세스 + 리프레시)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - 액세스/리프레시 토큰과 액세스 토큰 만료 시간(초)
    pub fn issue_pair(&self, sub: &str) -> AuthResult<TokenPair> {
        let access_token = self.issue_access_token(sub)?;
        let refresh_token = self.issue_refresh_token(sub)?;
        let expires_in = self.config.access_expiration_hours * 3600; // 초 단위로 변환

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in,
        })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명, 만료, 토큰 용도를 모두 확인합니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    /// * `expected` - 기대하는 토큰 용도
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenExpired` - 서명은 유효하지만 만료된 토큰
    /// * `AuthError::TokenInvalid` - 서명 불일치, 형식 오류, 용도 불일치
    pub fn decode_token(&self, token: &str, expected: TokenKind) -> AuthResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.config.secret.as_ref());
        let validation = Validation::new(self.config.algorithm);

        let claims = decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })?;

        // 액세스 토큰으로 갱신하거나 리프레시 토큰으로 API에 접근하는 것을 차단
        if claims.kind != expected {
            return Err(AuthError::TokenInvalid);
        }

        Ok(claims)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenInvalid` - Bearer 접두사가 없는 헤더
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AuthResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::TokenInvalid)
    }
}
