//! 인증 응답관련 DTO
//!
//! 인증 플로우에서 클라이언트로 나가는 응답 형태를 정의합니다.

use serde::Serialize;

use crate::domain::token::token::TokenPair;
use crate::domain::users::user::User;

/// 로그인 성공 응답
///
/// OAuth 콜백 처리가 끝나면 사용자 정보와 토큰 쌍을 함께 반환합니다.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
}

impl LoginResponse {
    pub fn new(user: User, pair: TokenPair) -> Self {
        Self {
            user,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer",
        }
    }
}

/// 토큰 갱신 응답
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer",
        }
    }
}

/// 단순 메시지 응답
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
