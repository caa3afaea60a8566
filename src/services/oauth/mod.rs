//! OAuth 2.0 제공자 클라이언트 모듈
//!
//! Google, Apple, Naver, Kakao 네 제공자의 Authorization Code Flow를
//! 공통 `OAuthClient` 트레이트 뒤에 구현합니다.
//!
//! # Features
//!
//! - 제공자별 인가 URL 생성
//! - 인가 코드 → 액세스 토큰 교환 → 사용자 정보 조회의 일괄 처리
//! - 자체 검증 가능한 state 발급/검증 (CSRF 방지)
//! - Apple ID 토큰의 JWKS 서명 검증
//!
//! # 인증 플로우
//!
//! ```text
//! ┌──────────┐                ┌──────────┐                ┌──────────┐
//! │ 클라이언트 │                │ 우리 서버  │                │  제공자   │
//! └────┬─────┘                └────┬─────┘                └────┬─────┘
//!      │ GET /api/auth/{provider}  │                           │
//!      ├──────────────────────────►│                           │
//!      │ 302 (인가 URL + state)     │                           │
//!      │◄──────────────────────────┤                           │
//!      │          사용자가 제공자 페이지에서 로그인/동의              │
//!      ├───────────────────────────────────────────────────────►│
//!      │ 콜백 (code, state)         │                           │
//!      ├──────────────────────────►│                           │
//!      │                           │ code → token → userinfo   │
//!      │                           ├──────────────────────────►│
//!      │                           │◄──────────────────────────┤
//!      │ JWT 토큰 쌍                │                           │
//!      │◄──────────────────────────┤                           │
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_backend::services::oauth::{GoogleOAuthClient, OAuthClient};
//!
//! let client = GoogleOAuthClient::new(config, http);
//! let url = client.authorize_url(None);
//! let user_info = client.authenticate(&code, None, None).await?;
//! ```

pub mod apple;
pub mod client;
pub mod google;
pub mod kakao;
pub mod naver;
pub mod state;

pub use apple::*;
pub use client::*;
pub use google::*;
pub use kakao::*;
pub use naver::*;
pub use state::*;
