//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증과 인증 수명주기 오케스트레이션을 담당하는
//! 서비스들을 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 발급과 검증
//! - OAuth 로그인, 토큰 갱신, 로그아웃, 요청 인증의 조율
//! - 로그아웃된 토큰의 블랙리스트 관리
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - `type` 클레임에 의한 액세스/리프레시 토큰 분리
//! - CSRF 방지 (OAuth State 매개변수)
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_backend::services::auth::{AuthService, TokenService};
//!
//! let pair = token_service.issue_pair(&user.email)?;
//! let user = auth_service.authenticate_request(&pair.access_token).await?;
//! ```

pub mod auth_service;
pub mod token_service;

pub use auth_service::*;
pub use token_service::*;
