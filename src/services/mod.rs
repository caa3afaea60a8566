//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 생성자 주입으로 협력자를 받으며, 시작 시점에 조립되어
//! `web::Data`로 핸들러에 공유됩니다. 도메인별로 모듈화되어 인증 수명주기,
//! OAuth 제공자 연동, 사용자 계정 관리를 담당합니다.
//!
//! # Features
//!
//! - JWT 토큰 기반 인증 시스템 (발급, 검증, 갱신, 무효화)
//! - OAuth 2.0 소셜 로그인 (Google, Apple, Naver, Kakao)
//! - 이메일 기반 사용자 계정 결정 및 프로필 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_backend::services::auth::AuthService;
//!
//! let (user, tokens) = auth_service
//!     .login(OAuthProvider::Google, &code, None, None)
//!     .await?;
//! ```

pub mod auth;
pub mod oauth;
pub mod users;
