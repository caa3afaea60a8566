//! 소셜 OAuth 인증 서비스 백엔드
//!
//! Rust 기반의 멀티 프로바이더 OAuth 인증 및 토큰 발급 서비스입니다.
//! Google, Apple, Naver, Kakao 소셜 로그인과 JWT 토큰 기반의
//! 상태 없는 인증을 제공합니다.
//!
//! # Features
//!
//! - **OAuth 2.0**: Google, Apple, Naver, Kakao 소셜 로그인
//! - **JWT 인증**: 액세스/리프레시 토큰 쌍 기반 상태 없는 인증
//! - **토큰 수명주기**: 갱신, 로그아웃 블랙리스트, 주기적 정리
//! - **사용자 관리**: 이메일 기반 계정 통합, 타입드 프로필 수정
//! - **저장소 추상화**: `AuthStore` 트레이트와 메모리 구현
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 인증 오케스트레이션, OAuth 클라이언트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AuthStore     │ ← 저장소 트레이트 (메모리 구현)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use social_auth_backend::config::{JwtConfig, OAuthConfig};
//! use social_auth_backend::services::auth::{AuthService, TokenService};
//! use social_auth_backend::services::oauth::StateManager;
//! use social_auth_backend::services::users::IdentityService;
//! use social_auth_backend::store::memory::MemoryStore;
//!
//! // 서비스는 생성자 주입으로 구성합니다
//! let store = Arc::new(MemoryStore::new());
//! let identity = Arc::new(IdentityService::new(store.clone()));
//! let auth = AuthService::new(
//!     store,
//!     TokenService::new(JwtConfig::from_env()),
//!     identity,
//!     StateManager::new(&OAuthConfig::from_env()),
//!     clients,
//! );
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod store;
