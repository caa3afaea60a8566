//! 사용자 관리 서비스 모듈
//!
//! 사용자 계정의 결정과 프로필 관리를 담당하는 서비스들을 제공합니다.
//! 모든 계정은 OAuth 로그인을 통해서만 생성됩니다.
//!
//! # Features
//!
//! - 제공자 사용자 정보 → 내부 계정 결정 (없으면 생성)
//! - 이메일 미제공 사용자를 위한 합성 이메일
//! - 프로필 조회 및 부분 수정
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_backend::services::users::IdentityService;
//!
//! let user = identity_service
//!     .resolve_or_create(OAuthProvider::Kakao, provider_info)
//!     .await?;
//! ```

pub mod identity_service;

pub use identity_service::*;
