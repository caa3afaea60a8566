//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 계정은 OAuth 로그인을 통해서만 생성되므로 이 모듈은 조회 전용이며,
//! 모든 엔드포인트에 인증이 필요합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users` | 전체 사용자 목록 조회 | 200 OK |
//! | `GET` | `/api/users/{email}` | 이메일로 사용자 조회 | 200 OK / 404 Not Found |
//!
//! ## 개인정보 보호
//!
//! 응답은 도메인 `User` 구조체를 그대로 직렬화합니다. 토큰이나 세션 등
//! 인증 내부 상태는 사용자 레코드에 존재하지 않으므로 노출되지 않습니다.

use actix_web::{get, web, HttpResponse};

use crate::errors::errors::AuthError;
use crate::services::users::identity_service::IdentityService;

/// 사용자 목록 조회 핸들러
///
/// 시스템에 등록된 모든 사용자를 반환합니다.
///
/// # Endpoint
/// `GET /api/users`
#[get("")]
pub async fn list_users(
    identity: web::Data<IdentityService>,
) -> Result<HttpResponse, AuthError> {
    let users = identity.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// 특정 사용자 조회 핸들러
///
/// 이메일로 사용자 한 명을 조회합니다. 없으면 404를 반환합니다.
///
/// # Endpoint
/// `GET /api/users/{email}`
#[get("/{email}")]
pub async fn get_user(
    email: web::Path<String>,
    identity: web::Data<IdentityService>,
) -> Result<HttpResponse, AuthError> {
    let user = identity.get_user(&email).await?;
    Ok(HttpResponse::Ok().json(user))
}
