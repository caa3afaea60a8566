//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 네 개 OAuth 프로바이더의 로그인 플로우와 JWT 토큰 기반의 상태 없는
//! 인증을 구현합니다.
//!
//! # Auth Providers
//!
//! - **OAuth 2.0**: Google, Apple, Naver, Kakao
//!   (`GET /api/auth/{provider}`, `/{provider}/callback`)
//! - **토큰 갱신**: 리프레시 토큰으로 새 토큰 쌍 발급 (`POST /api/auth/refresh`)
//! - **로그아웃**: 액세스 토큰 블랙리스트 등록 (`POST /api/auth/logout`)
//! - **프로필**: 현재 사용자 조회/수정 (`GET`/`PUT /api/auth/me`)
use actix_web::{get, post, put, web, HttpMessage, HttpRequest, HttpResponse};
use validator::Validate;

use crate::config::OAuthProvider;
use crate::domain::dto::request::{
    AppleCallbackForm, OAuthCallbackQuery, ProfileUpdateRequest, RefreshTokenRequest,
};
use crate::domain::dto::response::{LoginResponse, MessageResponse, TokenResponse};
use crate::domain::users::user::User;
use crate::errors::errors::AuthError;
use crate::services::auth::AuthService;
use crate::services::users::identity_service::IdentityService;

/// OAuth 로그인 시작 핸들러
///
/// 지정한 프로바이더의 인가 URL로 302 리다이렉트합니다.
/// 브라우저가 이 URL을 따라가 프로바이더 동의 화면으로 이동합니다.
///
/// # Endpoint
/// `GET /api/auth/{provider}`
#[get("/{provider}")]
pub async fn login_start(
    path: web::Path<String>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AuthError> {
    let provider = parse_provider(&path)?;
    let url = auth.login_url(provider)?;

    Ok(HttpResponse::Found()
        .insert_header(("Location", url))
        .finish())
}

/// OAuth 콜백 처리 핸들러 (Google, Naver, Kakao)
///
/// 쿼리 파라미터로 도착하는 표준 콜백을 처리합니다. 사용자가 동의를
/// 거부했거나 프로바이더 측 오류가 발생하면 `code` 없이 `error`만
/// 도착하므로 그 경우를 먼저 확인합니다.
///
/// # Endpoint
/// `GET /api/auth/{provider}/callback?code={code}&state={state}`
#[get("/{provider}/callback")]
pub async fn oauth_callback(
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AuthError> {
    let provider = parse_provider(&path)?;

    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("{} OAuth 에러: {} - {}", provider.as_str(), error, error_msg);
        return Err(AuthError::AuthenticationFailed(error_msg.to_string()));
    }

    let code = query
        .code
        .as_deref()
        .ok_or_else(|| AuthError::ValidationError("code 파라미터가 필요합니다".to_string()))?;

    let (user, pair) = auth
        .login(provider, code, query.state.as_deref(), None)
        .await?;

    log::info!("{} OAuth 로그인 성공: {}", provider.as_str(), user.email);
    Ok(HttpResponse::Ok().json(LoginResponse::new(user, pair)))
}

/// Apple OAuth 콜백 처리 핸들러
///
/// Apple은 `response_mode=form_post`로 콜백하므로 쿼리가 아닌 폼 본문으로
/// 도착합니다. 최초 인증 시에만 `user` 필드에 이름 정보가 JSON 문자열로
/// 함께 옵니다.
///
/// # Endpoint
/// `POST /api/auth/apple/callback`
#[post("/apple/callback")]
pub async fn apple_callback(
    form: web::Form<AppleCallbackForm>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AuthError> {
    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &form.error {
        let error_msg = form
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("Apple OAuth 에러: {} - {}", error, error_msg);
        return Err(AuthError::AuthenticationFailed(error_msg.to_string()));
    }

    let code = form
        .code
        .as_deref()
        .ok_or_else(|| AuthError::ValidationError("code 파라미터가 필요합니다".to_string()))?;

    let (user, pair) = auth
        .login(
            OAuthProvider::Apple,
            code,
            form.state.as_deref(),
            form.user.as_deref(),
        )
        .await?;

    log::info!("Apple OAuth 로그인 성공: {}", user.email);
    Ok(HttpResponse::Ok().json(LoginResponse::new(user, pair)))
}

/// 토큰 갱신 엔드포인트
///
/// 리프레시 토큰을 검증하고 새 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /api/auth/refresh`
#[post("/refresh")]
pub async fn refresh_tokens(
    payload: web::Json<RefreshTokenRequest>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AuthError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let (user, pair) = auth.refresh(&payload.refresh_token).await?;

    log::info!("토큰 갱신 성공: {}", user.email);
    Ok(HttpResponse::Ok().json(TokenResponse::from(pair)))
}

/// 로그아웃 엔드포인트
///
/// Authorization 헤더의 액세스 토큰을 세션에서 제거하고 블랙리스트에
/// 등록합니다. 토큰을 해석하지 않으므로 이미 만료된 토큰으로도
/// 로그아웃은 성공합니다.
///
/// # Endpoint
/// `POST /api/auth/logout`
#[post("/logout")]
pub async fn logout(
    req: HttpRequest,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AuthError> {
    // Authorization 헤더에서 토큰 추출
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AuthError::AuthenticationFailed("Authorization 헤더가 없습니다".to_string())
        })?;

    let token = auth.bearer_token(auth_header)?;
    auth.logout(token).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("성공적으로 로그아웃되었습니다.")))
}

/// 현재 인증된 사용자 정보 조회 엔드포인트
///
/// 인증 미들웨어가 Request Extensions에 넣어 둔 사용자를 반환합니다.
///
/// # Endpoint
/// `GET /api/auth/me`
#[get("")]
pub async fn current_user(req: HttpRequest) -> Result<HttpResponse, AuthError> {
    let user = authenticated_user(&req)?;
    Ok(HttpResponse::Ok().json(user))
}

/// 현재 사용자 프로필 수정 엔드포인트
///
/// 이름과 프로필 이미지 URL만 수정할 수 있으며, 전달된 필드만
/// 반영됩니다. 이메일과 프로바이더 정보는 수정 대상이 아닙니다.
///
/// # Endpoint
/// `PUT /api/auth/me`
#[put("")]
pub async fn update_current_user(
    req: HttpRequest,
    payload: web::Json<ProfileUpdateRequest>,
    identity: web::Data<IdentityService>,
) -> Result<HttpResponse, AuthError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let user = authenticated_user(&req)?;
    let update = payload.into_inner().into_update();
    let updated = identity.update_profile(&user.email, &update).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 경로 파라미터의 프로바이더 이름 해석
fn parse_provider(name: &str) -> Result<OAuthProvider, AuthError> {
    OAuthProvider::from_str(name).map_err(|_| {
        AuthError::ValidationError(format!("지원하지 않는 OAuth 프로바이더: {}", name))
    })
}

/// 미들웨어가 저장한 인증 사용자 꺼내기
///
/// `AuthMiddleware::required()`가 걸린 라우트에서만 사용해야 합니다.
fn authenticated_user(req: &HttpRequest) -> Result<User, AuthError> {
    req.extensions().get::<User>().cloned().ok_or_else(|| {
        AuthError::InternalError("인증 미들웨어가 적용되지 않은 라우트입니다".to_string())
    })
}
