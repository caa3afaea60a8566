//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - OAuth 로그인/콜백 API 엔드포인트
//! - 토큰 갱신, 로그아웃 엔드포인트
//! - 인증 미들웨어가 적용된 프로필/사용자 조회 엔드포인트
//! - 헬스체크, 서비스 배너 엔드포인트
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ## 인증 불필요 (Public 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/auth")
//!         .service(handlers::auth::login_start)    // 로그인 자체는 인증 불필요
//!         .service(handlers::auth::oauth_callback)
//! );
//! ```
//!
//! ## 인증 필요 (Protected 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/users")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::users::list_users)    // 유효한 액세스 토큰 필요
//! );
//! ```
//!
//! # 등록 순서
//!
//! `/api/auth` 스코프에는 `"/{provider}"` 동적 세그먼트가 있으므로
//! `refresh`, `logout`, `apple/callback` 같은 리터럴 경로를 먼저
//! 등록합니다. `/api/auth/me` 스코프는 미들웨어가 다르므로 별도
//! 스코프로 분리하고 `/api/auth`보다 먼저 등록합니다.

use crate::config::OAuthProvider;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check + service banner
    cfg.service(health_check);
    cfg.service(index);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// OAuth 로그인, 토큰 갱신, 로그아웃, 프로필 엔드포인트를 등록합니다.
///
/// # Available Routes
///
/// ## OAuth (Public)
/// - `GET /api/auth/{provider}` - 프로바이더 인가 URL로 302 리다이렉트
/// - `GET /api/auth/{provider}/callback` - Google/Naver/Kakao 콜백
/// - `POST /api/auth/apple/callback` - Apple form_post 콜백
///
/// ## 토큰 (Public)
/// - `POST /api/auth/refresh` - 토큰 갱신
/// - `POST /api/auth/logout` - 로그아웃
///
/// ## 프로필 (인증 필요)
/// - `GET /api/auth/me` - 현재 사용자 조회
/// - `PUT /api/auth/me` - 현재 사용자 프로필 수정
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    // Protected routes - /api/auth 스코프보다 먼저 등록해야
    // "me"가 "{provider}"로 해석되지 않는다
    cfg.service(
        web::scope("/api/auth/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::auth::current_user)
            .service(handlers::auth::update_current_user),
    );

    // Public routes - 리터럴 경로를 동적 경로보다 먼저 등록
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::refresh_tokens)
            .service(handlers::auth::logout)
            .service(handlers::auth::apple_callback)
            .service(handlers::auth::login_start)
            .service(handlers::auth::oauth_callback),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// 사용자 목록/조회 API 엔드포인트를 등록합니다. 계정 생성은 OAuth
/// 콜백에서만 일어나므로 이 스코프는 조회 전용이며 전체가 인증 필요
/// 라우트입니다.
///
/// # Available Routes
///
/// - `GET /api/users` - 전체 사용자 목록 조회
/// - `GET /api/users/{email}` - 이메일로 사용자 조회
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::list_users)
            .service(handlers::users::get_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 서비스 배너 엔드포인트
///
/// 서비스 이름과 버전, 실행 상태, 지원하는 로그인 프로바이더 목록을
/// 반환합니다.
#[actix_web::get("/")]
async fn index() -> actix_web::HttpResponse {
    let providers: Vec<&str> = OAuthProvider::all().iter().map(|p| p.as_str()).collect();

    actix_web::HttpResponse::Ok().json(json!({
        "message": "OAuth 인증 API 서버",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "providers": providers,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use jsonwebtoken::Algorithm;

    use super::*;
    use crate::config::{JwtConfig, OAuthConfig};
    use crate::services::auth::{AuthService, TokenService};
    use crate::services::oauth::state::StateManager;
    use crate::services::users::identity_service::IdentityService;
    use crate::store::memory::MemoryStore;
    use crate::store::AuthStore;

    /// 프로바이더 클라이언트 없이 전체 라우트를 올린 테스트 앱 데이터
    fn app_data() -> (web::Data<AuthService>, web::Data<IdentityService>) {
        let store: Arc<dyn AuthStore> = Arc::new(MemoryStore::new());
        let identity = Arc::new(IdentityService::new(store.clone()));
        let tokens = TokenService::new(JwtConfig {
            secret: "test-jwt-secret".to_string(),
            algorithm: Algorithm::HS256,
            access_expiration_hours: 24,
        });
        let state = StateManager::new(&OAuthConfig {
            state_secret: "test-state-secret".to_string(),
            session_timeout_minutes: 10,
        });
        let auth = AuthService::new(store, tokens, identity.clone(), state, vec![]);

        (web::Data::new(auth), web::Data::from(identity))
    }

    macro_rules! test_app {
        () => {{
            let (auth, identity) = app_data();
            test::init_service(
                App::new()
                    .app_data(auth)
                    .app_data(identity)
                    .configure(configure_all_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_health_check_reports_healthy() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_index_banner() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "running");
        assert_eq!(
            body["providers"],
            serde_json::json!(["google", "apple", "naver", "kakao"])
        );
    }

    #[actix_web::test]
    async fn test_unknown_provider_is_rejected() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/auth/github").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_me_requires_authentication() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_users_require_authentication() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_refresh_with_invalid_token_is_unauthorized() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "not-a-jwt" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_logout_without_header_is_unauthorized() {
        let app = test_app!();

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_callback_error_param_short_circuits() {
        let app = test_app!();

        // 사용자가 동의 화면에서 거부한 경우: code 없이 error만 도착
        let req = test::TestRequest::get()
            .uri("/api/auth/google/callback?error=access_denied")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_callback_without_code_is_bad_request() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/auth/google/callback")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
