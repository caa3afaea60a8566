//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고
//! 인증된 사용자를 Request Extensions에 저장합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 처리 방식
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// 유효한 액세스 토큰이 없으면 401로 거부
    Required,
    /// 토큰이 유효하면 사용자를 첨부하고, 없거나 무효여도 요청은 통과
    Optional,
}

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpMessage, HttpRequest, HttpResponse};
    use jsonwebtoken::Algorithm;

    use super::*;
    use crate::config::{JwtConfig, OAuthConfig, OAuthProvider};
    use crate::domain::users::user::User;
    use crate::services::auth::{AuthService, TokenService};
    use crate::services::oauth::state::StateManager;
    use crate::services::users::identity_service::IdentityService;
    use crate::store::memory::MemoryStore;
    use crate::store::AuthStore;

    /// Extensions에 저장된 사용자를 그대로 돌려주는 검사용 핸들러
    async fn echo_user(req: HttpRequest) -> HttpResponse {
        match req.extensions().get::<User>() {
            Some(user) => HttpResponse::Ok().body(user.email.clone()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    /// 가입된 사용자 한 명과 그 사용자의 액세스 토큰을 가진 서비스 구성
    async fn service_with_user() -> (web::Data<AuthService>, String) {
        let store: Arc<dyn AuthStore> = Arc::new(MemoryStore::new());
        store
            .create_user(User::new_oauth(
                OAuthProvider::Google,
                "108".to_string(),
                "alice@example.com".to_string(),
                "Alice".to_string(),
                None,
                true,
            ))
            .await
            .unwrap();

        let tokens = TokenService::new(JwtConfig {
            secret: "test-jwt-secret".to_string(),
            algorithm: Algorithm::HS256,
            access_expiration_hours: 24,
        });
        let access = tokens.issue_access_token("alice@example.com").unwrap();
        store.add_session(&access, "alice@example.com").await.unwrap();

        let identity = Arc::new(IdentityService::new(store.clone()));
        let state = StateManager::new(&OAuthConfig {
            state_secret: "test-state-secret".to_string(),
            session_timeout_minutes: 10,
        });
        let auth = AuthService::new(store, tokens, identity, state, vec![]);

        (web::Data::new(auth), access)
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_header() {
        let (auth, _) = service_with_user().await;
        let app = test::init_service(
            App::new().app_data(auth).service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(echo_user)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_rejects_invalid_token() {
        let (auth, _) = service_with_user().await;
        let app = test::init_service(
            App::new().app_data(auth).service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(echo_user)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_attaches_user_for_valid_token() {
        let (auth, access) = service_with_user().await;
        let app = test::init_service(
            App::new().app_data(auth).service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(echo_user)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "alice@example.com");
    }

    #[actix_web::test]
    async fn test_required_rejects_logged_out_token() {
        let (auth, access) = service_with_user().await;
        auth.logout(&access).await.unwrap();

        let app = test::init_service(
            App::new().app_data(auth).service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(echo_user)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_optional_allows_anonymous_request() {
        let (auth, _) = service_with_user().await;
        let app = test::init_service(
            App::new().app_data(auth).service(
                web::resource("/feed")
                    .wrap(AuthMiddleware::optional())
                    .route(web::get().to(echo_user)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/feed").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn test_optional_attaches_user_when_token_present() {
        let (auth, access) = service_with_user().await;
        let app = test::init_service(
            App::new().app_data(auth).service(
                web::resource("/feed")
                    .wrap(AuthMiddleware::optional())
                    .route(web::get().to(echo_user)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/feed")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "alice@example.com");
    }
}
