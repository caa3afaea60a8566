//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::users::user::User;
use crate::errors::errors::{AuthError, AuthResult};
use crate::middlewares::auth_middleware::AuthMode;
use crate::services::auth::AuthService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            // Authorization 헤더로 요청 주체 인증 시도
            let auth_result = authenticate_from_request(&req).await;

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::debug!("요청 인증 거부: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                // 인증 성공: 사용자 정보를 Request Extensions에 저장
                (_, Ok(user)) => {
                    log::debug!("인증 성공: {}", user.email);
                    req.extensions_mut().insert(user);
                },
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 유효한 토큰 없음, 요청 진행");
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 Authorization 헤더로 사용자를 인증
///
/// 앱 데이터에 등록된 `AuthService`를 사용하므로 애플리케이션 구성 시
/// `web::Data<AuthService>`가 반드시 등록되어 있어야 합니다.
async fn authenticate_from_request(req: &ServiceRequest) -> AuthResult<User> {
    let auth = req
        .app_data::<web::Data<AuthService>>()
        .ok_or_else(|| {
            AuthError::InternalError("AuthService가 앱 데이터에 없습니다".to_string())
        })?;

    // Authorization 헤더 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AuthError::AuthenticationFailed("Authorization 헤더가 없습니다".to_string()))?;

    // Bearer 토큰 추출 후 서명/블랙리스트/계정 검증
    let token = auth.bearer_token(auth_header)?;
    auth.authenticate_request(token).await
}
