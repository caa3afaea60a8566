//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 토큰/자격 증명 계열 에러(`AuthenticationFailed`, `TokenExpired`,
//! `TokenInvalid`, `TokenRevoked`)는 로그에서는 구분되지만 클라이언트에게는
//! 동일한 401 응답 본문으로 전달됩니다. 실패 원인을 노출하면 토큰 탈취
//! 시도에 대한 힌트가 되기 때문입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AuthError;
//!
//! async fn exchange_code(code: &str) -> Result<TokenResponse, AuthError> {
//!     if code.is_empty() {
//!         return Err(AuthError::AuthenticationFailed("empty code".to_string()));
//!     }
//!
//!     let tokens = client.post(token_url).form(&params).send().await
//!         .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;
//!
//!     Ok(tokens)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 플로우에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AuthError {
    /// 인증 실패 - 잘못된 코드, state 불일치, 서명 검증 실패 등 (401 Unauthorized)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// 토큰 만료 (401 Unauthorized)
    #[error("Token has expired")]
    TokenExpired,

    /// 토큰 무효 - 서명 불일치, 파싱 불가, 토큰 종류 불일치 (401 Unauthorized)
    #[error("Invalid token")]
    TokenInvalid,

    /// 로그아웃 처리되어 블랙리스트에 등록된 토큰 (401 Unauthorized)
    #[error("Token has been revoked")]
    TokenRevoked,

    /// 외부 프로바이더 장애 - 네트워크 오류, 타임아웃, 5xx 응답 (502 Bad Gateway)
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// 프로바이더 응답 형식 오류 - 계약 위반으로 보고 502로 처리 (502 Bad Gateway)
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// 사용자 찾을 수 없음 - 삭제된 계정의 리프레시 시도 등 (404 Not Found)
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AuthError {
    /// 자격 증명 계열(401) 에러인지 확인합니다.
    fn is_credential_error(&self) -> bool {
        matches!(
            self,
            AuthError::AuthenticationFailed(_)
                | AuthError::TokenExpired
                | AuthError::TokenInvalid
                | AuthError::TokenRevoked
        )
    }
}

impl actix_web::ResponseError for AuthError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 401 계열은 상세 사유를 로그로만 남기고 본문은 통일합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            e if e.is_credential_error() => StatusCode::UNAUTHORIZED,
            AuthError::ProviderUnavailable(_) | AuthError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            AuthError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AuthError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if self.is_credential_error() {
            log::warn!("인증 거부: {}", self);
            return actix_web::HttpResponse::build(status).json(serde_json::json!({
                "error": "Authentication failed"
            }));
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AuthResult<T> = Result<T, AuthError>;

/// 외부 라이브러리 에러를 AuthError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AuthResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AuthResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AuthResult<T> {
        self.map_err(|e| AuthError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AuthResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AuthError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_authentication_failed_response() {
        let error = AuthError::AuthenticationFailed("state mismatch".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_errors_map_to_unauthorized() {
        for error in [
            AuthError::TokenExpired,
            AuthError::TokenInvalid,
            AuthError::TokenRevoked,
        ] {
            let response = error.error_response();
            assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_provider_unavailable_response() {
        let error = AuthError::ProviderUnavailable("connection timed out".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_malformed_response_maps_to_bad_gateway() {
        let error = AuthError::MalformedResponse("missing id field".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_user_not_found_response() {
        let error = AuthError::UserNotFound("ghost@example.com".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_error_response() {
        let error = AuthError::ValidationError("code is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AuthError::InternalError("something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AuthError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
