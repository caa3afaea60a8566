//! OAuth 클라이언트 공통 계층
//!
//! 네 가지 OAuth 제공자 (Google, Apple, Naver, Kakao) 클라이언트가 공유하는
//! 트레이트와 HTTP 요청 헬퍼를 제공합니다.
//!
//! # 오류 매핑 규칙
//!
//! 제공자 HTTP 호출의 실패는 다음과 같이 도메인 오류로 변환됩니다:
//!
//! | 실패 지점 | 변환 결과 |
//! |-----------|-----------|
//! | 전송 실패 (타임아웃, 연결 거부 등) | `ProviderUnavailable` (502) |
//! | HTTP 5xx 응답 | `ProviderUnavailable` (502) |
//! | HTTP 4xx 응답 | `AuthenticationFailed` (401) |
//! | 성공 응답의 JSON 파싱 실패 | `MalformedResponse` (502) |
//!
//! 재시도는 하지 않습니다. 일시적 장애의 재시도 여부는 호출자(클라이언트 앱)가
//! 결정합니다.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::OAuthProvider;
use crate::domain::oauth::provider_user::ProviderUserInfo;
use crate::errors::errors::{AuthError, AuthResult};

/// OAuth 제공자 클라이언트 인터페이스
///
/// 각 제공자의 인가 코드 플로우 전체(토큰 교환 + 사용자 정보 조회)를
/// `authenticate` 한 번으로 수행합니다. 핸들러와 오케스트레이터는
/// `Arc<dyn OAuthClient>`로 제공자 구현을 구분 없이 다룹니다.
#[async_trait]
pub trait OAuthClient: Send + Sync {
    /// 이 클라이언트가 담당하는 제공자
    fn provider(&self) -> OAuthProvider;

    /// 사용자를 리다이렉트할 제공자 인가 URL 생성
    ///
    /// # Arguments
    /// * `state` - CSRF 방지용 state. 제공자별 취급이 다릅니다:
    ///   Naver는 필수, Apple/Kakao는 전달 시 포함, Google은 사용하지 않습니다.
    fn authorize_url(&self, state: Option<&str>) -> String;

    /// 인가 코드를 검증된 사용자 정보로 교환
    ///
    /// # Arguments
    /// * `code` - 제공자가 콜백으로 전달한 인가 코드
    /// * `state` - 콜백으로 돌아온 state (Naver만 검증)
    /// * `user_payload` - Apple이 첫 로그인 시에만 보내는 `user` 폼 필드
    async fn authenticate(
        &self,
        code: &str,
        state: Option<&str>,
        user_payload: Option<&str>,
    ) -> AuthResult<ProviderUserInfo>;
}

/// 제공자 호출용 공유 HTTP 클라이언트 생성
///
/// 모든 제공자 클라이언트가 커넥션 풀을 공유하도록 시작 시 한 번 생성하여
/// 복제해 주입합니다. 타임아웃은 `HTTP_CLIENT_TIMEOUT_SECS`로 조정합니다.
pub fn build_http_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .expect("HTTP 클라이언트 초기화 실패")
}

/// 전송 단계 실패를 도메인 오류로 변환
///
/// 타임아웃, 연결 거부, DNS 실패 등 응답을 받지 못한 모든 경우입니다.
pub(crate) fn send_error(context: &str, err: reqwest::Error) -> AuthError {
    AuthError::ProviderUnavailable(format!("{} 요청 실패: {}", context, err))
}

/// 제공자 응답의 상태 코드 확인 후 JSON 역직렬화
pub(crate) async fn decode_response<T: DeserializeOwned>(
    context: &str,
    response: reqwest::Response,
) -> AuthResult<T> {
    let status = response.status();

    if status.is_server_error() {
        return Err(AuthError::ProviderUnavailable(format!(
            "{} 서버 오류: HTTP {}",
            context,
            status.as_u16()
        )));
    }

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(AuthError::AuthenticationFailed(format!(
            "{} 요청 거부: {}",
            context, error_text
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AuthError::MalformedResponse(format!("{} 응답 파싱 실패: {}", context, e)))
}

/// 인가 URL용 쿼리 문자열 생성
///
/// 각 값은 percent 인코딩됩니다.
pub(crate) fn build_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_encodes_values() {
        let query = build_query(&[
            ("redirect_uri", "http://localhost:8080/api/auth/google/callback"),
            ("scope", "openid email profile"),
        ]);
        assert_eq!(
            query,
            "redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fapi%2Fauth%2Fgoogle%2Fcallback&scope=openid%20email%20profile"
        );
    }

    #[test]
    fn test_build_query_preserves_order() {
        let query = build_query(&[("a", "1"), ("b", "2"), ("c", "3")]);
        assert_eq!(query, "a=1&b=2&c=3");
    }
}
