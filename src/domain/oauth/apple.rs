//! # Apple Sign in with Apple 응답 모델
//!
//! Apple의 토큰 응답, ID 토큰 클레임, client secret assertion 클레임,
//! 그리고 최초 인증 시에만 전달되는 `user` 폼 필드 페이로드를 정의합니다.
//!
//! Apple은 다른 프로바이더와 달리 userinfo 엔드포인트가 없고, 사용자
//! 정보가 토큰 응답의 서명된 `id_token`에 담겨 옵니다.

use serde::{Deserialize, Serialize};

/// Apple 토큰 엔드포인트 응답
///
/// 사용자 신원은 `id_token`에만 담겨 있으므로 이 필드가 없는 응답은
/// 처리할 수 없습니다.
#[derive(Debug, Deserialize)]
pub struct AppleTokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub refresh_token: Option<String>,
    /// 사용자 신원이 담긴 서명된 JWT
    pub id_token: String,
}

/// Apple ID 토큰의 클레임
///
/// JWKS 서명 검증을 통과한 뒤에만 신뢰할 수 있습니다.
/// `email_verified`는 Apple이 불리언 혹은 `"true"` 문자열로 보내는
/// 것으로 알려져 있어 두 형태 모두 허용합니다.
#[derive(Debug, Deserialize)]
pub struct AppleIdTokenClaims {
    /// 발급자 (`https://appleid.apple.com`)
    pub iss: String,
    /// 대상 클라이언트 (Services ID)
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
    /// Apple에서의 사용자 고유 ID
    pub sub: String,
    /// 사용자 이메일 (비공개 릴레이 주소일 수 있으며 생략 가능)
    pub email: Option<String>,
    #[serde(default, deserialize_with = "bool_from_bool_or_string")]
    pub email_verified: bool,
}

/// Apple 토큰 엔드포인트용 client secret assertion 클레임
///
/// Apple은 정적 secret 대신 `.p8` 개인키로 ES256 서명한 단기 JWT를
/// client secret으로 요구합니다. 유효 기간은 최대 6개월입니다.
#[derive(Debug, Serialize)]
pub struct AppleClientSecretClaims {
    /// Apple Developer 팀 ID
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    /// 항상 `https://appleid.apple.com`
    pub aud: String,
    /// Services ID (client_id)
    pub sub: String,
}

/// 최초 인증 콜백의 `user` 폼 필드 페이로드
///
/// Apple은 사용자의 이름을 ID 토큰이 아닌 이 사이드 채널로, 그것도
/// 최초 인증 한 번만 전달합니다. 이후 로그인에는 절대 다시 오지
/// 않으므로 이때 포착하지 못한 이름은 유실됩니다.
#[derive(Debug, Deserialize)]
pub struct AppleUserPayload {
    pub name: Option<AppleUserName>,
    pub email: Option<String>,
}

/// `user` 페이로드의 이름 구성 요소
#[derive(Debug, Deserialize)]
pub struct AppleUserName {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

impl AppleUserName {
    /// 이름 구성 요소를 하나의 표시 이름으로 합칩니다.
    ///
    /// 두 구성 요소가 모두 비어 있으면 `None`을 반환합니다.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Apple이 불리언 클레임을 문자열로 보내는 경우를 흡수하는 역직렬화 함수
fn bool_from_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => Ok(s == "true"),
    }
}
