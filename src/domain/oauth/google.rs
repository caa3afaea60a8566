//! # Google OAuth 응답 모델
//!
//! Google OAuth 2.0 인증 플로우에서 반환되는 토큰 및 사용자 정보를
//! 역직렬화하기 위한 데이터 모델을 정의합니다.

use serde::Deserialize;

/// Google 토큰 엔드포인트 응답
///
/// `https://oauth2.googleapis.com/token`에 authorization code를
/// 교환했을 때 반환되는 응답입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// userinfo 호출에 사용하는 액세스 토큰
    pub access_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: Option<i64>,
    /// `access_type=offline` 요청 시에만 포함
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
    /// OpenID Connect ID 토큰 (`openid` 스코프 포함 시)
    pub id_token: Option<String>,
}

/// Google OAuth 2.0 사용자 정보 응답 구조체
///
/// UserInfo 엔드포인트(`https://www.googleapis.com/oauth2/v2/userinfo`)에서
/// 반환되는 사용자 정보를 역직렬화하기 위한 구조체입니다.
///
/// ## OAuth 2.0 스코프 요구사항
///
/// 필드별로 필요한 OAuth 스코프:
///
/// | 필드 | 필수 스코프 |
/// |------|-------------|
/// | `id`, `email` | `openid`, `email` |
/// | `name`, `given_name`, `family_name`, `picture` | `profile` |
/// | `verified_email` | `email` |
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정의 변경되지 않는 고유 식별자
    pub id: String,
    pub email: String,
    /// 이메일 검증 상태 (응답에서 생략되면 false)
    #[serde(default)]
    pub verified_email: bool,
    /// 전체 표시 이름
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    /// 프로필 사진 URL
    pub picture: Option<String>,
    pub locale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_userinfo_parses_full_payload() {
        let body = r#"{
            "id": "108273",
            "email": "alice@gmail.com",
            "verified_email": true,
            "name": "Alice Kim",
            "given_name": "Alice",
            "family_name": "Kim",
            "picture": "https://lh3.googleusercontent.com/a/photo.jpg",
            "locale": "ko"
        }"#;

        let info: GoogleUserInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.id, "108273");
        assert_eq!(info.email, "alice@gmail.com");
        assert!(info.verified_email);
        assert_eq!(info.name.as_deref(), Some("Alice Kim"));
    }

    #[test]
    fn test_userinfo_defaults_missing_verified_flag() {
        let body = r#"{"id": "1", "email": "a@b.c"}"#;

        let info: GoogleUserInfo = serde_json::from_str(body).unwrap();
        assert!(!info.verified_email);
        assert_eq!(info.picture, None);
    }
}
