//! # Kakao 로그인 응답 모델
//!
//! Kakao의 토큰 응답과 `kakao_account` 아래로 중첩된 사용자 정보
//! 응답을 정의합니다.

use serde::Deserialize;

/// Kakao 토큰 엔드포인트 응답
#[derive(Debug, Deserialize)]
pub struct KakaoTokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub refresh_token_expires_in: Option<i64>,
    pub scope: Option<String>,
}

/// Kakao 사용자 정보 응답
///
/// `https://kapi.kakao.com/v2/user/me` 응답의 최상위 구조입니다.
/// 사용자 ID는 숫자로 오며, 나머지 정보는 동의 항목에 따라
/// `kakao_account` 아래에 선택적으로 중첩됩니다.
#[derive(Debug, Deserialize)]
pub struct KakaoUserResponse {
    /// Kakao에서의 사용자 고유 ID (숫자)
    pub id: i64,
    pub connected_at: Option<String>,
    pub kakao_account: Option<KakaoAccount>,
}

/// `kakao_account` 중첩 객체
///
/// 이메일은 사용자 프라이버시 설정에 따라 생략될 수 있으며,
/// 이는 정상적인 로그인 결과입니다.
#[derive(Debug, Default, Deserialize)]
pub struct KakaoAccount {
    pub email: Option<String>,
    pub is_email_verified: Option<bool>,
    pub is_email_valid: Option<bool>,
    pub profile: Option<KakaoProfile>,
}

/// `kakao_account.profile` 중첩 객체
#[derive(Debug, Default, Deserialize)]
pub struct KakaoProfile {
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
    pub thumbnail_image_url: Option<String>,
    pub is_default_image: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_parses_nested_account() {
        let body = r#"{
            "id": 4321098765,
            "connected_at": "2024-03-01T09:30:00Z",
            "kakao_account": {
                "email": "yuna@kakao.com",
                "is_email_verified": true,
                "is_email_valid": true,
                "profile": {
                    "nickname": "유나",
                    "profile_image_url": "http://k.kakaocdn.net/img_640x640.jpg",
                    "thumbnail_image_url": "http://k.kakaocdn.net/img_110x110.jpg",
                    "is_default_image": false
                }
            }
        }"#;

        let user: KakaoUserResponse = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, 4321098765);

        let account = user.kakao_account.unwrap();
        assert_eq!(account.email.as_deref(), Some("yuna@kakao.com"));
        assert_eq!(account.is_email_verified, Some(true));
        assert_eq!(
            account.profile.unwrap().nickname.as_deref(),
            Some("유나")
        );
    }

    #[test]
    fn test_user_response_without_email_consent() {
        // 이메일 동의를 거부한 사용자의 전형적인 응답
        let body = r#"{
            "id": 999,
            "kakao_account": {
                "profile": {"nickname": "손님"}
            }
        }"#;

        let user: KakaoUserResponse = serde_json::from_str(body).unwrap();
        let account = user.kakao_account.unwrap();
        assert_eq!(account.email, None);
        assert_eq!(account.is_email_verified, None);
    }

    #[test]
    fn test_user_response_minimal() {
        let user: KakaoUserResponse = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(user.kakao_account.is_none());
    }
}
