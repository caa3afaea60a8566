//! # Naver 아이디로 로그인 응답 모델
//!
//! Naver의 토큰 응답과 `{resultcode, message, response}` 봉투로 감싸진
//! 사용자 정보 응답을 정의합니다.

use serde::Deserialize;

/// Naver 사용자 정보 응답의 성공 코드
pub const NAVER_RESULT_SUCCESS: &str = "00";

/// Naver 토큰 엔드포인트 응답
///
/// Naver는 state 불일치 같은 거부 사유를 HTTP 200 본문의
/// `error`/`error_description` 필드로 보고하는 경우가 있어,
/// 성공 필드와 에러 필드를 한 구조체로 받습니다.
#[derive(Debug, Deserialize)]
pub struct NaverTokenResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    /// 프로바이더가 보고한 에러 코드
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Naver 사용자 정보 봉투
///
/// `https://openapi.naver.com/v1/nid/me` 응답은 항상 이 봉투로
/// 감싸져 있으며, `resultcode != "00"`은 전송 오류가 아닌
/// 프로바이더 측의 치명적 거부를 의미합니다.
#[derive(Debug, Deserialize)]
pub struct NaverUserEnvelope {
    pub resultcode: String,
    pub message: Option<String>,
    pub response: Option<NaverUserProfile>,
}

impl NaverUserEnvelope {
    /// 봉투가 성공 응답인지 확인합니다.
    pub fn is_success(&self) -> bool {
        self.resultcode == NAVER_RESULT_SUCCESS
    }
}

/// Naver 사용자 프로필
///
/// 동의 항목 설정에 따라 대부분의 필드가 생략될 수 있습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct NaverUserProfile {
    /// Naver에서의 사용자 고유 ID
    pub id: String,
    pub email: Option<String>,
    /// 실명
    pub name: Option<String>,
    /// 별명
    pub nickname: Option<String>,
    pub profile_image: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<String>,
    pub birthyear: Option<String>,
    pub mobile: Option<String>,
}

impl NaverUserProfile {
    /// 표시 이름을 결정합니다. 실명이 있으면 실명, 없으면 별명입니다.
    pub fn display_name(&self) -> Option<String> {
        self.name.clone().or_else(|| self.nickname.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_parse() {
        let body = r#"{
            "resultcode": "00",
            "message": "success",
            "response": {
                "id": "32742776",
                "email": "minsu@naver.com",
                "name": "김민수",
                "nickname": "minsu",
                "profile_image": "https://ssl.pstatic.net/static/pwe/address/img_profile.png"
            }
        }"#;

        let envelope: NaverUserEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.is_success());

        let profile = envelope.response.unwrap();
        assert_eq!(profile.id, "32742776");
        assert_eq!(profile.display_name().as_deref(), Some("김민수"));
    }

    #[test]
    fn test_envelope_failure_code() {
        let body = r#"{"resultcode": "024", "message": "Authentication failed"}"#;

        let envelope: NaverUserEnvelope = serde_json::from_str(body).unwrap();
        assert!(!envelope.is_success());
        assert!(envelope.response.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_nickname() {
        let profile = NaverUserProfile {
            id: "1".to_string(),
            email: None,
            name: None,
            nickname: Some("minsu".to_string()),
            profile_image: None,
            age: None,
            gender: None,
            birthday: None,
            birthyear: None,
            mobile: None,
        };

        assert_eq!(profile.display_name().as_deref(), Some("minsu"));
    }

    #[test]
    fn test_token_response_carries_provider_error() {
        let body = r#"{"error": "invalid_request", "error_description": "no valid data in session"}"#;

        let token: NaverTokenResponse = serde_json::from_str(body).unwrap();
        assert!(token.access_token.is_none());
        assert_eq!(token.error.as_deref(), Some("invalid_request"));
    }
}
