//! 인증 요청관련 DTO
//!
//! 인증 플로우로 들어오는 요청 정보를 매핑합니다.

use serde::Deserialize;
use validator::Validate;

use crate::domain::users::user::UserUpdate;

/// 리프레시 토큰 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// OAuth 콜백 쿼리 파라미터 구조체 (Google, Naver, Kakao)
///
/// 사용자가 동의를 거부했거나 프로바이더 측 오류가 발생하면
/// `code` 없이 `error`만 담겨 도착하므로 모든 필드가 선택적입니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// 프로바이더가 보고한 에러 코드
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Apple 콜백 폼 파라미터 구조체
///
/// Apple은 `response_mode=form_post`로 콜백하므로 쿼리가 아닌
/// 폼 본문으로 도착합니다. `user` 필드는 최초 인증 시에만 담겨 오는
/// JSON 문자열입니다.
#[derive(Debug, Deserialize)]
pub struct AppleCallbackForm {
    pub code: Option<String>,
    pub state: Option<String>,
    /// 최초 인증 시에만 전달되는 사용자 정보 JSON
    pub user: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// 프로필 수정 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileUpdateRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1자 이상 100자 이하여야 합니다"))]
    pub name: Option<String>,

    #[validate(url(message = "유효한 이미지 URL을 입력해주세요"))]
    pub picture: Option<String>,
}

impl ProfileUpdateRequest {
    /// 저장소에 전달할 타입드 업데이트로 변환합니다.
    pub fn into_update(self) -> UserUpdate {
        UserUpdate {
            name: self.name,
            picture: self.picture,
        }
    }
}
