//! 정규화된 프로바이더 사용자 정보 모델
//!
//! 네 프로바이더의 서로 다른 응답 형태를 IdentityService에 넘기기 전에
//! 하나의 공통 형태로 정규화합니다. 각 OAuth 클라이언트는 이 계약을
//! 충족한 뒤에만 데이터를 내부로 전달할 수 있습니다.

/// 프로바이더별 사용자 정보의 공통 정규화 형태
///
/// 선택 필드 규칙:
///
/// - `email`: Apple은 비공개 릴레이 설정에 따라, Kakao는 사용자
///   프라이버시 설정에 따라 생략될 수 있습니다. 이메일 부재는 정상적인
///   비즈니스 결과이며 에러가 아닙니다.
/// - `display_name`: Apple은 최초 인증 이후 이름을 다시 보내지 않으므로
///   재로그인 시 비어 있을 수 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderUserInfo {
    /// 프로바이더에서의 사용자 고유 ID
    pub external_id: String,
    /// 프로바이더가 보고한 이메일
    pub email: Option<String>,
    /// 표시 이름
    pub display_name: Option<String>,
    /// 프로필 이미지 URL
    pub avatar_url: Option<String>,
    /// 프로바이더가 보고한 이메일 인증 여부
    pub email_verified: bool,
}
