//! OAuth 프로바이더 연동 모델 모듈
//!
//! 외부 프로바이더의 와이어 형식(토큰 응답, 사용자 정보 응답)과
//! 내부로 전달되는 정규화 형태를 정의합니다.
//!
//! 와이어 모델은 프로바이더별 파일에, 공통 계약은
//! [`provider_user::ProviderUserInfo`]에 있습니다.

pub mod apple;
pub mod google;
pub mod kakao;
pub mod naver;
pub mod provider_user;
