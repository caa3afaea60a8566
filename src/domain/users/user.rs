//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 네 개 OAuth 프로바이더(Google, Apple, Naver, Kakao)로 가입한
//! 사용자를 하나의 통합 모델로 표현합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::OAuthProvider;

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 모든 계정은 OAuth 로그인을 통해서만 생성됩니다.
///
/// ## 식별 규칙
///
/// - `id`는 `"{provider}_{provider_id}"` 형식의 합성 식별자로,
///   `(provider, provider_id)` 쌍이 사용자를 유일하게 결정합니다.
/// - 저장소 조회 키는 `email`입니다. 서로 다른 프로바이더가 같은
///   이메일을 보고하면 하나의 계정으로 합쳐집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 합성 식별자 (`"{provider}_{provider_id}"`)
    pub id: String,
    /// 사용자 이메일 (저장소 조회 키)
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// 프로바이더가 보고한 이메일 인증 여부
    pub verified_email: bool,
    /// 인증 프로바이더
    pub provider: OAuthProvider,
    /// 프로바이더에서의 사용자 ID
    pub provider_id: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 OAuth 사용자 생성
    ///
    /// 첫 로그인 시점에 프로바이더가 보고한 정보로 사용자를 생성합니다.
    pub fn new_oauth(
        provider: OAuthProvider,
        provider_id: String,
        email: String,
        name: String,
        picture: Option<String>,
        verified_email: bool,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: format!("{}_{}", provider.as_str(), provider_id),
            email,
            name,
            picture,
            verified_email,
            provider,
            provider_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 사용자 프로필 수정 요청
///
/// 변경 가능한 필드만 명시적으로 나열한 타입드 업데이트 구조체입니다.
/// 필드 단위로 `Some`인 값만 반영되므로 의도하지 않은 필드가
/// 덮어써질 수 없습니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    /// 표시 이름 변경 (None이면 유지)
    pub name: Option<String>,
    /// 프로필 이미지 URL 변경 (None이면 유지)
    pub picture: Option<String>,
}

impl UserUpdate {
    /// 변경할 내용이 하나라도 있는지 확인합니다.
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.picture.is_some()
    }

    /// 설정된 필드만 대상 사용자에게 반영하고 수정 시간을 갱신합니다.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(picture) = &self.picture {
            user.picture = Some(picture.clone());
        }
        user.updated_at = Utc::now();
    }
}
