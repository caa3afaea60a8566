//! # 인증 설정 모듈
//!
//! JWT 토큰, OAuth 프로바이더(Google, Apple, Naver, Kakao) 관련 설정을
//! 환경 변수 기반으로 관리합니다.
//!
//! 설정 구조체는 기동 시점에 `from_env()`로 한 번 로드되어 서비스
//! 생성자에 주입됩니다. 요청 처리 중에는 환경 변수를 다시 읽지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/api/auth/google/callback"
//! ```
//!
//! ### Apple OAuth 설정
//! ```bash
//! export APPLE_CLIENT_ID="com.example.service"
//! export APPLE_TEAM_ID="your-team-id"
//! export APPLE_KEY_ID="your-key-id"
//! export APPLE_PRIVATE_KEY_PATH="./apple_private_key.p8"
//! export APPLE_REDIRECT_URI="https://yourdomain.com/api/auth/apple/callback"
//! ```
//!
//! ### Naver / Kakao OAuth 설정
//! ```bash
//! export NAVER_CLIENT_ID="..."
//! export NAVER_CLIENT_SECRET="..."
//! export NAVER_REDIRECT_URI="http://localhost:8080/api/auth/naver/callback"
//! export KAKAO_CLIENT_ID="..."
//! export KAKAO_REDIRECT_URI="http://localhost:8080/api/auth/kakao/callback"
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET_KEY="your-super-secret-jwt-key"
//! export JWT_ALGORITHM="HS256"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ### OAuth 보안 설정
//! ```bash
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! export OAUTH_SESSION_TIMEOUT_MINUTES="10"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{GoogleOAuthConfig, JwtConfig, OAuthProvider};
//!
//! let google = GoogleOAuthConfig::from_env();
//! let jwt = JwtConfig::from_env();
//!
//! let provider = OAuthProvider::from_str("google")?;
//! ```

use std::env;

use jsonwebtoken::Algorithm;

/// JWT 토큰 설정
///
/// 토큰 서명 비밀키, 서명 알고리즘, 액세스 토큰 만료 시간을 관리합니다.
/// 리프레시 토큰 만료는 정책상 7일로 고정되어 있어 설정 항목이 아닙니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// 토큰 서명용 대칭키
    pub secret: String,
    /// 서명 알고리즘 (기본 HS256)
    pub algorithm: Algorithm,
    /// 액세스 토큰 만료 시간 (시간 단위, 기본 24)
    pub access_expiration_hours: i64,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 로드합니다.
    ///
    /// # 환경 변수
    ///
    /// - `JWT_SECRET_KEY`: 서명 비밀키. 미설정 시 개발용 기본값을 사용하며
    ///   경고 로그가 출력됩니다.
    /// - `JWT_ALGORITHM`: 서명 알고리즘 이름 (기본 `HS256`)
    /// - `JWT_EXPIRATION_HOURS`: 액세스 토큰 만료 시간 (기본 24)
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET_KEY").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET_KEY not set, using default (not secure for production!)");
            "your-secret-key-here".to_string()
        });

        let algorithm = env::var("JWT_ALGORITHM")
            .unwrap_or_else(|_| "HS256".to_string())
            .parse::<Algorithm>()
            .unwrap_or_else(|_| {
                log::warn!("JWT_ALGORITHM not recognized, falling back to HS256");
                Algorithm::HS256
            });

        let access_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24);

        Self {
            secret,
            algorithm,
            access_expiration_hours,
        }
    }
}

/// OAuth 일반 설정
///
/// 모든 OAuth 프로바이더에 공통으로 적용되는 보안 설정입니다.
/// CSRF 공격 방지를 위한 state 매개변수 서명과 인증 플로우의
/// 최대 허용 시간을 관리합니다.
///
/// ## OAuth State 매개변수
///
/// 인증 요청 시 생성된 서명 값이 콜백에서 그대로 반환되는지 검증하여
/// CSRF 공격을 차단합니다. Naver 플로우에서는 검증이 필수입니다.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// state 매개변수 서명용 비밀키
    pub state_secret: String,
    /// 인증 시작부터 콜백까지의 최대 허용 시간 (분 단위, 기본 10)
    pub session_timeout_minutes: i64,
}

impl OAuthConfig {
    /// 환경 변수에서 OAuth 공통 설정을 로드합니다.
    pub fn from_env() -> Self {
        let state_secret = env::var("OAUTH_STATE_SECRET").unwrap_or_else(|_| {
            log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
            "oauth-state-secret".to_string()
        });

        let session_timeout_minutes = env::var("OAUTH_SESSION_TIMEOUT_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Self {
            state_secret,
            session_timeout_minutes,
        }
    }
}

/// Google OAuth 2.0 설정
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
///
/// ## Google Cloud Console 설정 가이드
///
/// 1. [Google Cloud Console](https://console.cloud.google.com/) 접속
/// 2. APIs & Services > Credentials 에서 OAuth 2.0 Client ID 생성
/// 3. 승인된 리디렉션 URI 추가: `http://localhost:8080/api/auth/google/callback`
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// 인증 요청 엔드포인트
    pub auth_uri: String,
    /// 토큰 교환 엔드포인트
    pub token_uri: String,
    /// 사용자 정보 엔드포인트
    pub userinfo_uri: String,
}

impl GoogleOAuthConfig {
    /// 환경 변수에서 Google OAuth 설정을 로드합니다.
    ///
    /// 엔드포인트 URI는 Google의 실제 엔드포인트를 기본값으로 사용하므로
    /// 테스트나 스테이징에서만 재정의하면 됩니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, `GOOGLE_REDIRECT_URI`
    /// 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set"),
            client_secret: env::var("GOOGLE_CLIENT_SECRET")
                .expect("GOOGLE_CLIENT_SECRET must be set"),
            redirect_uri: env::var("GOOGLE_REDIRECT_URI")
                .expect("GOOGLE_REDIRECT_URI must be set"),
            auth_uri: env::var("GOOGLE_AUTH_URI")
                .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string()),
            token_uri: env::var("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
            userinfo_uri: env::var("GOOGLE_USERINFO_URI")
                .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string()),
        }
    }
}

/// Apple Sign in with Apple 설정
///
/// Apple은 정적 client secret 대신 개발자 계정의 개인키로 서명한
/// 단기 JWT assertion을 요구합니다. 따라서 client secret 대신
/// 팀 ID, 키 ID, `.p8` 개인키 경로를 관리합니다.
///
/// ## Apple Developer 설정 가이드
///
/// 1. [Apple Developer](https://developer.apple.com/) > Certificates, Identifiers & Profiles
/// 2. Services ID 생성 (이 값이 `client_id`)
/// 3. Sign in with Apple용 Key 생성 후 `.p8` 파일 다운로드
/// 4. Key ID와 Team ID를 함께 기록
#[derive(Debug, Clone)]
pub struct AppleOAuthConfig {
    /// Services ID (예: `com.example.service`)
    pub client_id: String,
    /// Apple Developer 팀 ID
    pub team_id: String,
    /// `.p8` 키의 Key ID
    pub key_id: String,
    /// `.p8` 개인키 파일 경로
    pub private_key_path: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    /// Apple 공개키(JWKS) 엔드포인트
    pub keys_uri: String,
}

impl AppleOAuthConfig {
    /// 환경 변수에서 Apple OAuth 설정을 로드합니다.
    ///
    /// # Panics
    ///
    /// `APPLE_CLIENT_ID`, `APPLE_TEAM_ID`, `APPLE_KEY_ID`,
    /// `APPLE_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("APPLE_CLIENT_ID").expect("APPLE_CLIENT_ID must be set"),
            team_id: env::var("APPLE_TEAM_ID").expect("APPLE_TEAM_ID must be set"),
            key_id: env::var("APPLE_KEY_ID").expect("APPLE_KEY_ID must be set"),
            private_key_path: env::var("APPLE_PRIVATE_KEY_PATH")
                .unwrap_or_else(|_| "./apple_private_key.p8".to_string()),
            redirect_uri: env::var("APPLE_REDIRECT_URI").expect("APPLE_REDIRECT_URI must be set"),
            auth_uri: env::var("APPLE_AUTH_URI")
                .unwrap_or_else(|_| "https://appleid.apple.com/auth/authorize".to_string()),
            token_uri: env::var("APPLE_TOKEN_URI")
                .unwrap_or_else(|_| "https://appleid.apple.com/auth/token".to_string()),
            keys_uri: env::var("APPLE_KEYS_URI")
                .unwrap_or_else(|_| "https://appleid.apple.com/auth/keys".to_string()),
        }
    }
}

/// Naver OAuth 2.0 설정
///
/// [Naver Developers](https://developers.naver.com/)에서 등록한
/// 애플리케이션 정보를 관리합니다. Naver 플로우는 CSRF 방지용 state
/// 매개변수 검증이 필수입니다.
#[derive(Debug, Clone)]
pub struct NaverOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
}

impl NaverOAuthConfig {
    /// 환경 변수에서 Naver OAuth 설정을 로드합니다.
    ///
    /// # Panics
    ///
    /// `NAVER_CLIENT_ID`, `NAVER_CLIENT_SECRET`, `NAVER_REDIRECT_URI`
    /// 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("NAVER_CLIENT_ID").expect("NAVER_CLIENT_ID must be set"),
            client_secret: env::var("NAVER_CLIENT_SECRET")
                .expect("NAVER_CLIENT_SECRET must be set"),
            redirect_uri: env::var("NAVER_REDIRECT_URI").expect("NAVER_REDIRECT_URI must be set"),
            auth_uri: env::var("NAVER_AUTH_URI")
                .unwrap_or_else(|_| "https://nid.naver.com/oauth2.0/authorize".to_string()),
            token_uri: env::var("NAVER_TOKEN_URI")
                .unwrap_or_else(|_| "https://nid.naver.com/oauth2.0/token".to_string()),
            userinfo_uri: env::var("NAVER_USERINFO_URI")
                .unwrap_or_else(|_| "https://openapi.naver.com/v1/nid/me".to_string()),
        }
    }
}

/// Kakao OAuth 2.0 설정
///
/// [Kakao Developers](https://developers.kakao.com/)에서 등록한
/// 애플리케이션 정보를 관리합니다. Kakao의 client secret은 콘솔에서
/// 활성화한 경우에만 필요한 선택 항목입니다.
#[derive(Debug, Clone)]
pub struct KakaoOAuthConfig {
    pub client_id: String,
    /// 콘솔에서 secret을 활성화한 경우에만 설정
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
}

impl KakaoOAuthConfig {
    /// 환경 변수에서 Kakao OAuth 설정을 로드합니다.
    ///
    /// # Panics
    ///
    /// `KAKAO_CLIENT_ID`, `KAKAO_REDIRECT_URI` 환경 변수가 설정되지
    /// 않은 경우 패닉이 발생합니다.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("KAKAO_CLIENT_ID").expect("KAKAO_CLIENT_ID must be set"),
            client_secret: env::var("KAKAO_CLIENT_SECRET").ok().filter(|s| !s.is_empty()),
            redirect_uri: env::var("KAKAO_REDIRECT_URI").expect("KAKAO_REDIRECT_URI must be set"),
            auth_uri: env::var("KAKAO_AUTH_URI")
                .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/authorize".to_string()),
            token_uri: env::var("KAKAO_TOKEN_URI")
                .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/token".to_string()),
            userinfo_uri: env::var("KAKAO_USERINFO_URI")
                .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string()),
        }
    }
}

/// 지원하는 OAuth 인증 공급자를 나타내는 열거형
///
/// 네 개 프로바이더를 추상화하여 통일된 인터페이스를 제공합니다.
/// 사용자 레코드의 `provider` 필드와 URL 경로 세그먼트에 그대로
/// 사용되므로 소문자로 직렬화됩니다.
///
/// ## 확장성
///
/// 새로운 OAuth 프로바이더 추가 시 이 열거형에 변형을 추가하고,
/// 해당 프로바이더의 설정 구조체와 클라이언트를 구현하면 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    /// Google OAuth 2.0 인증
    Google,
    /// Apple Sign in with Apple 인증
    ///
    /// 콜백이 `response_mode=form_post`로 도착하고, 사용자 정보가
    /// 별도 userinfo 호출 없이 서명된 ID 토큰에 담겨 오는 점이
    /// 다른 프로바이더와 다릅니다.
    Apple,
    /// Naver 아이디로 로그인
    Naver,
    /// Kakao 로그인
    Kakao,
}

impl OAuthProvider {
    /// 문자열에서 OAuthProvider를 생성합니다.
    ///
    /// URL 경로 세그먼트나 설정 파일에서 문자열로 전달된 프로바이더
    /// 이름을 열거형 값으로 변환합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 프로바이더 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(OAuthProvider)` - 유효한 프로바이더인 경우
    /// * `Err(String)` - 지원하지 않는 프로바이더인 경우
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "apple" => Ok(OAuthProvider::Apple),
            "naver" => Ok(OAuthProvider::Naver),
            "kakao" => Ok(OAuthProvider::Kakao),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// OAuthProvider를 문자열로 변환합니다.
    ///
    /// 사용자 레코드의 `provider` 필드, 합성 이메일, 로깅에 사용되는
    /// 소문자 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Apple => "apple",
            OAuthProvider::Naver => "naver",
            OAuthProvider::Kakao => "kakao",
        }
    }

    /// 전체 프로바이더 목록을 반환합니다.
    ///
    /// 서비스 배너 응답에서 지원 프로바이더를 나열할 때 사용됩니다.
    pub fn all() -> [OAuthProvider; 4] {
        [
            OAuthProvider::Google,
            OAuthProvider::Apple,
            OAuthProvider::Naver,
            OAuthProvider::Kakao,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_provider_from_string() {
        assert_eq!(
            OAuthProvider::from_str("google").unwrap(),
            OAuthProvider::Google
        );
        assert_eq!(
            OAuthProvider::from_str("apple").unwrap(),
            OAuthProvider::Apple
        );
        assert_eq!(
            OAuthProvider::from_str("naver").unwrap(),
            OAuthProvider::Naver
        );
        assert_eq!(
            OAuthProvider::from_str("kakao").unwrap(),
            OAuthProvider::Kakao
        );

        // 대소문자 무관 테스트
        assert_eq!(
            OAuthProvider::from_str("KAKAO").unwrap(),
            OAuthProvider::Kakao
        );
        assert_eq!(
            OAuthProvider::from_str("Google").unwrap(),
            OAuthProvider::Google
        );

        // 지원하지 않는 프로바이더 테스트
        assert!(OAuthProvider::from_str("twitter").is_err());
        assert!(OAuthProvider::from_str("local").is_err());
    }

    #[test]
    fn test_oauth_provider_as_string() {
        assert_eq!(OAuthProvider::Google.as_str(), "google");
        assert_eq!(OAuthProvider::Apple.as_str(), "apple");
        assert_eq!(OAuthProvider::Naver.as_str(), "naver");
        assert_eq!(OAuthProvider::Kakao.as_str(), "kakao");
    }

    #[test]
    fn test_oauth_provider_roundtrip() {
        // 문자열 → OAuthProvider → 문자열 변환 테스트
        for provider in OAuthProvider::all() {
            let parsed = OAuthProvider::from_str(provider.as_str()).unwrap();
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn test_oauth_provider_serialization() {
        // 소문자 직렬화는 사용자 레코드의 provider 필드 형식과 맞물린다
        let provider = OAuthProvider::Kakao;
        let json = serde_json::to_string(&provider).unwrap();
        assert_eq!(json, "\"kakao\"");

        let deserialized: OAuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }
}
