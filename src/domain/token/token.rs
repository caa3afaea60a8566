//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! 토큰 페이로드 클레임과 2개의 용도별 토큰을 페어링 한 정보를 표시합니다.

use serde::{Deserialize, Serialize};

/// 토큰 용도 구분
///
/// 액세스 토큰과 리프레시 토큰은 서로 호환되지 않습니다.
/// 디코딩 시 기대한 종류와 클레임의 `type` 값이 다르면 서명이
/// 유효하더라도 거부됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// API 접근용 단기 토큰
    Access,
    /// 토큰 갱신용 장기 토큰
    Refresh,
}

impl TokenKind {
    /// 클레임 및 로그에 쓰이는 소문자 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 이메일)
/// - `type`: 토큰 종류 (`"access"` 또는 `"refresh"`)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 이메일)
    pub sub: String,
    /// 토큰 종류
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합을 나타냅니다.
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_wire_format() {
        let claims = TokenClaims {
            sub: "alice@example.com".to_string(),
            kind: TokenKind::Access,
            exp: 1_700_000_000,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], "alice@example.com");
        assert_eq!(json["type"], "access");
        assert_eq!(json["exp"], 1_700_000_000);
        // sub, type, exp 세 클레임만 나간다
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [TokenKind::Access, TokenKind::Refresh] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));

            let parsed: TokenKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
    }
}
