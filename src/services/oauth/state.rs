//! OAuth State 발급/검증
//!
//! CSRF (Cross-Site Request Forgery) 공격을 방지하기 위한 state 매개변수를
//! 서버 측 저장소 없이 자체 검증 가능한 형태로 발급합니다.
//!
//! ## State 형식
//!
//! ```text
//! "{timestamp}.{nonce}.{digest}"
//!
//! timestamp: 발급 시각 (Unix epoch 초)
//! nonce:     UUID v4 (요청별 고유값)
//! digest:    SHA-256("{timestamp}.{nonce}.{secret}") 16진수 문자열
//! ```
//!
//! 콜백에서 받은 state는 digest를 재계산하여 위조 여부를 확인하고,
//! timestamp로 세션 제한 시간 초과 여부를 확인합니다.
//! 저장소가 필요 없으므로 다중 인스턴스 환경에서도 동작합니다.

use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::OAuthConfig;
use crate::errors::errors::{AuthError, AuthResult};

/// OAuth state 발급/검증기
///
/// 시크릿과 세션 제한 시간은 `OAuthConfig`에서 가져오며,
/// state가 필요한 OAuth 클라이언트와 핸들러에 복제되어 주입됩니다.
#[derive(Clone)]
pub struct StateManager {
    secret: String,
    timeout_secs: i64,
}

impl StateManager {
    pub fn new(config: &OAuthConfig) -> Self {
        Self {
            secret: config.state_secret.clone(),
            timeout_secs: config.session_timeout_minutes * 60,
        }
    }

    /// 새 state 발급
    pub fn issue(&self) -> String {
        let timestamp = Utc::now().timestamp();
        let nonce = Uuid::new_v4().simple().to_string();
        let digest = self.digest(timestamp, &nonce);
        format!("{}.{}.{}", timestamp, nonce, digest)
    }

    /// 콜백에서 받은 state 검증
    ///
    /// # Returns
    /// * `Ok(())` - 위조되지 않았고 제한 시간 내인 state
    /// * `Err(AuthError::AuthenticationFailed)` - 형식 오류, 위조, 시간 초과
    pub fn verify(&self, state: &str) -> AuthResult<()> {
        let mut parts = state.splitn(3, '.');
        let (timestamp, nonce, digest) = match (parts.next(), parts.next(), parts.next()) {
            (Some(t), Some(n), Some(d)) => (t, n, d),
            _ => {
                return Err(AuthError::AuthenticationFailed(
                    "잘못된 형식의 OAuth state".to_string(),
                ));
            }
        };

        let timestamp: i64 = timestamp.parse().map_err(|_| {
            AuthError::AuthenticationFailed("잘못된 형식의 OAuth state".to_string())
        })?;

        if self.digest(timestamp, nonce) != digest {
            return Err(AuthError::AuthenticationFailed(
                "OAuth state 검증 실패".to_string(),
            ));
        }

        let age = Utc::now().timestamp() - timestamp;
        if age < 0 || age > self.timeout_secs {
            return Err(AuthError::AuthenticationFailed(
                "만료된 OAuth state".to_string(),
            ));
        }

        Ok(())
    }

    fn digest(&self, timestamp: i64, nonce: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("{}.{}.{}", timestamp, nonce, self.secret).as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> StateManager {
        StateManager {
            secret: "test-state-secret".to_string(),
            timeout_secs: 600,
        }
    }

    #[test]
    fn test_issued_state_verifies() {
        let mgr = manager();
        let state = mgr.issue();
        assert!(mgr.verify(&state).is_ok());
    }

    #[test]
    fn test_issued_states_are_unique() {
        let mgr = manager();
        assert_ne!(mgr.issue(), mgr.issue());
    }

    #[test]
    fn test_tampered_digest_rejected() {
        let mgr = manager();
        let state = mgr.issue();
        let mut tampered = state[..state.len() - 4].to_string();
        tampered.push_str("0000");
        assert!(mgr.verify(&tampered).is_err());
    }

    #[test]
    fn test_expired_state_rejected() {
        let mgr = manager();
        // 타임스탬프를 과거로 바꾸면 digest가 일치해도 만료 처리된다
        let old_ts = Utc::now().timestamp() - 3600;
        let nonce = "abc123";
        let state = format!("{}.{}.{}", old_ts, nonce, mgr.digest(old_ts, nonce));
        assert!(mgr.verify(&state).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = manager();
        let verifier = StateManager {
            secret: "other-secret".to_string(),
            timeout_secs: 600,
        };
        let state = issuer.issue();
        assert!(verifier.verify(&state).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let mgr = manager();
        assert!(mgr.verify("").is_err());
        assert!(mgr.verify("not-a-state").is_err());
        assert!(mgr.verify("12.34").is_err());
        assert!(mgr.verify("abc.def.ghi").is_err());
    }
}
