//! 메모리 기반 저장소 구현
//!
//! 프로세스 메모리에 사용자/세션/블랙리스트를 보관합니다.
//! 재시작 시 모든 데이터가 사라지므로 개발/테스트 용도에 적합하며,
//! 운영 환경에서는 동일 트레이트를 구현한 외부 저장소로 교체합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::AuthStore;
use crate::domain::users::user::{User, UserUpdate};
use crate::errors::errors::AuthResult;

/// 인메모리 저장소
///
/// - **users**: 이메일 → 사용자 레코드
/// - **sessions**: access token → 이메일
/// - **blacklist**: 무효화된 토큰 → 등록 시각
///
/// 내부 맵은 `RwLock`으로 보호되며, 쓰기 연산은 단일 임계 구역에서
/// 수행되어 동일 키에 대한 경합에서도 일관된 결과를 보장합니다.
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    sessions: RwLock<HashMap<String, String>>,
    blacklist: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            blacklist: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthStore for MemoryStore {
    async fn get_user_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users.get(email).cloned())
    }

    async fn create_user(&self, user: User) -> AuthResult<User> {
        // 동일 이메일 동시 생성 시 먼저 들어간 레코드가 승리
        let mut users = self.users.write().unwrap();
        let record = users.entry(user.email.clone()).or_insert(user);
        Ok(record.clone())
    }

    async fn update_user(&self, email: &str, update: &UserUpdate) -> AuthResult<Option<User>> {
        let mut users = self.users.write().unwrap();
        match users.get_mut(email) {
            Some(user) => {
                update.apply_to(user);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn list_users(&self) -> AuthResult<Vec<User>> {
        let users = self.users.read().unwrap();
        Ok(users.values().cloned().collect())
    }

    async fn add_session(&self, token: &str, email: &str) -> AuthResult<()> {
        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(token.to_string(), email.to_string());
        Ok(())
    }

    async fn remove_session(&self, token: &str) -> AuthResult<bool> {
        let mut sessions = self.sessions.write().unwrap();
        Ok(sessions.remove(token).is_some())
    }

    async fn session_count(&self) -> AuthResult<usize> {
        let sessions = self.sessions.read().unwrap();
        Ok(sessions.len())
    }

    async fn is_blacklisted(&self, token: &str) -> AuthResult<bool> {
        let blacklist = self.blacklist.read().unwrap();
        Ok(blacklist.contains_key(token))
    }

    async fn add_to_blacklist(&self, token: &str) -> AuthResult<()> {
        let mut blacklist = self.blacklist.write().unwrap();
        blacklist.insert(token.to_string(), Utc::now());
        Ok(())
    }

    async fn prune_blacklist(&self, max_age: Duration) -> AuthResult<usize> {
        let cutoff = Utc::now() - max_age;
        let mut blacklist = self.blacklist.write().unwrap();
        let before = blacklist.len();
        blacklist.retain(|_, added_at| *added_at >= cutoff);
        Ok(before - blacklist.len())
    }
}
