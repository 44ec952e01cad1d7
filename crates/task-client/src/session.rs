//! Session Store
//!
//! Persisted tokens and profile behind a key-value backend. In the browser
//! the backend is `localStorage`; tests use an in-memory map.

use crate::models::{Session, TokenPair, User};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_DATA_KEY: &str = "user_data";

/// Minimal string storage the session is persisted in
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Session lifecycle: `init` on login, `read` on protected mounts, `clear` on
/// logout or expiry
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a freshly issued token pair and profile
    pub fn init(&self, tokens: &TokenPair, user: &User) -> Session {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access);
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh);
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_DATA_KEY, &json),
            Err(e) => log::error!("[SESSION] Failed to serialize user: {}", e),
        }
        Session {
            access_token: tokens.access.clone(),
            refresh_token: Some(tokens.refresh.clone()).filter(|t| !t.is_empty()),
            user: Some(user.clone()),
        }
    }

    /// Current session, `None` when no access token is stored
    pub fn read(&self) -> Option<Session> {
        let access_token = self.access_token()?;
        let refresh_token = self.storage.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self.storage.get(USER_DATA_KEY).and_then(|raw| {
            serde_json::from_str::<User>(&raw)
                .map_err(|e| log::warn!("[SESSION] Ignoring unreadable user_data: {}", e))
                .ok()
        });
        Some(Session {
            access_token,
            refresh_token,
            user,
        })
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_DATA_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    fn tokens() -> TokenPair {
        TokenPair {
            access: "acc".to_string(),
            refresh: "ref".to_string(),
        }
    }

    #[test]
    fn test_init_read_clear() {
        let store = SessionStore::new(MemoryStore::default());
        assert!(store.read().is_none());

        let user = User { username: "alice".to_string() };
        let created = store.init(&tokens(), &user);
        assert_eq!(store.read(), Some(created.clone()));
        assert_eq!(created.user.unwrap().username, "alice");

        store.clear();
        assert!(store.read().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_token_without_profile_is_still_a_session() {
        let storage = MemoryStore::default();
        storage.set(ACCESS_TOKEN_KEY, "acc");
        storage.set(USER_DATA_KEY, "{not json");
        let store = SessionStore::new(storage);

        let session = store.read().unwrap();
        assert_eq!(session.access_token, "acc");
        assert!(session.refresh_token.is_none());
        assert!(session.user.is_none());
    }
}
