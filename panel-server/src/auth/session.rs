//! Session store
//!
//! Holds the bearer token, permission menu and role per signed-in user,
//! keyed by the token value carried in the `auth_token` cookie. Sessions are
//! persisted to a JSON file so a restart does not sign everyone out.
//!
//! There is no token refresh or expiry handling here: an expired upstream
//! token surfaces as a 401 from the remote API on the next proxied call,
//! which the shell answers by redirecting to login.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use thiserror::Error;

use shared::client::MenuModule;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A signed-in user's session
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Session {
    /// Bearer token issued by the remote API; also the cookie value
    pub token: String,
    /// Permission menu for the sidebar
    pub menu: Vec<MenuModule>,
    /// Role name
    pub role: String,
    pub logged_in_at: DateTime<Utc>,
}

/// Persisted file structure
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct SessionFile {
    sessions: HashMap<String, Session>,
}

/// Session store: in-memory map plus JSON file persistence
pub struct SessionStore {
    file_path: PathBuf,
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    /// Create an empty store persisting to `file_path`
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            sessions: DashMap::new(),
        }
    }

    /// Load the store from its file; a missing file yields an empty store
    pub fn load(file_path: impl Into<PathBuf>) -> Result<Self, SessionStoreError> {
        let file_path = file_path.into();

        let data = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str::<SessionFile>(&content)?
        } else {
            SessionFile::default()
        };

        let sessions = DashMap::new();
        for (token, session) in data.sessions {
            sessions.insert(token, session);
        }

        Ok(Self {
            file_path,
            sessions,
        })
    }

    /// Save the store to its file
    pub fn save(&self) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = SessionFile {
            sessions: self
                .sessions
                .iter()
                .map(|e| (e.key().clone(), e.value().clone()))
                .collect(),
        };

        let content = serde_json::to_string_pretty(&data)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Insert a session (after a successful login) and persist
    pub fn insert(&self, session: Session) -> Result<(), SessionStoreError> {
        self.sessions.insert(session.token.clone(), session);
        self.save()
    }

    /// Look up a session by its token
    pub fn get(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).map(|s| s.clone())
    }

    /// Remove a session (logout) and persist; returns whether it existed
    pub fn remove(&self, token: &str) -> Result<bool, SessionStoreError> {
        let existed = self.sessions.remove(token).is_some();
        if existed {
            self.save()?;
        }
        Ok(existed)
    }

    /// Drop all sessions and persist
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        self.sessions.clear();
        self.save()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            menu: vec![],
            role: "admin".to_string(),
            logged_in_at: Utc::now(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::load(dir.path().join("sessions.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn sessions_round_trip_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");

        let store = SessionStore::new(&path);
        store.insert(sample_session("tok-1")).unwrap();
        store.insert(sample_session("tok-2")).unwrap();

        let reloaded = SessionStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("tok-1").unwrap().role, "admin");
    }

    #[test]
    fn remove_persists_and_reports_existence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");

        let store = SessionStore::new(&path);
        store.insert(sample_session("tok-1")).unwrap();

        assert!(store.remove("tok-1").unwrap());
        assert!(!store.remove("tok-1").unwrap());

        let reloaded = SessionStore::load(&path).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn clear_empties_store_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");

        let store = SessionStore::new(&path);
        store.insert(sample_session("tok-1")).unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        assert!(SessionStore::load(&path).unwrap().is_empty());
    }
}
