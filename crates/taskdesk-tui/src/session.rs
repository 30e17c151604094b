/*
[INPUT]:  Session token captured at login
[OUTPUT]: JSON session file persisted between runs
[POS]:    Session persistence for the portal binary
[UPDATE]: When the stored session schema changes
*/

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session data persisted between runs.
///
/// The base URL is stored alongside the token so a session is never
/// replayed against a different backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub base_url: String,
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(access_token: String, base_url: String) -> Self {
        Self {
            access_token,
            base_url,
            saved_at: Utc::now(),
        }
    }
}

/// JSON-file store for the portal session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `<config dir>/taskdesk/session.json`
    pub fn default_store() -> Self {
        let base_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base_dir.join("taskdesk").join("session.json"))
    }

    /// Load the stored session; a missing or unreadable file is treated
    /// as signed out.
    pub fn load(&self) -> Option<StoredSession> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("create session directory")?;
        }
        let content = serde_json::to_string_pretty(session).context("serialize session")?;
        fs::write(&self.path, content).context("write session file")?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).context("remove session file")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SessionStore {
        let mut path = std::env::temp_dir();
        path.push(format!("taskdesk-test-{}-{}", std::process::id(), name));
        path.push("session.json");
        SessionStore::new(path)
    }

    #[test]
    fn save_load_clear_roundtrip() {
        let store = temp_store("roundtrip");
        assert!(store.load().is_none());

        let session = StoredSession::new(
            "tok-1".to_string(),
            "http://localhost:3000".to_string(),
        );
        store.save(&session).unwrap();

        let loaded = store.load().expect("session should load");
        assert_eq!(loaded.access_token, "tok-1");
        assert_eq!(loaded.base_url, "http://localhost:3000");

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_without_file_is_a_no_op() {
        let store = temp_store("clear-missing");
        store.clear().unwrap();
    }
}
