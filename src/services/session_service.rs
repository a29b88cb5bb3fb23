// ============================================================================
// SESSION SERVICE - persists the logged-in user in localStorage
// ============================================================================

use crate::error::SessionError;
use crate::models::{SessionRecord, User};
use crate::utils::{load_raw_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_LOGGED_USER};

/// A session read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredSession {
    pub user: User,
    /// The stored record lacked an id and it was read from the token.
    pub id_was_derived: bool,
}

/// Parses a persisted record, completing a missing id from the token.
pub fn parse_stored(raw: &str) -> Result<RestoredSession, SessionError> {
    let record: SessionRecord =
        serde_json::from_str(raw).map_err(|e| SessionError::Record(e.to_string()))?;
    let id_was_derived = !record.has_id();
    let user = record.into_user()?;
    Ok(RestoredSession { user, id_was_derived })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    key: String,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(STORAGE_KEY_LOGGED_USER)
    }
}

impl SessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the persisted session. A corrupt record is dropped and treated
    /// as "not logged in"; it is never surfaced to the user.
    pub fn restore(&self) -> Option<User> {
        let raw = load_raw_from_storage(&self.key)?;
        match parse_stored(&raw) {
            Ok(restored) => {
                if restored.id_was_derived {
                    log::info!("🔑 Session id recovered from token, persisting it");
                    self.save(&restored.user);
                }
                log::info!("✅ Session restored: {}", restored.user.username);
                Some(restored.user)
            }
            Err(e) => {
                log::warn!("⚠️ Ignoring stored session: {}", e);
                self.clear();
                None
            }
        }
    }

    pub fn save(&self, user: &User) {
        if let Err(e) = save_to_storage(&self.key, user) {
            log::error!("❌ Could not persist session: {}", e);
        }
    }

    pub fn clear(&self) {
        remove_from_storage(&self.key);
    }
}
