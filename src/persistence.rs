//! State Persistence
//!
//! The whole store is saved as one JSON blob under a fixed key:
//! `{"state": <AppState>, "version": <u32>}`.

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};
use crate::store::AppState;

/// Save capability injected into the controller
pub trait Persistence {
    /// Previously saved state, `None` when nothing was saved yet
    fn load(&self) -> PortalResult<Option<AppState>>;
    fn save(&self, state: &AppState) -> PortalResult<()>;
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a AppState,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    state: AppState,
    #[serde(default)]
    version: u32,
}

fn encode(state: &AppState, version: u32) -> PortalResult<String> {
    Ok(serde_json::to_string(&EnvelopeRef { state, version })?)
}

fn decode(raw: &str, version: u32) -> PortalResult<AppState> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    if envelope.version != version {
        return Err(PortalError::Serialization(format!(
            "unsupported state version {} (expected {})",
            envelope.version, version
        )));
    }
    Ok(envelope.state)
}

// ========================
// Browser Local Storage
// ========================

pub struct LocalStoragePersistence {
    key: String,
    version: u32,
}

impl LocalStoragePersistence {
    pub fn new(key: impl Into<String>, version: u32) -> Self {
        Self { key: key.into(), version }
    }

    fn storage(&self) -> PortalResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| PortalError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| PortalError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| PortalError::Storage("local storage unavailable".to_string()))
    }
}

impl Persistence for LocalStoragePersistence {
    fn load(&self) -> PortalResult<Option<AppState>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| PortalError::Storage(format!("{:?}", e)))?;
        raw.map(|r| decode(&r, self.version)).transpose()
    }

    fn save(&self, state: &AppState) -> PortalResult<()> {
        let raw = encode(state, self.version)?;
        self.storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| PortalError::Storage(format!("{:?}", e)))
    }
}

// ========================
// In-Memory (tests)
// ========================

/// Keeps the encoded blob in memory; clones share the same slot
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryPersistence {
    slot: std::rc::Rc<std::cell::RefCell<Option<String>>>,
    fail_saves: bool,
}

#[cfg(test)]
impl MemoryPersistence {
    pub fn with_raw(raw: &str) -> Self {
        let p = Self::default();
        *p.slot.borrow_mut() = Some(raw.to_string());
        p
    }

    /// Every save fails, loads still work
    pub fn failing() -> Self {
        Self { fail_saves: true, ..Self::default() }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

#[cfg(test)]
impl Persistence for MemoryPersistence {
    fn load(&self) -> PortalResult<Option<AppState>> {
        self.slot.borrow().as_deref().map(|r| decode(r, 0)).transpose()
    }

    fn save(&self, state: &AppState) -> PortalResult<()> {
        if self.fail_saves {
            return Err(PortalError::Storage("quota exceeded".to_string()));
        }
        *self.slot.borrow_mut() = Some(encode(state, 0)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Nationality, User};
    use chrono::{TimeZone, Utc};

    fn signed_in_state() -> AppState {
        let mut state = AppState::seeded();
        state.user = Some(User {
            id: "u1".to_string(),
            email: "x@nuigalway.ie".to_string(),
            name: "Sean".to_string(),
            nationality: Nationality::NonEu,
            degree: "LLB Law".to_string(),
            avatar: None,
            created_at: Utc.with_ymd_and_hms(2025, 9, 1, 8, 30, 0).unwrap(),
        });
        state.is_authenticated = true;
        state
    }

    #[test]
    fn test_round_trip_keeps_timestamps() {
        let state = signed_in_state();
        let persistence = MemoryPersistence::default();
        persistence.save(&state).unwrap();

        let loaded = persistence.load().unwrap().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(
            loaded.user.unwrap().created_at,
            Utc.with_ymd_and_hms(2025, 9, 1, 8, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_envelope_layout() {
        let raw = encode(&AppState::default(), 0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["isAuthenticated"], false);
        assert!(value["state"]["customTasks"].is_array());
        assert!(value["state"]["comments"].is_array());
    }

    #[test]
    fn test_record_fields_are_camel_case() {
        let raw = encode(&signed_in_state(), 0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let user = &value["state"]["user"];
        assert_eq!(user["nationality"], "non-eu");
        assert!(user["createdAt"].is_string());
        assert!(user.get("created_at").is_none());

        let comment = &value["state"]["comments"][0];
        assert!(comment["userName"].is_string());
        assert!(comment["createdAt"].is_string());
        assert!(value["state"]["discussions"][0]["replies"][0]["userId"].is_string());
    }

    #[test]
    fn test_empty_slot_loads_none() {
        assert!(MemoryPersistence::default().load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_blob_is_error() {
        let persistence = MemoryPersistence::with_raw("{not json");
        assert!(matches!(persistence.load(), Err(PortalError::Serialization(_))));
    }

    #[test]
    fn test_version_mismatch_is_error() {
        let raw = encode(&AppState::default(), 0)
            .unwrap()
            .replace("\"version\":0", "\"version\":7");
        assert!(matches!(decode(&raw, 0), Err(PortalError::Serialization(_))));
    }
}
