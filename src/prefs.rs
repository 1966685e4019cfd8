//! Which swatch bucket feeds each theme role, remembered across sessions.

use serde::{Deserialize, Serialize};

use crate::storage::{KvStore, StorageError};
use crate::swatch::SwatchName;

pub const PREFERENCE_KEY: &str = "colorPreference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub light_theme_source: SwatchName,
    pub dark_theme_source: SwatchName,
}

impl Default for UserPreference {
    fn default() -> Self {
        Self {
            light_theme_source: SwatchName::LightVibrant,
            dark_theme_source: SwatchName::Muted,
        }
    }
}

/// Read the stored preference, falling back to the default.
///
/// A missing entry is the normal first-run case. Anything unreadable is
/// logged and replaced by the default; the caller never sees an error.
pub fn load(store: &dyn KvStore) -> UserPreference {
    let raw = match store.get(PREFERENCE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return UserPreference::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read color preference, using default");
            return UserPreference::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(pref) => pref,
        Err(e) => {
            tracing::warn!(error = %e, raw = %raw, "stored color preference is corrupt, using default");
            UserPreference::default()
        }
    }
}

pub fn save(store: &dyn KvStore, pref: &UserPreference) -> Result<(), StorageError> {
    let json = serde_json::to_string(pref)?;
    store.set(PREFERENCE_KEY, &json)?;
    tracing::debug!(
        light = %pref.light_theme_source,
        dark = %pref.dark_theme_source,
        "saved color preference"
    );
    Ok(())
}
