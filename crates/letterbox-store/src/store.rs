use letterbox_types::Letter;

use crate::{Result, SlotBackend};

/// Slot key used by the original page's local storage
pub const DEFAULT_STORAGE_KEY: &str = "memoryLetters";

/// Persistence boundary for the letter collection.
///
/// The whole collection lives in one slot as a JSON array, newest first.
/// There is no version tag in the payload.
pub struct Store {
    backend: Box<dyn SlotBackend>,
    key: String,
}

impl Store {
    pub fn new(backend: impl SlotBackend + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn location(&self) -> String {
        self.backend.location(&self.key)
    }

    /// Load the persisted collection.
    ///
    /// An absent, unreadable or unparsable slot yields an empty collection.
    pub fn load(&self) -> Vec<Letter> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(slot = %self.location(), "no stored letters yet");
                return Vec::new();
            }
            Err(err) => {
                tracing::warn!(slot = %self.location(), error = %err, "failed to read letters");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Letter>>(&raw) {
            Ok(letters) => {
                tracing::debug!(count = letters.len(), "loaded letters");
                letters
            }
            Err(err) => {
                tracing::warn!(
                    slot = %self.location(),
                    error = %err,
                    "stored letters are malformed, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with a snapshot of `letters`.
    pub fn save(&self, letters: &[Letter]) -> Result<()> {
        let payload = serde_json::to_string(letters)?;
        self.backend.write(&self.key, &payload)?;
        tracing::debug!(count = letters.len(), slot = %self.location(), "saved letters");
        Ok(())
    }
}
