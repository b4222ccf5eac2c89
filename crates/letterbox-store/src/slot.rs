use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::{Error, Result};

/// Durable key-value slots holding whole serialized values.
pub trait SlotBackend {
    /// Read the value stored under `key`, or `None` when the slot is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the slot with `value`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Human-readable location of a slot, used in logs and guidance.
    fn location(&self, key: &str) -> String;
}

/// One `<key>.json` file per slot under a data directory.
#[derive(Debug, Clone)]
pub struct FileSlots {
    root: PathBuf,
}

impl FileSlots {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl SlotBackend for FileSlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        // Write beside the slot, then rename over it: readers see the old
        // snapshot or the new one, never a torn file.
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn location(&self, key: &str) -> String {
        match self.path_for(key) {
            Ok(path) => path.display().to_string(),
            Err(_) => format!("{} (invalid key '{}')", self.root.display(), key),
        }
    }
}

/// Process-local slots. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw value of a slot
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Place a raw value into a slot, bypassing serialization
    pub fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.slots.borrow_mut().insert(key.to_string(), value.into());
    }
}

impl SlotBackend for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.insert_raw(key, value);
        Ok(())
    }

    fn location(&self, key: &str) -> String {
        format!("memory:{}", key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_slot_absent_reads_none() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let slots = FileSlots::new(temp_dir.path());

        assert_eq!(slots.read("memoryLetters")?, None);
        Ok(())
    }

    #[test]
    fn test_file_slot_overwrites_previous_value() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let slots = FileSlots::new(temp_dir.path().join("nested"));

        slots.write("memoryLetters", "[1]")?;
        slots.write("memoryLetters", "[]")?;

        assert_eq!(slots.read("memoryLetters")?.as_deref(), Some("[]"));
        assert!(!temp_dir.path().join("nested/memoryLetters.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_file_slot_rejects_path_like_keys() {
        let slots = FileSlots::new("/tmp/letterbox");

        assert!(matches!(slots.path_for("../x"), Err(Error::InvalidKey(_))));
        assert!(matches!(slots.path_for(""), Err(Error::InvalidKey(_))));
        assert!(slots.path_for("memory_letters-2").is_ok());
    }

    #[test]
    fn test_memory_slots_share_state_between_clones() -> anyhow::Result<()> {
        let slots = MemorySlots::new();
        let handle = slots.clone();

        slots.write("k", "v")?;
        assert_eq!(handle.get("k").as_deref(), Some("v"));
        Ok(())
    }
}
