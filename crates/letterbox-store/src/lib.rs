// Letter store: one key-value slot holding the whole collection as JSON.
// Every save is a full snapshot replace; nothing is appended or patched.

mod error;
mod slot;
mod store;

// Public API
pub use error::{Error, Result};
pub use slot::{FileSlots, MemorySlots, SlotBackend};
pub use store::{DEFAULT_STORAGE_KEY, Store};
