// NOTE: Runtime Layering
//
// UI event -> Controller -> Repository mutation -> Store.save -> LetterView refresh
//
// - Only the Controller talks to a LetterView.
// - Only the Store (letterbox-store) touches persistent storage.
// - Time is read through Clock so every transition runs under a manual clock in tests.

pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod repository;
pub mod samples;
pub mod timers;
pub mod view;
pub mod workspace;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, StorageConfig, UiConfig, resolve_workspace_path};
pub use controller::{
    CLEARED_MESSAGE, Controller, DELETE_ALL_PROMPT, SAVED_MESSAGE, UiEvent,
};
pub use error::{Error, Result};
pub use repository::Repository;
pub use samples::{sample_letters, seed_samples};
pub use timers::{DeferredAction, Timers};
pub use view::{LetterView, RecordingView, ViewCall};
pub use workspace::{InitOutcome, Workspace};
