//! # Presentation Layer
//!
//! One-shot commands flow one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! The interactive screen lives in `tui/`: [`tui::TuiApp`] implements the
//! runtime's `LetterView` and `tui::ui` draws it with ratatui.
//!
//! ## Where does code go?
//!
//! * `view_models/`: serializable data only. JSON output is exactly these
//!   structs, so they carry raw values (dates, counts), never formatted text.
//! * `presenters/`: domain types to view models, plus the tips shown after
//!   a command.
//! * `views/`: `fmt::Display` layouts. Colors and date wording live here.
//! * `renderers/`: picks JSON or text and writes to stdout.
//! * `formatters/`: string helpers shared by views and the TUI.
//! * `tui/`: terminal state, widgets and the event loop.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod tui;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, DisplayOptions, Guidance, StatusBadge};
