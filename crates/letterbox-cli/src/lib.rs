// NOTE: letterbox Architecture
//
// Why one JSON slot (not a database)?
// - The collection is small and always read and written whole
// - A single snapshot file is trivially inspectable and portable
// - Trade-off: no partial updates; every save rewrites the file
//
// Why do the TUI and one-shot commands share the Repository?
// - The TUI drives the Controller state machine with a ratatui view
// - One-shot commands reuse the same Repository and Store directly
// - Both paths persist through the same snapshot format

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, Layout, LogLevel, OutputFormat};
pub use commands::run;
