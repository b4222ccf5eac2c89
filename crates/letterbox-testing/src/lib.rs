//! Testing infrastructure for letterbox integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `fixtures`: letters built for tests and placed into a slot file
//! - `assertions`: checks on `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
