use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level UI section. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Write,
    View,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Write, Section::View];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Write => "Write Letter",
            Section::View => "My Letters",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Write => write!(f, "write"),
            Section::View => write!(f, "view"),
        }
    }
}

/// Gallery layout. Cosmetic only: ordering and content never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Grid => DisplayMode::List,
            DisplayMode::List => DisplayMode::Grid,
        }
    }

    /// Label of the toggle control: it names the mode a press switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            DisplayMode::Grid => "List View",
            DisplayMode::List => "Grid View",
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        match self {
            DisplayMode::Grid => "☰",
            DisplayMode::List => "▦",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Grid => write!(f, "grid"),
            DisplayMode::List => write!(f, "list"),
        }
    }
}
