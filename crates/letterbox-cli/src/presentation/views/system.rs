use std::fmt;

use super::bold;
use crate::presentation::view_models::{
    DemoViewModel, DisplayOptions, GuidanceViewModel, InitViewModel,
};

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    options: DisplayOptions,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{}\n",
            bold("letterbox - heartfelt letters, kept locally", self.options.enable_color)
        )?;
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        writeln!(f, "Letters stored: {}\n", self.data.letter_count)?;

        writeln!(f, "Quick commands:")?;
        writeln!(f, "  letterbox tui                    # Write and browse interactively")?;
        writeln!(f, "  letterbox write --title ... --from ... --to ... --message ...")?;
        writeln!(f, "  letterbox list                   # Browse your letters")?;
        writeln!(f, "  letterbox show <ID>              # Read one letter")?;
        writeln!(f, "  letterbox clear                  # Delete every letter")?;
        if self.data.letter_count == 0 {
            writeln!(f, "  letterbox demo                   # Load two sample letters")?;
        }
        writeln!(f, "\nFor more commands:")?;
        writeln!(f, "  letterbox --help")
    }
}

pub struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        if self.data.created {
            writeln!(f, "  Written to {}", self.data.config_path)?;
        } else {
            writeln!(f, "  Loaded from {}", self.data.config_path)?;
        }
        writeln!(f, "\nStorage:")?;
        writeln!(f, "  Letters live in {}", self.data.storage_location)?;
        writeln!(f, "  {} letter(s) stored", self.data.letter_count)
    }
}

pub struct DemoView<'a> {
    data: &'a DemoViewModel,
}

impl<'a> DemoView<'a> {
    pub fn new(data: &'a DemoViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DemoView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Letters in your letterbox: {}", self.data.total)
    }
}
