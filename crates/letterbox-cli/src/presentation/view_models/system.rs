use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

/// Shown when `letterbox` runs without a subcommand
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub initialized: bool,
    pub letter_count: usize,
}

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub storage_location: String,
    pub created: bool,
    pub letter_count: usize,
}

#[derive(Debug, Serialize)]
pub struct DemoViewModel {
    pub seeded: bool,
    pub total: usize,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::GuidanceView;
        Box::new(GuidanceView::new(self, options))
    }
}

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::InitView;
        Box::new(InitView::new(self))
    }
}

impl CreateView for DemoViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::DemoView;
        Box::new(DemoView::new(self))
    }
}
