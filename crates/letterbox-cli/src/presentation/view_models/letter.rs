use chrono::{DateTime, NaiveDate, Utc};
use letterbox_types::DisplayMode;
use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// One gallery card
#[derive(Debug, Clone, Serialize)]
pub struct LetterCardViewModel {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    /// Calendar days between `date` and today (negative for future dates)
    pub age_days: i64,
    pub preview: String,
    pub truncated: bool,
    pub sender: String,
    pub recipient: String,
}

#[derive(Debug, Serialize)]
pub struct LetterListViewModel {
    pub layout: DisplayMode,
    pub toggle_label: String,
    pub total: usize,
    pub letters: Vec<LetterCardViewModel>,
}

/// Full letter as shown in the detail overlay
#[derive(Debug, Clone, Serialize)]
pub struct LetterDetailViewModel {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub message: String,
    pub sender: String,
    pub recipient: String,
    #[serde(with = "letterbox_types::iso8601_millis")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct LetterSavedViewModel {
    pub letter: LetterCardViewModel,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct LettersClearedViewModel {
    pub confirmed: bool,
    pub removed: usize,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for LetterListViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::letter::LetterListView;
        Box::new(LetterListView::new(self, options))
    }
}

impl CreateView for LetterDetailViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::letter::LetterDetailView;
        Box::new(LetterDetailView::new(self, options))
    }
}

impl CreateView for LetterSavedViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::letter::LetterSavedView;
        Box::new(LetterSavedView::new(self, options))
    }
}

impl CreateView for LettersClearedViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::letter::LettersClearedView;
        Box::new(LettersClearedView::new(self))
    }
}
