use chrono::NaiveDate;
use letterbox_runtime::LetterView;
use letterbox_types::{DisplayMode, Letter, Section};
use ratatui::layout::{Position, Rect};

use super::form::FormState;

/// Screen regions recorded while drawing, used to route mouse clicks.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
    pub nav: Vec<(Section, Rect)>,
    pub cards: Vec<(usize, Rect)>,
    pub overlay_content: Option<Rect>,
    pub overlay_close: Option<Rect>,
}

/// Where a left click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickTarget {
    Nav(Section),
    Card(usize),
    Overlay { inside_content: bool },
    CloseControl,
    Nothing,
}

/// Everything the letterbox screen shows.
///
/// The controller drives it through [`LetterView`]; key handling only
/// touches the UI-local parts (form buffers, selection, scroll, the
/// pending confirmation).
#[derive(Debug, Default)]
pub struct TuiApp {
    pub(crate) section: Section,
    pub(crate) display_mode: DisplayMode,
    pub(crate) letters: Vec<Letter>,
    pub(crate) detail: Option<Letter>,
    pub(crate) detail_scroll: u16,
    pub(crate) notification: Option<String>,
    pub(crate) form: FormState,
    pub(crate) selected: usize,
    pub(crate) columns: usize,
    pub(crate) confirm_delete: bool,
    pub(crate) areas: HitAreas,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            columns: 1,
            ..Self::default()
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn detail(&self) -> Option<&Letter> {
        self.detail.as_ref()
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn select_next(&mut self, step: usize) {
        if !self.letters.is_empty() {
            self.selected = (self.selected + step).min(self.letters.len() - 1);
        }
    }

    pub(crate) fn select_previous(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    /// Rows move by a whole grid line; list mode has one column.
    pub(crate) fn row_step(&self) -> usize {
        match self.display_mode {
            DisplayMode::Grid => self.columns.max(1),
            DisplayMode::List => 1,
        }
    }

    pub(crate) fn click_target(&self, column: u16, row: u16) -> ClickTarget {
        let position = Position::new(column, row);

        if self.detail.is_some() {
            if self
                .areas
                .overlay_close
                .is_some_and(|area| area.contains(position))
            {
                return ClickTarget::CloseControl;
            }

            let inside_content = self
                .areas
                .overlay_content
                .is_some_and(|area| area.contains(position));
            return ClickTarget::Overlay { inside_content };
        }

        if let Some((section, _)) = self
            .areas
            .nav
            .iter()
            .find(|(_, area)| area.contains(position))
        {
            return ClickTarget::Nav(*section);
        }

        if self.section == Section::View
            && let Some((index, _)) = self
                .areas
                .cards
                .iter()
                .find(|(_, area)| area.contains(position))
        {
            return ClickTarget::Card(*index);
        }

        ClickTarget::Nothing
    }
}

impl LetterView for TuiApp {
    fn show_section(&mut self, section: Section) {
        self.section = section;
    }

    fn render_list(&mut self, letters: &[Letter]) {
        self.letters = letters.to_vec();
        self.selected = self.selected.min(self.letters.len().saturating_sub(1));
    }

    fn render_detail(&mut self, letter: &Letter) {
        self.detail = Some(letter.clone());
        self.detail_scroll = 0;
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.areas.overlay_content = None;
        self.areas.overlay_close = None;
    }

    fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    fn show_transient_message(&mut self, text: &str) {
        self.notification = Some(text.to_string());
    }

    fn hide_transient_message(&mut self) {
        self.notification = None;
    }

    fn reset_form(&mut self, today: NaiveDate) {
        self.form.reset(today);
    }
}
