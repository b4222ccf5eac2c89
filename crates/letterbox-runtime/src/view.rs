use chrono::NaiveDate;
use letterbox_types::{DisplayMode, Letter, LetterId, Section};

/// Rendering surface driven by the [`Controller`](crate::Controller).
///
/// Implementations never mutate the repository or the store; every list
/// render re-derives from the letters passed in.
pub trait LetterView {
    /// Activate one section and its navigation marker
    fn show_section(&mut self, section: Section);

    /// Replace the gallery with one card per letter, in order
    fn render_list(&mut self, letters: &[Letter]);

    /// Open the detail overlay for one letter
    fn render_detail(&mut self, letter: &Letter);

    fn close_detail(&mut self);

    fn set_display_mode(&mut self, mode: DisplayMode);

    /// Show a notification. Dismissal is scheduled by the controller.
    fn show_transient_message(&mut self, text: &str);

    fn hide_transient_message(&mut self);

    /// Clear every form field and set the date field to `today`
    fn reset_form(&mut self, today: NaiveDate);
}

/// One recorded [`LetterView`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    ShowSection(Section),
    RenderList(Vec<LetterId>),
    RenderDetail(LetterId),
    CloseDetail,
    SetDisplayMode(DisplayMode),
    ShowMessage(String),
    HideMessage,
    ResetForm(NaiveDate),
}

/// Headless view that records calls and tracks what a screen would show.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    calls: Vec<ViewCall>,
    section: Option<Section>,
    listed: Vec<Letter>,
    detail: Option<Letter>,
    display_mode: DisplayMode,
    message: Option<String>,
    form_date: Option<NaiveDate>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[ViewCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn section(&self) -> Option<Section> {
        self.section
    }

    pub fn listed(&self) -> &[Letter] {
        &self.listed
    }

    pub fn detail(&self) -> Option<&Letter> {
        self.detail.as_ref()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn form_date(&self) -> Option<NaiveDate> {
        self.form_date
    }
}

impl LetterView for RecordingView {
    fn show_section(&mut self, section: Section) {
        self.section = Some(section);
        self.calls.push(ViewCall::ShowSection(section));
    }

    fn render_list(&mut self, letters: &[Letter]) {
        self.listed = letters.to_vec();
        self.calls
            .push(ViewCall::RenderList(letters.iter().map(|l| l.id).collect()));
    }

    fn render_detail(&mut self, letter: &Letter) {
        self.detail = Some(letter.clone());
        self.calls.push(ViewCall::RenderDetail(letter.id));
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.calls.push(ViewCall::CloseDetail);
    }

    fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
        self.calls.push(ViewCall::SetDisplayMode(mode));
    }

    fn show_transient_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
        self.calls.push(ViewCall::ShowMessage(text.to_string()));
    }

    fn hide_transient_message(&mut self) {
        self.message = None;
        self.calls.push(ViewCall::HideMessage);
    }

    fn reset_form(&mut self, today: NaiveDate) {
        self.form_date = Some(today);
        self.calls.push(ViewCall::ResetForm(today));
    }
}
