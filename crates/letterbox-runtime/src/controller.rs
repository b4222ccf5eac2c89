use letterbox_types::{DisplayMode, LetterInput, Section};

use crate::{Clock, DeferredAction, LetterView, Repository, SystemClock, Timers, UiConfig};

pub const SAVED_MESSAGE: &str = "Letter saved successfully!";
pub const CLEARED_MESSAGE: &str = "All letters have been cleared.";
pub const DELETE_ALL_PROMPT: &str =
    "Are you sure you want to delete all your letters? This action cannot be undone.";

/// Discrete user interactions surfaced by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Navigation control for a section
    Navigate(Section),
    /// Form submission that already passed required-field validation
    Submit(LetterInput),
    ClearForm,
    ToggleDisplayMode,
    /// Delete-all control; `confirmed` carries the user's answer to
    /// [`DELETE_ALL_PROMPT`]
    DeleteAll { confirmed: bool },
    /// Card at this position of the rendered list
    OpenDetail(usize),
    /// Explicit close control of the overlay
    CloseDetail,
    /// Click anywhere on the overlay
    OverlayClick { inside_content: bool },
}

/// Two-axis state machine wiring UI events to repository mutations and
/// view refreshes.
///
/// Section: `Write | View`, initial `Write`.
/// Display mode: `Grid | List`, initial `Grid`, never persisted.
pub struct Controller<V: LetterView, C: Clock = SystemClock> {
    repository: Repository,
    view: V,
    clock: C,
    timers: Timers,
    ui: UiConfig,
    section: Section,
    display_mode: DisplayMode,
}

impl<V: LetterView, C: Clock> Controller<V, C> {
    pub fn new(repository: Repository, view: V, clock: C, ui: UiConfig) -> Self {
        Self {
            repository,
            view,
            clock,
            timers: Timers::new(),
            ui,
            section: Section::default(),
            display_mode: DisplayMode::default(),
        }
    }

    /// Initial paint: empty form dated today, write section, gallery.
    pub fn start(&mut self) {
        self.view.reset_form(self.clock.today());
        self.view.set_display_mode(self.display_mode);
        self.show_section(Section::Write);
        self.view.render_list(self.repository.all());
    }

    pub fn handle(&mut self, event: UiEvent) {
        tracing::debug!(?event, section = %self.section, "ui event");

        match event {
            UiEvent::Navigate(section) => self.show_section(section),
            UiEvent::Submit(input) => self.submit(input),
            UiEvent::ClearForm => self.view.reset_form(self.clock.today()),
            UiEvent::ToggleDisplayMode => {
                self.display_mode = self.display_mode.toggled();
                self.view.set_display_mode(self.display_mode);
            }
            UiEvent::DeleteAll { confirmed } => self.delete_all(confirmed),
            UiEvent::OpenDetail(index) => {
                if let Some(letter) = self.repository.all().get(index) {
                    self.view.render_detail(letter);
                }
            }
            UiEvent::CloseDetail => self.view.close_detail(),
            UiEvent::OverlayClick { inside_content } => {
                if !inside_content {
                    self.view.close_detail();
                }
            }
        }
    }

    /// Run every deferred action whose deadline has passed.
    /// Returns how many ran.
    pub fn tick(&mut self) -> usize {
        let due = self.timers.take_due(self.clock.instant());
        let count = due.len();

        for action in due {
            match action {
                DeferredAction::HideNotification => self.view.hide_transient_message(),
                DeferredAction::ShowSection(section) => self.show_section(section),
            }
        }

        count
    }

    fn submit(&mut self, input: LetterInput) {
        match self.repository.insert_front_at(input, self.clock.now()) {
            Ok(_) => {
                self.view.reset_form(self.clock.today());
                self.notify(SAVED_MESSAGE);
                self.timers.schedule(
                    self.clock.instant(),
                    self.ui.view_switch_delay(),
                    DeferredAction::ShowSection(Section::View),
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save letter");
                self.notify(&format!("Could not save letters: {}", err));
            }
        }
    }

    fn delete_all(&mut self, confirmed: bool) {
        if !confirmed {
            tracing::debug!("delete-all declined");
            return;
        }

        match self.repository.clear_all() {
            Ok(()) => {
                self.view.render_list(self.repository.all());
                self.notify(CLEARED_MESSAGE);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to clear letters");
                self.notify(&format!("Could not save letters: {}", err));
            }
        }
    }

    fn show_section(&mut self, section: Section) {
        self.section = section;
        self.view.show_section(section);

        if section == Section::View {
            self.view.render_list(self.repository.all());
        }
    }

    fn notify(&mut self, text: &str) {
        self.view.show_transient_message(text);
        self.timers.schedule(
            self.clock.instant(),
            self.ui.notification_timeout(),
            DeferredAction::HideNotification,
        );
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }
}
