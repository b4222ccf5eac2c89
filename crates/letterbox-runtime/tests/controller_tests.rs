use chrono::{NaiveDate, TimeZone, Utc};
use letterbox_runtime::*;
use letterbox_store::{DEFAULT_STORAGE_KEY, MemorySlots, SlotBackend, Store};
use letterbox_types::{DisplayMode, Letter, LetterInput, Section};

fn hello() -> LetterInput {
    LetterInput {
        title: "Hello".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        sender: "A".to_string(),
        recipient: "B".to_string(),
        message: "short".to_string(),
    }
}

fn titled(title: &str) -> LetterInput {
    LetterInput {
        title: title.to_string(),
        ..hello()
    }
}

struct Harness {
    slots: MemorySlots,
    clock: ManualClock,
    controller: Controller<RecordingView, ManualClock>,
}

fn harness() -> Harness {
    let slots = MemorySlots::new();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap());
    let repository = Repository::open(Store::new(slots.clone(), DEFAULT_STORAGE_KEY));
    let mut controller = Controller::new(
        repository,
        RecordingView::new(),
        clock.clone(),
        UiConfig::default(),
    );
    controller.start();

    Harness {
        slots,
        clock,
        controller,
    }
}

#[test]
fn test_start_shows_write_section_with_todays_date() {
    let h = harness();

    assert_eq!(h.controller.section(), Section::Write);
    assert_eq!(h.controller.display_mode(), DisplayMode::Grid);
    assert_eq!(h.controller.view().section(), Some(Section::Write));
    assert_eq!(
        h.controller.view().form_date(),
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );
}

#[test]
fn test_submissions_are_listed_newest_first() {
    let mut h = harness();

    for title in ["first", "second", "third", "fourth"] {
        h.controller.handle(UiEvent::Submit(titled(title)));
        h.clock.advance_millis(10);
    }

    let titles: Vec<_> = h
        .controller
        .repository()
        .all()
        .iter()
        .map(|l| l.title.as_str())
        .collect();
    assert_eq!(titles, vec!["fourth", "third", "second", "first"]);
}

#[test]
fn test_submit_scenario_switches_to_view_after_delay() {
    let mut h = harness();

    h.controller.handle(UiEvent::Submit(hello()));

    let repo = h.controller.repository();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.all()[0].message, "short");
    assert_eq!(h.controller.view().message(), Some(SAVED_MESSAGE));
    assert_eq!(h.controller.section(), Section::Write);

    h.clock.advance_millis(999);
    assert_eq!(h.controller.tick(), 0);
    assert_eq!(h.controller.section(), Section::Write);

    h.clock.advance_millis(1);
    assert_eq!(h.controller.tick(), 1);
    assert_eq!(h.controller.section(), Section::View);
    assert_eq!(h.controller.view().listed().len(), 1);
    assert_eq!(h.controller.view().listed()[0].title, "Hello");
}

#[test]
fn test_submit_resets_form_to_today() {
    let mut h = harness();
    h.clock.advance(std::time::Duration::from_secs(24 * 3600));
    h.controller.view_mut().clear_calls();

    h.controller.handle(UiEvent::Submit(hello()));

    assert!(
        h.controller
            .view()
            .calls()
            .contains(&ViewCall::ResetForm(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()))
    );
}

#[test]
fn test_notification_hides_after_three_seconds() {
    let mut h = harness();
    h.controller.handle(UiEvent::Submit(hello()));

    h.clock.advance_millis(2999);
    h.controller.tick();
    assert_eq!(h.controller.view().message(), Some(SAVED_MESSAGE));

    h.clock.advance_millis(1);
    h.controller.tick();
    assert_eq!(h.controller.view().message(), None);
}

#[test]
fn test_clear_form_leaves_repository_alone() {
    let mut h = harness();
    h.controller.handle(UiEvent::Submit(hello()));
    h.controller.view_mut().clear_calls();

    h.controller.handle(UiEvent::ClearForm);

    assert_eq!(h.controller.repository().len(), 1);
    assert_eq!(
        h.controller.view().calls(),
        &[ViewCall::ResetForm(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())]
    );
}

#[test]
fn test_confirmed_delete_all_empties_memory_and_store() {
    let mut h = harness();
    h.controller.handle(UiEvent::Submit(titled("one")));
    h.clock.advance_millis(5);
    h.controller.handle(UiEvent::Submit(titled("two")));
    assert_eq!(h.controller.repository().len(), 2);

    h.controller.handle(UiEvent::DeleteAll { confirmed: true });

    assert!(h.controller.repository().is_empty());
    assert!(h.controller.view().listed().is_empty());
    assert_eq!(h.controller.view().message(), Some(CLEARED_MESSAGE));
    assert_eq!(h.slots.get(DEFAULT_STORAGE_KEY).as_deref(), Some("[]"));

    let reopened = Repository::open(Store::new(h.slots.clone(), DEFAULT_STORAGE_KEY));
    assert!(reopened.is_empty());
}

#[test]
fn test_declined_delete_all_is_noop() {
    let mut h = harness();
    h.controller.handle(UiEvent::Submit(hello()));
    h.controller.view_mut().clear_calls();

    h.controller.handle(UiEvent::DeleteAll { confirmed: false });

    assert_eq!(h.controller.repository().len(), 1);
    assert!(h.controller.view().calls().is_empty());
}

#[test]
fn test_toggle_twice_restores_mode() {
    let mut h = harness();

    h.controller.handle(UiEvent::ToggleDisplayMode);
    assert_eq!(h.controller.display_mode(), DisplayMode::List);
    assert_eq!(h.controller.view().display_mode().toggle_label(), "Grid View");

    h.controller.handle(UiEvent::ToggleDisplayMode);
    assert_eq!(h.controller.display_mode(), DisplayMode::Grid);
    assert_eq!(h.controller.view().display_mode().toggle_label(), "List View");
}

#[test]
fn test_toggle_does_not_touch_order_or_store() {
    let mut h = harness();
    h.controller.handle(UiEvent::Submit(hello()));
    let before = h.slots.get(DEFAULT_STORAGE_KEY);

    h.controller.handle(UiEvent::ToggleDisplayMode);

    assert_eq!(h.slots.get(DEFAULT_STORAGE_KEY), before);
}

#[test]
fn test_navigate_to_view_renders_current_letters() {
    let mut h = harness();
    h.controller.handle(UiEvent::Submit(hello()));
    h.controller.view_mut().clear_calls();

    h.controller.handle(UiEvent::Navigate(Section::View));

    let id = h.controller.repository().all()[0].id;
    assert_eq!(
        h.controller.view().calls(),
        &[
            ViewCall::ShowSection(Section::View),
            ViewCall::RenderList(vec![id]),
        ]
    );

    h.controller.handle(UiEvent::Navigate(Section::Write));
    assert_eq!(h.controller.section(), Section::Write);
}

#[test]
fn test_detail_closes_on_outside_click_and_close_control() {
    let mut h = harness();
    h.controller.handle(UiEvent::Submit(hello()));

    h.controller.handle(UiEvent::OpenDetail(0));
    assert_eq!(
        h.controller.view().detail().map(|l| l.title.as_str()),
        Some("Hello")
    );

    h.controller.handle(UiEvent::OverlayClick {
        inside_content: true,
    });
    assert!(h.controller.view().detail().is_some());

    h.controller.handle(UiEvent::OverlayClick {
        inside_content: false,
    });
    assert!(h.controller.view().detail().is_none());

    h.controller.handle(UiEvent::OpenDetail(0));
    h.controller.handle(UiEvent::CloseDetail);
    assert!(h.controller.view().detail().is_none());
}

#[test]
fn test_open_detail_out_of_range_is_ignored() {
    let mut h = harness();
    h.controller.view_mut().clear_calls();

    h.controller.handle(UiEvent::OpenDetail(3));

    assert!(h.controller.view().calls().is_empty());
}

/// Serves whatever `MemorySlots` holds but refuses every write.
struct ReadOnlySlots(MemorySlots);

impl SlotBackend for ReadOnlySlots {
    fn read(&self, key: &str) -> letterbox_store::Result<Option<String>> {
        self.0.read(key)
    }

    fn write(&self, _key: &str, _value: &str) -> letterbox_store::Result<()> {
        Err(std::io::Error::other("read-only storage").into())
    }

    fn location(&self, key: &str) -> String {
        format!("readonly:{}", key)
    }
}

#[test]
fn test_failed_save_reports_and_stays_on_form() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap());
    let repository = Repository::open(Store::new(
        ReadOnlySlots(MemorySlots::new()),
        DEFAULT_STORAGE_KEY,
    ));
    let mut controller = Controller::new(
        repository,
        RecordingView::new(),
        clock.clone(),
        UiConfig::default(),
    );
    controller.start();

    controller.handle(UiEvent::Submit(hello()));

    assert!(controller.repository().is_empty());
    let message = controller.view().message().unwrap_or_default();
    assert!(message.starts_with("Could not save letters:"));

    clock.advance_millis(5000);
    controller.tick();
    assert_eq!(controller.section(), Section::Write);
}

#[test]
fn test_failed_delete_all_keeps_letters_and_reports() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap());
    let slots = MemorySlots::new();
    let seeded = vec![
        Letter::stamp(titled("two"), clock.now()),
        Letter::stamp(titled("one"), Utc.with_ymd_and_hms(2024, 1, 14, 9, 0, 0).unwrap()),
    ];
    Store::new(slots.clone(), DEFAULT_STORAGE_KEY)
        .save(&seeded)
        .unwrap();

    let repository = Repository::open(Store::new(
        ReadOnlySlots(slots.clone()),
        DEFAULT_STORAGE_KEY,
    ));
    let mut controller = Controller::new(
        repository,
        RecordingView::new(),
        clock.clone(),
        UiConfig::default(),
    );
    controller.start();
    controller.view_mut().clear_calls();

    controller.handle(UiEvent::DeleteAll { confirmed: true });

    assert_eq!(controller.repository().len(), 2);
    let message = controller.view().message().unwrap_or_default();
    assert!(message.starts_with("Could not save letters:"));
    assert!(
        !controller
            .view()
            .calls()
            .iter()
            .any(|call| matches!(call, ViewCall::RenderList(_)))
    );

    let reopened = Repository::open(Store::new(slots, DEFAULT_STORAGE_KEY));
    assert_eq!(reopened.len(), 2);
}
