use letterbox_runtime::InitOutcome;

use crate::presentation::view_models::{
    CommandResultViewModel, DemoViewModel, Guidance, GuidanceViewModel, InitViewModel,
    StatusBadge,
};

pub fn present_guidance(
    data_dir: String,
    initialized: bool,
    letter_count: usize,
) -> CommandResultViewModel<GuidanceViewModel> {
    let mut result = CommandResultViewModel::new(GuidanceViewModel {
        data_dir,
        initialized,
        letter_count,
    });

    if !initialized {
        result = result.with_suggestion(
            Guidance::new("Set up the data directory").with_command("letterbox init"),
        );
    }

    result
}

pub fn present_init(
    outcome: &InitOutcome,
    data_dir: String,
    storage_location: String,
    letter_count: usize,
) -> CommandResultViewModel<InitViewModel> {
    let (config_path, created) = match outcome {
        InitOutcome::Created { config_path } => (config_path, true),
        InitOutcome::AlreadyInitialized { config_path } => (config_path, false),
    };

    let badge = if created {
        StatusBadge::success("Letterbox initialized")
    } else {
        StatusBadge::info("Letterbox was already initialized")
    };

    CommandResultViewModel::new(InitViewModel {
        data_dir,
        config_path: config_path.display().to_string(),
        storage_location,
        created,
        letter_count,
    })
    .with_badge(badge)
    .with_suggestion(Guidance::new("Open the letterbox").with_command("letterbox tui"))
}

pub fn present_demo(seeded: bool, total: usize) -> CommandResultViewModel<DemoViewModel> {
    let result = CommandResultViewModel::new(DemoViewModel { seeded, total });

    if seeded {
        result
            .with_badge(StatusBadge::success("Sample letters added"))
            .with_suggestion(Guidance::new("See them").with_command("letterbox list"))
    } else {
        result
            .with_badge(StatusBadge::info("Letters already exist; samples not added"))
    }
}
