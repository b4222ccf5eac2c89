use letterbox_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_guidance_without_command() {
    let world = TestWorld::new();

    let result = world.run(&[]).expect("Failed to run letterbox");
    assert!(result.success());
    assert!(result.stdout().contains("Letters stored: 0"));
    assert!(result.stdout().contains("letterbox tui"));
    assert!(result.stdout().contains("letterbox init"));
}

#[test]
fn test_init_writes_default_config_once() {
    let world = TestWorld::new();

    let first = world.run(&["init"]).expect("Failed to run init");
    assert!(first.success(), "stderr: {}", first.stderr());
    assert!(first.stdout().contains("Letterbox initialized"));

    let config = std::fs::read_to_string(world.data_dir().join("config.toml")).unwrap();
    assert!(config.contains("key = \"memoryLetters\""));
    assert!(config.contains("notification_ms = 3000"));
    assert!(config.contains("view_switch_delay_ms = 1000"));

    let second = world.run(&["init"]).expect("Failed to run init");
    assert!(second.success());
    assert!(second.stdout().contains("already initialized"));
}

#[test]
fn test_custom_storage_key() {
    let world = TestWorld::new();
    std::fs::create_dir_all(world.data_dir()).unwrap();
    std::fs::write(
        world.data_dir().join("config.toml"),
        "[storage]\nkey = \"otherLetters\"\n",
    )
    .unwrap();

    let result = world
        .run(&[
            "write", "--title", "Hello", "--from", "A", "--to", "B", "--message", "short",
        ])
        .expect("Failed to run write");
    assert!(result.success(), "stderr: {}", result.stderr());

    assert!(world.data_dir().join("otherLetters.json").exists());
    assert!(!world.slot_path().exists());
}

#[test]
fn test_demo_seeds_only_when_empty() {
    let world = TestWorld::new();

    let first = world
        .run(&["demo", "--format", "json"])
        .expect("Failed to run demo");
    let json = first.json().expect("Failed to parse JSON");
    assertions::assert_badge_level(&json, "success").unwrap();
    assert_eq!(json["content"]["seeded"], true);
    assert_eq!(json["content"]["total"], 2);

    let list = world
        .run(&["list", "--format", "json"])
        .expect("Failed to run list");
    let json = list.json().expect("Failed to parse JSON");
    assertions::assert_letter_titles(
        &json,
        &["My First Memory Letter", "A Letter to My Future Self"],
    )
    .unwrap();

    let second = world
        .run(&["demo", "--format", "json"])
        .expect("Failed to run demo");
    let json = second.json().expect("Failed to parse JSON");
    assertions::assert_badge_level(&json, "info").unwrap();
    assert_eq!(json["content"]["seeded"], false);
    assert_eq!(world.stored_letters().len(), 2);
}

#[test]
fn test_demo_keeps_existing_letters() {
    let world = TestWorld::new().with_letters(&fixtures::two_letters());

    let result = world.run(&["demo"]).expect("Failed to run demo");
    assert!(result.success());
    assert_eq!(world.stored_letters()[0].title, "Thank you");
}

#[test]
fn test_tui_requires_terminal() {
    let world = TestWorld::new();

    let result = world.run(&["tui"]).expect("Failed to run tui");
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("needs an interactive terminal"));
}
