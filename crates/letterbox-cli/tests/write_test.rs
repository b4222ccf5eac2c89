use letterbox_testing::{TestWorld, assertions};

#[test]
fn test_write_then_list_newest_first() {
    let world = TestWorld::new();

    for title in ["First", "Second"] {
        let result = world
            .run(&[
                "write", "--title", title, "--from", "A", "--to", "B", "--message", "short",
                "--date", "2024-01-15",
            ])
            .expect("Failed to run write");
        assert!(result.success(), "stderr: {}", result.stderr());
        assert!(result.stdout().contains("Letter saved successfully!"));
    }

    let result = world
        .run(&["list", "--format", "json"])
        .expect("Failed to run list");
    assert!(result.success());

    let json = result.json().expect("Failed to parse JSON");
    assertions::assert_letter_count(&json, 2).unwrap();
    assertions::assert_letter_titles(&json, &["Second", "First"]).unwrap();
    assert_eq!(json["content"]["letters"][0]["preview"], "short");
    assert_eq!(json["content"]["letters"][0]["date"], "2024-01-15");
}

#[test]
fn test_write_json_result() {
    let world = TestWorld::new();

    let result = world
        .run(&[
            "--format", "json", "write", "--title", "Hello", "--from", "A", "--to", "B",
            "--message", "short", "--date", "2024-01-15",
        ])
        .expect("Failed to run write");
    assert!(result.success());

    let json = result.json().expect("Failed to parse JSON");
    assertions::assert_badge_level(&json, "success").unwrap();
    assert_eq!(json["badge"]["label"], "Letter saved successfully!");
    assert_eq!(json["content"]["letter"]["title"], "Hello");
    assert_eq!(json["content"]["total"], 1);

    let stored = world.stored_letters();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].sender, "A");
    assert_eq!(stored[0].recipient, "B");
}

#[test]
fn test_write_rejects_empty_field() {
    let world = TestWorld::new();

    let result = world
        .run(&[
            "write", "--title", "Hello", "--from", "", "--to", "B", "--message", "short",
        ])
        .expect("Failed to run write");

    assert_eq!(result.code(), Some(1));
    insta::assert_snapshot!(result.stderr().trim(), @"Error: Missing required field: sender");
    assert!(world.stored_letters().is_empty());
}

#[test]
fn test_write_rejects_bad_date() {
    let world = TestWorld::new();

    let result = world
        .run(&[
            "write", "--title", "Hello", "--from", "A", "--to", "B", "--message", "short",
            "--date", "2024-02-30",
        ])
        .expect("Failed to run write");

    assert_eq!(result.code(), Some(1));
    assert!(
        result
            .stderr()
            .contains("Invalid date '2024-02-30': expected YYYY-MM-DD")
    );
}

#[test]
fn test_write_reads_message_from_stdin() {
    let world = TestWorld::new();

    let result = world
        .run_with_stdin(
            &[
                "write", "--title", "Piped", "--from", "A", "--to", "B", "--message", "-",
            ],
            "Line one\nLine two\n",
        )
        .expect("Failed to run write");
    assert!(result.success(), "stderr: {}", result.stderr());

    let stored = world.stored_letters();
    assert_eq!(stored[0].message, "Line one\nLine two");
}

#[test]
fn test_slot_uses_browser_field_names() {
    let world = TestWorld::new();

    world
        .run(&[
            "write", "--title", "Hello", "--from", "A", "--to", "B", "--message", "short",
            "--date", "2024-01-15",
        ])
        .expect("Failed to run write");

    let raw = std::fs::read_to_string(world.slot_path()).expect("slot file exists");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let letter = &json[0];

    let mut keys: Vec<&str> = letter
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["createdAt", "date", "id", "message", "recipient", "sender", "title"]
    );
    assert_eq!(letter["date"], "2024-01-15");
    assert!(letter["id"].is_i64());
}
