use chrono::{NaiveDate, TimeZone, Utc};
use letterbox_types::*;

#[test]
fn test_letter_serializes_with_original_keys() -> anyhow::Result<()> {
    let letter = Letter {
        id: LetterId::new(1_705_314_600_000),
        title: "My First Memory Letter".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        sender: "Sarah".to_string(),
        recipient: "Mom".to_string(),
        message: "Dear Mom".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
    };

    let value = serde_json::to_value(&letter)?;
    let object = value.as_object().expect("letter should be a JSON object");

    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["createdAt", "date", "id", "message", "recipient", "sender", "title"]
    );
    assert_eq!(value["id"], 1_705_314_600_000_i64);
    assert_eq!(value["date"], "2024-01-15");
    assert_eq!(value["createdAt"], "2024-01-15T10:30:00.000Z");

    Ok(())
}

#[test]
fn test_letter_parses_browser_written_record() -> anyhow::Result<()> {
    let raw = r#"{
        "id": 1705314600000,
        "title": "A Letter to My Future Self",
        "date": "2024-01-10",
        "sender": "Alex",
        "recipient": "Future Alex",
        "message": "Dear Future Alex",
        "createdAt": "2024-01-10T14:20:00.000Z"
    }"#;

    let letter: Letter = serde_json::from_str(raw)?;

    assert_eq!(letter.id, LetterId::new(1_705_314_600_000));
    assert_eq!(letter.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    assert_eq!(
        letter.created_at,
        Utc.with_ymd_and_hms(2024, 1, 10, 14, 20, 0).unwrap()
    );

    Ok(())
}

#[test]
fn test_created_at_keeps_millisecond_precision() -> anyhow::Result<()> {
    let at = Utc.timestamp_millis_opt(1_705_314_600_987).unwrap();
    let letter = Letter::stamp(
        LetterInput {
            title: "t".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            sender: "s".to_string(),
            recipient: "r".to_string(),
            message: "m".to_string(),
        },
        at,
    );

    let json = serde_json::to_string(&letter)?;
    assert!(json.contains("\"createdAt\":\"2024-01-15T10:30:00.987Z\""));

    let back: Letter = serde_json::from_str(&json)?;
    assert_eq!(back, letter);

    Ok(())
}
