//! Assertions on `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a `list` result holds `expected` letters.
pub fn assert_letter_count(json: &Value, expected: usize) -> Result<()> {
    let letters = json["content"]["letters"]
        .as_array()
        .context("Expected 'content.letters' array in JSON")?;

    if letters.len() != expected {
        anyhow::bail!("Expected {} letters, got {}", expected, letters.len());
    }

    Ok(())
}

/// Assert the titles of a `list` result, in order.
pub fn assert_letter_titles(json: &Value, expected: &[&str]) -> Result<()> {
    let letters = json["content"]["letters"]
        .as_array()
        .context("Expected 'content.letters' array in JSON")?;

    let titles: Vec<&str> = letters
        .iter()
        .filter_map(|letter| letter["title"].as_str())
        .collect();

    if titles != expected {
        anyhow::bail!("Expected titles {:?}, got {:?}", expected, titles);
    }

    Ok(())
}

/// Assert the badge level of any command result.
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_letter_count() {
        let json = json!({
            "content": {
                "letters": [
                    {"title": "a"},
                    {"title": "b"}
                ]
            }
        });

        assert!(assert_letter_count(&json, 2).is_ok());
        assert!(assert_letter_count(&json, 1).is_err());
        assert!(assert_letter_titles(&json, &["a", "b"]).is_ok());
        assert!(assert_letter_titles(&json, &["b", "a"]).is_err());
    }

    #[test]
    fn test_assert_badge_level() {
        let json = json!({"badge": {"level": "success", "label": "ok"}});
        assert!(assert_badge_level(&json, "success").is_ok());
        assert!(assert_badge_level(&json, "info").is_err());
        assert!(assert_badge_level(&json!({}), "info").is_err());
    }
}
