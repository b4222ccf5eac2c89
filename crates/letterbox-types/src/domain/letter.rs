use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, FormField, Result, iso8601_millis};

/// Letter identifier: the creation instant in Unix milliseconds.
///
/// Uniqueness is best-effort. Two letters created within the same
/// millisecond share an id and nothing deduplicates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterId(i64);

impl LetterId {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    /// Derive the id from a creation instant
    pub fn from_instant(at: &DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for LetterId {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

/// A single persisted letter.
///
/// Field names on the wire are `id, title, date, sender, recipient,
/// message, createdAt`. Nothing is mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub id: LetterId,
    pub title: String,
    pub date: NaiveDate,
    pub sender: String,
    pub recipient: String,
    pub message: String,
    #[serde(with = "iso8601_millis")]
    pub created_at: DateTime<Utc>,
}

impl Letter {
    /// Stamp caller-supplied fields with an id and creation time.
    ///
    /// The instant is truncated to milliseconds so the stored timestamp
    /// survives a JSON round trip unchanged.
    pub fn stamp(input: LetterInput, at: DateTime<Utc>) -> Self {
        let created_at = at.trunc_subsecs(3);
        Self {
            id: LetterId::from_instant(&created_at),
            title: input.title,
            date: input.date,
            sender: input.sender,
            recipient: input.recipient,
            message: input.message,
            created_at,
        }
    }
}

/// The fields a writer supplies through the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterInput {
    pub title: String,
    pub date: NaiveDate,
    pub sender: String,
    pub recipient: String,
    pub message: String,
}

impl LetterInput {
    /// Required-field check performed by the form layer.
    ///
    /// Returns the first empty field in form order. Whitespace-only values
    /// count as present.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (FormField::Title, &self.title),
            (FormField::Sender, &self.sender),
            (FormField::Recipient, &self.recipient),
            (FormField::Message, &self.message),
        ];

        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(Error::MissingField(*field)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input() -> LetterInput {
        LetterInput {
            title: "Hello".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            sender: "A".to_string(),
            recipient: "B".to_string(),
            message: "short".to_string(),
        }
    }

    #[test]
    fn test_stamp_derives_id_from_instant() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let letter = Letter::stamp(input(), at);

        assert_eq!(letter.id.as_i64(), at.timestamp_millis());
        assert_eq!(letter.created_at, at);
        assert_eq!(letter.title, "Hello");
    }

    #[test]
    fn test_stamp_truncates_to_millis() {
        let at = Utc.timestamp_opt(1_705_314_600, 123_456_789).unwrap();
        let letter = Letter::stamp(input(), at);

        assert_eq!(letter.created_at.timestamp_subsec_nanos(), 123_000_000);
        assert_eq!(letter.id.as_i64(), 1_705_314_600_123);
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        assert_eq!(input().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut incomplete = input();
        incomplete.sender.clear();
        incomplete.message.clear();

        assert_eq!(
            incomplete.validate(),
            Err(Error::MissingField(FormField::Sender))
        );
    }

    #[test]
    fn test_validate_allows_whitespace_values() {
        let mut spaced = input();
        spaced.title = "   ".to_string();
        assert!(spaced.validate().is_ok());
    }
}
