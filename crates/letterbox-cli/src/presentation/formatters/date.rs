use chrono::NaiveDate;

/// "January 15, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Monday, January 15, 2024"
pub fn format_long_date_with_weekday(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Jan 15, 2024"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Calendar age of a letter date: "Today", "Yesterday", "3 days ago",
/// then the short date from a week on. Future dates use the short date.
pub fn format_relative_date(date: NaiveDate, age_days: i64) -> String {
    match age_days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", age_days),
        _ => format_short_date(date),
    }
}
