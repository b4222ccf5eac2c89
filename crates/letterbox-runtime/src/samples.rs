use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use letterbox_store::Store;
use letterbox_types::{Letter, LetterId};

use crate::Result;

/// The two demonstration letters, ids derived from `now` like freshly
/// written ones (one and two seconds earlier).
pub fn sample_letters(now: DateTime<Utc>) -> Vec<Letter> {
    let now_ms = now.timestamp_millis();

    vec![
        Letter {
            id: LetterId::new(now_ms - 1000),
            title: "My First Memory Letter".to_string(),
            date: ymd(2024, 1, 15),
            sender: "Sarah".to_string(),
            recipient: "Mom".to_string(),
            message: "Dear Mom, I wanted to write this letter to tell you how much you mean to me. \
                      Your love and support have been my foundation throughout my life. Every time \
                      I think about home, I think about your warm hugs and encouraging words. Thank \
                      you for being my biggest cheerleader and my best friend. I love you more than \
                      words can express. Love, Sarah"
                .to_string(),
            created_at: utc(2024, 1, 15, 10, 30),
        },
        Letter {
            id: LetterId::new(now_ms - 2000),
            title: "A Letter to My Future Self".to_string(),
            date: ymd(2024, 1, 10),
            sender: "Alex".to_string(),
            recipient: "Future Alex".to_string(),
            message: "Dear Future Alex, I hope you're reading this letter and smiling at how far \
                      you've come. Remember the dreams we had? I hope you've achieved them all. Life \
                      is beautiful, and every challenge we face makes us stronger. Keep believing in \
                      yourself, keep dreaming big, and never forget to be kind to others. You've got \
                      this! Love, Present Alex"
                .to_string(),
            created_at: utc(2024, 1, 10, 14, 20),
        },
    ]
}

/// Write the sample letters straight into the store when it holds none.
///
/// Returns whether anything was written.
pub fn seed_samples(store: &Store, now: DateTime<Utc>) -> Result<bool> {
    if !store.load().is_empty() {
        tracing::info!("store already has letters, skipping samples");
        return Ok(false);
    }

    store.save(&sample_letters(now))?;
    tracing::info!(slot = %store.location(), "seeded sample letters");
    Ok(true)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
