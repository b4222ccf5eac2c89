use chrono::{DateTime, Local, NaiveDate, Utc};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of wall-clock time (letter stamps, today's date) and monotonic
/// time (deferred UI actions).
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date used to prefill the form
    fn today(&self) -> NaiveDate;

    fn instant(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same offset.
///
/// `today()` is the UTC date of `now()` so results do not depend on the
/// host time zone.
#[derive(Debug, Clone)]
pub struct ManualClock {
    start_utc: DateTime<Utc>,
    start_instant: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new(start_utc: DateTime<Utc>) -> Self {
        Self {
            start_utc,
            start_instant: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = chrono::Duration::from_std(self.elapsed.get())
            .unwrap_or_else(|_| chrono::Duration::zero());
        self.start_utc + elapsed
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn instant(&self) -> Instant {
        self.start_instant + self.elapsed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_moves_both_timelines() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap();
        let clock = ManualClock::new(start);
        let shared = clock.clone();
        let before = clock.instant();

        shared.advance_millis(1500);

        assert_eq!(clock.instant() - before, Duration::from_millis(1500));
        assert_eq!(clock.now(), start + chrono::Duration::milliseconds(1500));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
    }
}
