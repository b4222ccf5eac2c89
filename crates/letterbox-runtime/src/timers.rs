use letterbox_types::Section;
use std::time::{Duration, Instant};

/// UI action run once its deadline passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    HideNotification,
    ShowSection(Section),
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Instant,
    action: DeferredAction,
}

/// Fire-and-forget timer queue.
///
/// Entries cannot be cancelled and may overlap: scheduling the same action
/// twice runs it twice. Both actions are idempotent UI toggles.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    queue: Vec<Scheduled>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, action: DeferredAction) {
        self.queue.push(Scheduled {
            due: now + delay,
            action,
        });
    }

    /// Remove and return every action due at `now`, earliest deadline
    /// first. Ties keep scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredAction> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|entry| entry.due <= now);
        self.queue = pending;

        due.sort_by_key(|entry| entry.due);
        due.into_iter().map(|entry| entry.action).collect()
    }

    /// Earliest pending deadline, used to bound input polling
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.iter().map(|entry| entry.due).min()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_only_returns_expired_entries() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(start, Duration::from_millis(3000), DeferredAction::HideNotification);
        timers.schedule(
            start,
            Duration::from_millis(1000),
            DeferredAction::ShowSection(Section::View),
        );

        assert!(timers.take_due(start + Duration::from_millis(999)).is_empty());
        assert_eq!(
            timers.take_due(start + Duration::from_millis(1000)),
            vec![DeferredAction::ShowSection(Section::View)]
        );
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_due(), Some(start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_overlapping_entries_all_fire_in_deadline_order() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(start, Duration::from_millis(3000), DeferredAction::HideNotification);
        timers.schedule(
            start + Duration::from_millis(500),
            Duration::from_millis(1000),
            DeferredAction::ShowSection(Section::View),
        );
        timers.schedule(
            start + Duration::from_millis(500),
            Duration::from_millis(3000),
            DeferredAction::HideNotification,
        );

        let fired = timers.take_due(start + Duration::from_secs(10));
        assert_eq!(
            fired,
            vec![
                DeferredAction::ShowSection(Section::View),
                DeferredAction::HideNotification,
                DeferredAction::HideNotification,
            ]
        );
        assert!(timers.is_empty());
        assert_eq!(timers.next_due(), None);
    }
}
