//! Debounced write-behind slot.
//!
//! One pending save at a time: every state change replaces the payload and
//! restarts the quiet period, so only the latest state is ever sent, and
//! only after the stream of rapid changes pauses. Time is injected by the
//! caller instead of read from a timer, so tests advance it freely.

use chrono::{DateTime, Duration, Utc};

use crate::sync::types::StateDocument;

#[derive(Debug, Clone)]
struct PendingSave {
    doc: StateDocument,
    due_at: DateTime<Utc>,
}

/// Single-slot debounce queue for outbound saves.
#[derive(Debug)]
pub struct WriteBehind {
    window: Duration,
    pending: Option<PendingSave>,
}

impl WriteBehind {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window: Duration::milliseconds(window_ms as i64),
            pending: None,
        }
    }

    /// Replace the pending payload (if any) and restart the quiet period.
    pub fn schedule(&mut self, doc: StateDocument, now: DateTime<Utc>) {
        self.pending = Some(PendingSave {
            doc,
            due_at: now + self.window,
        });
    }

    /// Drain the pending save if its quiet period has elapsed.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Option<StateDocument> {
        if self.pending.as_ref()?.due_at <= now {
            self.pending.take().map(|p| p.doc)
        } else {
            None
        }
    }

    /// Drain the pending save regardless of the quiet period (final flush).
    pub fn take_pending(&mut self) -> Option<StateDocument> {
        self.pending.take().map(|p| p.doc)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time until the pending save becomes due, zero if already due.
    pub fn time_until_due(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.pending.as_ref().map(|p| {
            if p.due_at > now {
                p.due_at - now
            } else {
                Duration::zero()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::{ActionCategory, ChallengeEngine};
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn doc_with_points(actions: usize) -> StateDocument {
        let mut engine = ChallengeEngine::new();
        for _ in 0..actions {
            engine.perform_action(ActionCategory::Calls);
        }
        engine.document("user_test")
    }

    #[test]
    fn nothing_due_before_the_window_elapses() {
        let mut queue = WriteBehind::new(1000);
        queue.schedule(doc_with_points(1), at(0));
        assert!(queue.take_due(at(0)).is_none());
        assert!(queue.has_pending());
    }

    #[test]
    fn due_exactly_once_after_the_window() {
        let mut queue = WriteBehind::new(1000);
        queue.schedule(doc_with_points(1), at(0));
        assert!(queue.take_due(at(1)).is_some());
        assert!(queue.take_due(at(2)).is_none());
        assert!(!queue.has_pending());
    }

    #[test]
    fn newer_change_supersedes_and_restarts_the_window() {
        let mut queue = WriteBehind::new(1000);
        queue.schedule(doc_with_points(1), at(0));
        // A second change just before the first would have fired.
        queue.schedule(doc_with_points(2), at(0) + Duration::milliseconds(900));

        // The original deadline passes without a send.
        assert!(queue.take_due(at(1)).is_none());

        // The superseding payload fires with the latest state.
        let sent = queue.take_due(at(2)).unwrap();
        assert_eq!(sent.state.points, 100);
        assert_eq!(sent.actions.tracker.calls.count, 2);
    }

    #[test]
    fn take_pending_ignores_the_window() {
        let mut queue = WriteBehind::new(60_000);
        queue.schedule(doc_with_points(1), at(0));
        assert!(queue.take_pending().is_some());
        assert!(!queue.has_pending());
    }

    #[test]
    fn time_until_due_counts_down_and_clamps_at_zero() {
        let mut queue = WriteBehind::new(1000);
        assert!(queue.time_until_due(at(0)).is_none());

        queue.schedule(doc_with_points(1), at(0));
        assert_eq!(
            queue.time_until_due(at(0)),
            Some(Duration::milliseconds(1000))
        );
        assert_eq!(queue.time_until_due(at(5)), Some(Duration::zero()));
    }
}
