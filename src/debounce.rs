//! Trailing-edge debounce driven by an injected clock

/// Default quiet window for resize handling
pub const RESIZE_DEBOUNCE_MS: u64 = 150;

/// Coalesces a burst of triggers into one firing after a quiet window.
///
/// Each trigger replaces the pending payload and pushes the deadline out.
/// The payload handed back by [`Debounce::poll`] is always the one from the
/// most recent trigger.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    window_ms: u64,
    deadline_ms: Option<u64>,
    pending: Option<T>,
}

impl<T> Debounce<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            deadline_ms: None,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Record a trigger at `now_ms`
    pub fn trigger(&mut self, payload: T, now_ms: u64) {
        self.pending = Some(payload);
        self.deadline_ms = Some(now_ms.saturating_add(self.window_ms));
    }

    /// Time at which the pending payload becomes due
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending payload is due, if one is pending
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.pending.as_ref()?;
        self.deadline_ms.map(|deadline| deadline.saturating_sub(now_ms))
    }

    /// Take the pending payload if its quiet window has elapsed
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let deadline = self.deadline_ms?;
        if now_ms < deadline {
            return None;
        }
        self.deadline_ms = None;
        self.pending.take()
    }

    /// Drop any pending payload without firing
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
        self.pending = None;
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_fires_once_with_last_payload() {
        let mut debounce = Debounce::new(150);
        let mut fired = Vec::new();

        // Resize burst: one event every 20ms, viewport shrinking
        for (i, width) in [900, 820, 760, 700, 640].into_iter().enumerate() {
            let now = i as u64 * 20;
            debounce.trigger(width, now);
            if let Some(w) = debounce.poll(now) {
                fired.push(w);
            }
        }

        for now in (80..400).step_by(10) {
            if let Some(w) = debounce.poll(now) {
                fired.push(w);
            }
        }

        assert_eq!(fired, vec![640]);
    }

    #[test]
    fn test_deadline_moves_with_each_trigger() {
        let mut debounce = Debounce::new(150);
        debounce.trigger((), 0);
        debounce.trigger((), 100);
        assert_eq!(debounce.deadline_ms(), Some(250));
        assert_eq!(debounce.poll(150), None);
        assert_eq!(debounce.poll(249), None);
        assert_eq!(debounce.poll(250), Some(()));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let mut debounce = Debounce::new(150);
        debounce.trigger(1, 0);
        assert_eq!(debounce.poll(200), Some(1));
        assert_eq!(debounce.poll(400), None);

        debounce.trigger(2, 500);
        assert_eq!(debounce.poll(650), Some(2));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debounce = Debounce::default();
        debounce.trigger("resize", 0);
        debounce.cancel();
        assert_eq!(debounce.poll(1_000), None);
        assert_eq!(debounce.remaining_ms(1_000), None);
    }

    #[test]
    fn test_remaining_after_early_poll() {
        let mut debounce = Debounce::new(150);
        debounce.trigger(7, 1_000);

        // A timer that wakes 2ms early finds nothing due and must wait the rest
        assert_eq!(debounce.poll(1_148), None);
        assert_eq!(debounce.remaining_ms(1_148), Some(2));
        assert_eq!(debounce.poll(1_150), Some(7));
        assert_eq!(debounce.remaining_ms(1_150), None);
    }

    #[test]
    fn test_remaining_saturates_past_deadline() {
        let mut debounce = Debounce::new(150);
        debounce.trigger((), 0);
        assert_eq!(debounce.remaining_ms(0), Some(150));
        assert_eq!(debounce.remaining_ms(500), Some(0));
    }
}
