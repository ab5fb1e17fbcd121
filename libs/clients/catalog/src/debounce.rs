use std::time::Duration;
use tokio::time::Instant;

/// Trailing delay applied to search input before it becomes a query.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Trailing-edge debouncer.
///
/// Every `push` replaces the pending value and restarts the delay; `poll`
/// releases the latest value once the delay has elapsed with no further
/// pushes. Time is passed in so the caller decides the clock.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// When the pending value becomes ready, if there is one
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((value, at)) if now >= at => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
