//! Single-slot readiness signal between interrupt and main context

use portable_atomic::{AtomicBool, Ordering};

/// Level-triggered "report due" flag
///
/// Exactly one [`TickNotifier`] sets it and exactly one [`ReportWaiter`]
/// clears it. [`split`](Self::split) borrows the signal mutably for the
/// lifetime of both halves, so a second pair cannot be created.
pub struct ReadinessSignal {
    ready: AtomicBool,
}

impl Default for ReadinessSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessSignal {
    /// Create a cleared signal
    pub const fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    /// Hand out the setter and clearer halves
    pub fn split(&mut self) -> (TickNotifier<'_>, ReportWaiter<'_>) {
        let this: &Self = self;
        (
            TickNotifier { ready: &this.ready },
            ReportWaiter { ready: &this.ready },
        )
    }
}

/// Setter half, owned by the timer interrupt
pub struct TickNotifier<'a> {
    ready: &'a AtomicBool,
}

impl TickNotifier<'_> {
    /// Mark a report as due
    ///
    /// Setting an already-set signal has no further effect.
    pub fn notify(&self) {
        self.ready.store(true, Ordering::Release);
    }
}

/// Clearer half, owned by the main loop
pub struct ReportWaiter<'a> {
    ready: &'a AtomicBool,
}

impl ReportWaiter<'_> {
    /// Check whether a report is due
    pub fn is_pending(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Mark the due report as done
    pub fn clear(&mut self) {
        self.ready.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clear() {
        let mut signal = ReadinessSignal::new();
        let (_notifier, waiter) = signal.split();
        assert!(!waiter.is_pending());
    }

    #[test]
    fn test_notify_and_clear() {
        let mut signal = ReadinessSignal::new();
        let (notifier, mut waiter) = signal.split();

        notifier.notify();
        assert!(waiter.is_pending());

        waiter.clear();
        assert!(!waiter.is_pending());
    }

    #[test]
    fn test_notify_is_level_not_count() {
        let mut signal = ReadinessSignal::new();
        let (notifier, mut waiter) = signal.split();

        notifier.notify();
        notifier.notify();
        notifier.notify();
        waiter.clear();
        assert!(!waiter.is_pending());
    }
}
