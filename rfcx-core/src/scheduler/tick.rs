//! Work done on each timer interrupt
//!
//! [`TickContext`] is the only thing handed to the interrupt context. It can
//! toggle the heartbeat indicator and set the readiness signal, and holds no
//! bus, serial or formatting handle.

use rfcx_hal::OutputPin;

use super::signal::TickNotifier;

/// Interrupt-side state
pub struct TickContext<'a, L> {
    notifier: TickNotifier<'a>,
    heartbeat: L,
    ticks: u32,
}

impl<'a, L: OutputPin> TickContext<'a, L> {
    /// Create the context from the setter half and the heartbeat LED
    pub fn new(notifier: TickNotifier<'a>, heartbeat: L) -> Self {
        Self {
            notifier,
            heartbeat,
            ticks: 0,
        }
    }

    /// Handle one timer period
    pub fn on_tick(&mut self) {
        self.heartbeat.toggle();
        self.notifier.notify();
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Number of ticks handled (wraps)
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Current heartbeat level
    pub fn heartbeat_on(&self) -> bool {
        self.heartbeat.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ReadinessSignal;

    struct Led(bool);

    impl OutputPin for Led {
        fn set_high(&mut self) {
            self.0 = true;
        }

        fn set_low(&mut self) {
            self.0 = false;
        }

        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_tick_toggles_and_notifies() {
        let mut signal = ReadinessSignal::new();
        let (notifier, waiter) = signal.split();
        let mut ctx = TickContext::new(notifier, Led(false));

        ctx.on_tick();
        assert!(ctx.heartbeat_on());
        assert!(waiter.is_pending());

        ctx.on_tick();
        assert!(!ctx.heartbeat_on());
        assert_eq!(ctx.ticks(), 2);
    }
}
