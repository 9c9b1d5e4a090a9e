//! Main-loop side of the scheduler

use super::signal::ReportWaiter;

/// Scheduler state as seen from the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerState {
    /// Waiting for the next tick
    Idle,
    /// Tick observed, report cycle not yet run
    ReportPending,
}

/// Runs at most one report cycle per observed readiness
pub struct ReportScheduler<'a> {
    waiter: ReportWaiter<'a>,
    cycles: u32,
}

impl<'a> ReportScheduler<'a> {
    /// Create a scheduler from the clearer half of the signal
    pub fn new(waiter: ReportWaiter<'a>) -> Self {
        Self { waiter, cycles: 0 }
    }

    /// Current state
    pub fn state(&self) -> SchedulerState {
        if self.waiter.is_pending() {
            SchedulerState::ReportPending
        } else {
            SchedulerState::Idle
        }
    }

    /// Run `cycle` if a report is due, then return to idle
    ///
    /// Returns `None` without calling `cycle` when idle. Ticks that arrive
    /// while `cycle` runs are absorbed by the clear that follows it.
    pub fn service<R>(&mut self, cycle: impl FnOnce() -> R) -> Option<R> {
        if !self.waiter.is_pending() {
            return None;
        }

        let result = cycle();
        self.waiter.clear();
        self.cycles = self.cycles.wrapping_add(1);
        Some(result)
    }

    /// Number of completed cycles (wraps)
    pub fn cycles_completed(&self) -> u32 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::scheduler::ReadinessSignal;

    #[test]
    fn test_idle_does_not_run() {
        let mut signal = ReadinessSignal::new();
        let (_notifier, waiter) = signal.split();
        let mut scheduler = ReportScheduler::new(waiter);

        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert_eq!(scheduler.service(|| ()), None);
        assert_eq!(scheduler.cycles_completed(), 0);
    }

    #[test]
    fn test_double_notify_runs_once() {
        let mut signal = ReadinessSignal::new();
        let (notifier, waiter) = signal.split();
        let mut scheduler = ReportScheduler::new(waiter);
        let mut runs = 0;

        notifier.notify();
        notifier.notify();
        assert_eq!(scheduler.state(), SchedulerState::ReportPending);

        assert!(scheduler.service(|| runs += 1).is_some());
        assert!(scheduler.service(|| runs += 1).is_none());

        assert_eq!(runs, 1);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[test]
    fn test_tick_during_cycle_is_coalesced() {
        let mut signal = ReadinessSignal::new();
        let (notifier, waiter) = signal.split();
        let mut scheduler = ReportScheduler::new(waiter);

        notifier.notify();
        scheduler.service(|| notifier.notify());

        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert_eq!(scheduler.cycles_completed(), 1);
    }

    #[test]
    fn test_service_returns_cycle_result() {
        let mut signal = ReadinessSignal::new();
        let (notifier, waiter) = signal.split();
        let mut scheduler = ReportScheduler::new(waiter);

        notifier.notify();
        assert_eq!(scheduler.service(|| 7u8), Some(7));
    }

    proptest! {
        /// `true` = timer tick, `false` = main loop poll
        #[test]
        fn prop_cycles_match_level_model(
            events in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut signal = ReadinessSignal::new();
            let (notifier, waiter) = signal.split();
            let mut scheduler = ReportScheduler::new(waiter);

            let mut model_pending = false;
            let mut model_cycles = 0u32;
            let mut runs = 0u32;

            for tick in events {
                if tick {
                    notifier.notify();
                    model_pending = true;
                } else {
                    scheduler.service(|| runs += 1);
                    if model_pending {
                        model_cycles += 1;
                        model_pending = false;
                    }
                }
            }

            prop_assert_eq!(runs, model_cycles);
            prop_assert_eq!(scheduler.cycles_completed(), model_cycles);
        }
    }
}
