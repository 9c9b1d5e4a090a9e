//! Sensor-ready scheduling
//!
//! A periodic timer interrupt marks a report as due; the main loop polls,
//! runs one read/report cycle and clears the mark. The mark is a level, so
//! ticks that land while a report is pending are coalesced.

pub mod service;
pub mod signal;
pub mod tick;

pub use service::{ReportScheduler, SchedulerState};
pub use signal::{ReadinessSignal, ReportWaiter, TickNotifier};
pub use tick::TickContext;
