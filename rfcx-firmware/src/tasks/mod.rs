//! Embassy async tasks
//!
//! The tick task runs on the interrupt executor; everything else runs in
//! the main loop.

pub mod tick;

pub use tick::tick_task;
