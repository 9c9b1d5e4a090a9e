//! Board-agnostic core logic for the monitoring node firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Battery charge-state detection over a sense/drive pin pair
//! - Readiness signal and report scheduler shared with the timer interrupt
//! - Sensor traits and the serial report assembler
//! - Peripheral bring-up policy
//! - Compiled-in configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod battery;
pub mod bringup;
pub mod config;
pub mod node;
pub mod report;
pub mod scheduler;
pub mod traits;
pub mod units;

pub use node::MonitorNode;
