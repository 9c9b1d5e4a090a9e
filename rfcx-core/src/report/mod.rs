//! Serial report assembly

pub mod snapshot;
pub mod writer;

pub use snapshot::SensorSnapshot;
pub use writer::{write_report, RULE};
