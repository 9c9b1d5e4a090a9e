//! Battery charge-state detection
//!
//! Each battery charger exposes a status line that is either driven high,
//! driven low, or left floating. Probing it through a drive pin tells the
//! three apart.

pub mod channel;
pub mod detector;
pub mod pair;
pub mod status;

pub use channel::{BatteryChannels, BatteryId, ChannelError, ProbeChannel};
pub use detector::{classify, classify_levels, DriveGuard};
pub use pair::BatteryPair;
pub use status::{status_text, ChargeStatus};
