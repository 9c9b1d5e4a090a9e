//! Status of both battery channels

use rfcx_hal::{InputPin, OutputPin};

use super::channel::{BatteryChannels, BatteryId};
use super::status::ChargeStatus;

/// Latest classification of battery 1 and battery 2
///
/// Both slots start at [`ChargeStatus::Error`], the "not yet sampled" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryPair {
    pub battery_1: ChargeStatus,
    pub battery_2: ChargeStatus,
}

impl Default for BatteryPair {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryPair {
    /// Create a pair with both channels unsampled
    pub const fn new() -> Self {
        Self {
            battery_1: ChargeStatus::Error,
            battery_2: ChargeStatus::Error,
        }
    }

    /// Status of one battery
    pub fn status(&self, id: BatteryId) -> ChargeStatus {
        match id {
            BatteryId::Battery1 => self.battery_1,
            BatteryId::Battery2 => self.battery_2,
        }
    }

    /// Classify battery 1 then battery 2, overwriting both slots
    pub fn refresh<S: InputPin, D: OutputPin>(&mut self, channels: &mut BatteryChannels<S, D>) {
        let battery_1 = channels.classify(BatteryId::Battery1);
        let battery_2 = channels.classify(BatteryId::Battery2);
        *self = Self {
            battery_1,
            battery_2,
        };
    }
}
