//! Last known sensor values

use crate::traits::{HumidityReading, PowerReading};
use crate::units::Centi;

/// Values shown in the next report
///
/// Every field starts at zero. A failed read leaves the previous value in
/// place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSnapshot {
    /// LM75BD temperature
    pub temperature: Centi,
    pub humidity: HumidityReading,
    pub power: PowerReading,
}
