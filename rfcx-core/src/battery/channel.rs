//! Battery channel wiring
//!
//! Maps a logical battery id to the sense/drive pin pair that probes it.

use rfcx_hal::{InputPin, OutputPin};

/// Logical battery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BatteryId {
    Battery1 = 1,
    Battery2 = 2,
}

impl BatteryId {
    /// Both channels in refresh order
    pub const ALL: [BatteryId; 2] = [BatteryId::Battery1, BatteryId::Battery2];

    /// Zero-based slot index
    pub const fn index(self) -> usize {
        match self {
            BatteryId::Battery1 => 0,
            BatteryId::Battery2 => 1,
        }
    }
}

/// Channel lookup failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// Identifier does not name one of the two batteries
    UnknownChannel(u8),
}

impl TryFrom<u8> for BatteryId {
    type Error = ChannelError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(BatteryId::Battery1),
            2 => Ok(BatteryId::Battery2),
            other => Err(ChannelError::UnknownChannel(other)),
        }
    }
}

/// One battery's probe circuit
///
/// `sense` reads the charger status line, `drive` pulls it through a
/// resistor so a floating line can be detected.
pub struct ProbeChannel<S, D> {
    pub(crate) sense: S,
    pub(crate) drive: D,
}

impl<S: InputPin, D: OutputPin> ProbeChannel<S, D> {
    /// Create a channel with the drive pin inactive
    pub fn new(sense: S, mut drive: D) -> Self {
        drive.set_low();
        Self { sense, drive }
    }

    /// Current drive pin level
    pub fn drive_is_active(&self) -> bool {
        self.drive.is_set_high()
    }
}

/// Both battery probe channels
pub struct BatteryChannels<S, D> {
    channels: [ProbeChannel<S, D>; 2],
}

impl<S: InputPin, D: OutputPin> BatteryChannels<S, D> {
    /// Wire up battery 1 and battery 2
    pub fn new(battery_1: ProbeChannel<S, D>, battery_2: ProbeChannel<S, D>) -> Self {
        Self {
            channels: [battery_1, battery_2],
        }
    }

    /// Channel for a known battery
    pub fn get_mut(&mut self, id: BatteryId) -> &mut ProbeChannel<S, D> {
        &mut self.channels[id.index()]
    }

    /// Channel for a raw identifier
    pub fn channel_mut(&mut self, raw: u8) -> Result<&mut ProbeChannel<S, D>, ChannelError> {
        let id = BatteryId::try_from(raw)?;
        Ok(self.get_mut(id))
    }

    /// Channel for a known battery (shared)
    pub fn get(&self, id: BatteryId) -> &ProbeChannel<S, D> {
        &self.channels[id.index()]
    }
}
