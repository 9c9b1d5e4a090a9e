//! Sensor traits and readings

use rfcx_hal::I2cBusError;

use crate::units::Centi;

/// Errors that can occur while talking to a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed
    Bus(I2cBusError),
    /// Device answered but does not look like the expected part
    NotPresent,
    /// Conversion still in progress
    NotReady,
}

impl From<I2cBusError> for SensorError {
    fn from(e: I2cBusError) -> Self {
        SensorError::Bus(e)
    }
}

/// Device that needs bring-up before it can be read
pub trait Peripheral {
    /// Configure and verify the device
    fn init(&mut self) -> Result<(), SensorError>;
}

/// Ambient temperature sensor
pub trait TemperatureSensor: Peripheral {
    /// Read the temperature in hundredths of °C
    fn read_temperature(&mut self) -> Result<Centi, SensorError>;
}

/// HIH6130 status field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HumidityStatus {
    /// Fresh measurement
    #[default]
    Normal,
    /// Data already fetched since the last measurement
    StaleData,
    /// Device in command mode
    CommandMode,
    /// Diagnostic condition
    Diagnostic,
}

impl HumidityStatus {
    /// Decode the two status bits
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => HumidityStatus::Normal,
            1 => HumidityStatus::StaleData,
            2 => HumidityStatus::CommandMode,
            _ => HumidityStatus::Diagnostic,
        }
    }

    /// Display text used in the serial report
    pub const fn as_str(&self) -> &'static str {
        match self {
            HumidityStatus::Normal => "Normal",
            HumidityStatus::StaleData => "Stale Data",
            HumidityStatus::CommandMode => "Command Mode",
            HumidityStatus::Diagnostic => "Diagnostic",
        }
    }
}

/// One humidity sensor sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HumidityReading {
    /// Relative humidity in hundredths of %
    pub humidity: Centi,
    /// Temperature in hundredths of °C
    pub temperature: Centi,
    pub status: HumidityStatus,
}

/// Combined humidity/temperature sensor
pub trait HumiditySensor: Peripheral {
    /// Trigger a measurement and fetch it
    fn read_humidity(&mut self) -> Result<HumidityReading, SensorError>;
}

/// Power rail sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerReading {
    /// Hundredths of V
    pub input_voltage: Centi,
    /// Hundredths of V
    pub output_voltage: Centi,
    /// Hundredths of mA
    pub input_current: Centi,
    /// Hundredths of mA
    pub output_current: Centi,
}

/// Dual-rail voltage/current monitor
pub trait PowerMonitor: Peripheral {
    /// Sample all four channels
    fn read_power(&mut self) -> Result<PowerReading, SensorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humidity_status_bits() {
        assert_eq!(HumidityStatus::from_bits(0), HumidityStatus::Normal);
        assert_eq!(HumidityStatus::from_bits(1), HumidityStatus::StaleData);
        assert_eq!(HumidityStatus::from_bits(2), HumidityStatus::CommandMode);
        assert_eq!(HumidityStatus::from_bits(3), HumidityStatus::Diagnostic);
        // Only the two low bits count
        assert_eq!(HumidityStatus::from_bits(0b101), HumidityStatus::StaleData);
    }

    #[test]
    fn test_bus_error_converts() {
        let e: SensorError = I2cBusError::Nack.into();
        assert_eq!(e, SensorError::Bus(I2cBusError::Nack));
    }
}
