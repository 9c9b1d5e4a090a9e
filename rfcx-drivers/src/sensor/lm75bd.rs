//! LM75BD digital temperature sensor
//!
//! 11-bit two's complement reading left-aligned in the 16-bit temperature
//! register, 0.125 °C per LSB.

use rfcx_core::traits::{Peripheral, SensorError, TemperatureSensor};
use rfcx_core::units::Centi;
use rfcx_hal::I2cBus;

/// Temperature register
const REG_TEMP: u8 = 0x00;
/// Configuration register
const REG_CONF: u8 = 0x01;

/// Configuration: normal operation, comparator mode, fault queue 1
const CONF_NORMAL: u8 = 0x00;

/// Millidegrees per LSB of the 11-bit reading
const MILLI_C_PER_LSB: i32 = 125;

/// LM75BD on an I2C bus
pub struct Lm75bd<B> {
    bus: B,
    address: u8,
}

impl<B: I2cBus> Lm75bd<B> {
    /// Create a driver for the device at `address`
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Convert the raw temperature register to hundredths of °C
    pub fn decode(raw: [u8; 2]) -> Centi {
        let counts = i16::from_be_bytes(raw) >> 5;
        Centi::from_milli(counts as i32 * MILLI_C_PER_LSB)
    }
}

impl<B: I2cBus> Peripheral for Lm75bd<B> {
    fn init(&mut self) -> Result<(), SensorError> {
        self.bus.write(self.address, &[REG_CONF, CONF_NORMAL])?;

        let mut conf = [0u8; 1];
        self.bus.write_read(self.address, &[REG_CONF], &mut conf)?;
        if conf[0] != CONF_NORMAL {
            return Err(SensorError::NotPresent);
        }
        Ok(())
    }
}

impl<B: I2cBus> TemperatureSensor for Lm75bd<B> {
    fn read_temperature(&mut self) -> Result<Centi, SensorError> {
        let mut raw = [0u8; 2];
        self.bus.write_read(self.address, &[REG_TEMP], &mut raw)?;
        Ok(Self::decode(raw))
    }
}
