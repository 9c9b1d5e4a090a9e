//! HIH6130 humidity and temperature sensor
//!
//! A measurement request (address-only write) starts a conversion; four
//! bytes are fetched after it completes:
//!
//! ```text
//! byte 0: S1 S0 H13..H8
//! byte 1: H7..H0
//! byte 2: T13..T6
//! byte 3: T5..T0 x x
//! ```

use embedded_hal::delay::DelayNs;
use rfcx_core::config::HIH6130_MEASUREMENT_MS;
use rfcx_core::traits::{
    HumidityReading, HumiditySensor, HumidityStatus, Peripheral, SensorError,
};
use rfcx_core::units::Centi;
use rfcx_hal::I2cBus;

/// Full-scale count, 2^14 - 2
const FULL_SCALE: i32 = 16382;

/// `counts * span / FULL_SCALE`, rounded half up
const fn scale(counts: i32, span: i32) -> i32 {
    (counts * span + FULL_SCALE / 2) / FULL_SCALE
}

/// HIH6130 on an I2C bus
pub struct Hih6130<B, DL> {
    bus: B,
    delay: DL,
    address: u8,
}

impl<B: I2cBus, DL: DelayNs> Hih6130<B, DL> {
    /// Create a driver for the device at `address`
    pub fn new(bus: B, delay: DL, address: u8) -> Self {
        Self {
            bus,
            delay,
            address,
        }
    }

    /// Decode a 4-byte data fetch
    pub fn decode(raw: [u8; 4]) -> HumidityReading {
        let status = HumidityStatus::from_bits(raw[0] >> 6);

        let humidity_counts = (((raw[0] & 0x3F) as i32) << 8) | raw[1] as i32;
        let temp_counts = (((raw[2] as i32) << 8) | raw[3] as i32) >> 2;

        HumidityReading {
            humidity: Centi(scale(humidity_counts, 10_000)),
            temperature: Centi(scale(temp_counts, 16_500) - 4_000),
            status,
        }
    }

    fn request_measurement(&mut self) -> Result<(), SensorError> {
        self.bus.write_address_only(self.address)?;
        Ok(())
    }
}

impl<B: I2cBus, DL: DelayNs> Peripheral for Hih6130<B, DL> {
    /// The device has no configuration; a measurement request that is
    /// acknowledged is enough to know it is on the bus.
    fn init(&mut self) -> Result<(), SensorError> {
        self.request_measurement()
    }
}

impl<B: I2cBus, DL: DelayNs> HumiditySensor for Hih6130<B, DL> {
    fn read_humidity(&mut self) -> Result<HumidityReading, SensorError> {
        self.request_measurement()?;
        self.delay.delay_ms(HIH6130_MEASUREMENT_MS);

        let mut raw = [0u8; 4];
        self.bus.read(self.address, &mut raw)?;

        let reading = Self::decode(raw);
        if reading.status == HumidityStatus::CommandMode {
            return Err(SensorError::NotReady);
        }
        Ok(reading)
    }
}
