//! ADS1015 12-bit ADC on the power rails
//!
//! Four single-ended single-shot conversions with the ±4.096 V range
//! (2 mV per LSB):
//!
//! - AIN0: input rail voltage (through divider)
//! - AIN1: output rail voltage (through divider)
//! - AIN2: input current sense amplifier
//! - AIN3: output current sense amplifier

use embedded_hal::delay::DelayNs;
use rfcx_core::config::{PowerScaling, ADS1015_CONVERSION_US};
use rfcx_core::traits::{Peripheral, PowerMonitor, PowerReading, SensorError};
use rfcx_core::units::Centi;
use rfcx_hal::I2cBus;

/// Conversion result register
const REG_CONVERSION: u8 = 0x00;
/// Configuration register
const REG_CONFIG: u8 = 0x01;

/// Power-on reset value of the configuration register
const CONFIG_RESET: u16 = 0x8583;

/// Start a single conversion / conversion idle
const OS: u16 = 1 << 15;
/// PGA ±4.096 V
const PGA_4_096V: u16 = 0b001 << 9;
/// Single-shot mode
const MODE_SINGLE: u16 = 1 << 8;
/// 1600 samples per second
const DR_1600SPS: u16 = 0b100 << 5;
/// Comparator disabled
const COMP_DISABLE: u16 = 0b11;

/// Millivolts per LSB at ±4.096 V
const MV_PER_LSB: i32 = 2;

/// Conversion-ready polls before giving up
const READY_POLLS: u8 = 3;

/// Single-ended input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    Ain0 = 0,
    Ain1 = 1,
    Ain2 = 2,
    Ain3 = 3,
}

impl Input {
    /// Configuration word for a single-shot conversion on this input
    pub const fn config(self) -> u16 {
        let mux = (0b100 | self as u16) << 12;
        OS | mux | PGA_4_096V | MODE_SINGLE | DR_1600SPS | COMP_DISABLE
    }
}

/// ADS1015 on an I2C bus
pub struct Ads1015<B, DL> {
    bus: B,
    delay: DL,
    address: u8,
    scaling: PowerScaling,
}

impl<B: I2cBus, DL: DelayNs> Ads1015<B, DL> {
    /// Create a driver for the device at `address`
    pub fn new(bus: B, delay: DL, address: u8, scaling: PowerScaling) -> Self {
        Self {
            bus,
            delay,
            address,
            scaling,
        }
    }

    fn write_register(&mut self, reg: u8, value: u16) -> Result<(), SensorError> {
        let [hi, lo] = value.to_be_bytes();
        self.bus.write(self.address, &[reg, hi, lo])?;
        Ok(())
    }

    fn read_register(&mut self, reg: u8) -> Result<u16, SensorError> {
        let mut buf = [0u8; 2];
        self.bus.write_read(self.address, &[reg], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Run one single-shot conversion and return millivolts at the pin
    pub fn read_mv(&mut self, input: Input) -> Result<i32, SensorError> {
        self.write_register(REG_CONFIG, input.config())?;

        let mut ready = false;
        for _ in 0..READY_POLLS {
            self.delay.delay_us(ADS1015_CONVERSION_US);
            if self.read_register(REG_CONFIG)? & OS != 0 {
                ready = true;
                break;
            }
        }
        if !ready {
            return Err(SensorError::NotReady);
        }

        let raw = self.read_register(REG_CONVERSION)?;
        Ok(Self::counts(raw) * MV_PER_LSB)
    }

    /// 12-bit signed result, left-aligned in the conversion register
    pub fn counts(raw: u16) -> i32 {
        (raw as i16 >> 4) as i32
    }
}

/// Rail voltage in hundredths of V from pin millivolts
fn rail_voltage(mv: i32, divider_x1000: u32) -> Centi {
    Centi(mv * divider_x1000 as i32 / 10_000)
}

/// Rail current in hundredths of mA from sense amplifier millivolts
fn rail_current(mv: i32, sense_mv_per_a: u32) -> Centi {
    Centi(mv * 100_000 / sense_mv_per_a.max(1) as i32)
}

impl<B: I2cBus, DL: DelayNs> Peripheral for Ads1015<B, DL> {
    /// Restore the power-on configuration and read it back
    fn init(&mut self) -> Result<(), SensorError> {
        self.write_register(REG_CONFIG, CONFIG_RESET)?;
        let config = self.read_register(REG_CONFIG)?;

        // OS reads back as conversion status, not as written
        if config & !OS != CONFIG_RESET & !OS {
            return Err(SensorError::NotPresent);
        }
        Ok(())
    }
}

impl<B: I2cBus, DL: DelayNs> PowerMonitor for Ads1015<B, DL> {
    fn read_power(&mut self) -> Result<PowerReading, SensorError> {
        let scaling = self.scaling;

        let input_voltage = rail_voltage(self.read_mv(Input::Ain0)?, scaling.input_divider_x1000);
        let output_voltage =
            rail_voltage(self.read_mv(Input::Ain1)?, scaling.output_divider_x1000);
        let input_current = rail_current(self.read_mv(Input::Ain2)?, scaling.input_sense_mv_per_a);
        let output_current =
            rail_current(self.read_mv(Input::Ain3)?, scaling.output_sense_mv_per_a);

        Ok(PowerReading {
            input_voltage,
            output_voltage,
            input_current,
            output_current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::mock::{MockBus, NoDelay};
    use rfcx_core::config::POWER_SCALING;

    type Adc = Ads1015<MockBus, NoDelay>;

    fn adc(bus: MockBus) -> Adc {
        Ads1015::new(bus, NoDelay::default(), 0x49, POWER_SCALING)
    }

    /// Conversion register value for a pin voltage in mV
    fn conversion(mv: i32) -> [u8; 2] {
        (((mv / MV_PER_LSB) << 4) as u16).to_be_bytes()
    }

    #[test]
    fn test_config_words() {
        // AIN0 single-ended, ±4.096 V, single-shot, 1600 SPS, no comparator
        assert_eq!(Input::Ain0.config(), 0xC383);
        assert_eq!(Input::Ain3.config(), 0xF383);
    }

    #[test]
    fn test_counts_sign_extends() {
        assert_eq!(Adc::counts(0x7FF0), 2047);
        assert_eq!(Adc::counts(0x0010), 1);
        assert_eq!(Adc::counts(0xFFF0), -1);
    }

    #[test]
    fn test_init_checks_reset_value() {
        let mut bus = MockBus::default();
        bus.respond(&[0x05, 0x83]); // OS bit is status only
        let mut device = adc(bus);
        assert_eq!(device.init(), Ok(()));
        assert_eq!(device.bus.writes[0], (0x49, std::vec![REG_CONFIG, 0x85, 0x83]));

        let mut bus = MockBus::default();
        bus.respond(&[0x00, 0x00]);
        assert_eq!(adc(bus).init(), Err(SensorError::NotPresent));
    }

    #[test]
    fn test_read_power_scales_rails() {
        let mut bus = MockBus::default();
        for mv in [2100, 2050, 120, 50] {
            bus.respond(&[0x85, 0x83]); // conversion done
            bus.respond(&conversion(mv));
        }
        let mut device = adc(bus);

        let reading = device.read_power().unwrap();

        assert_eq!(reading.input_voltage, Centi(1197));
        assert_eq!(reading.output_voltage, Centi(410));
        assert_eq!(reading.input_current, Centi(12000));
        assert_eq!(reading.output_current, Centi(5000));
    }

    #[test]
    fn test_conversion_timeout() {
        let mut bus = MockBus::default();
        for _ in 0..READY_POLLS {
            bus.respond(&[0x05, 0x83]); // still converting
        }
        let mut device = adc(bus);

        assert_eq!(device.read_mv(Input::Ain0), Err(SensorError::NotReady));
    }
}
