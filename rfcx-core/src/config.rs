//! Compiled-in node configuration
//!
//! The node has a single hardware revision and no runtime configuration;
//! everything tunable lives here.

/// Report period driven by the timer interrupt
pub const TICK_PERIOD_MS: u64 = 1000;

/// Serial report baud rate
pub const SERIAL_BAUD: u32 = 9600;

/// I2C bus clock
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Hardware watchdog period; the main loop feeds it every iteration
pub const WATCHDOG_PERIOD_MS: u64 = 8000;

/// LM75BD temperature sensor, A2..A0 tied low
pub const LM75BD_ADDRESS: u8 = 0x48;

/// HIH6130 humidity/temperature sensor (factory address)
pub const HIH6130_ADDRESS: u8 = 0x27;

/// ADS1015 voltage/current ADC, ADDR tied to VDD
pub const ADS1015_ADDRESS: u8 = 0x49;

/// HIH6130 conversion time after a measurement request
pub const HIH6130_MEASUREMENT_MS: u32 = 40;

/// ADS1015 single-shot conversion wait (1600 SPS)
pub const ADS1015_CONVERSION_US: u32 = 1000;

/// Analog front-end scaling for the power rails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerScaling {
    /// Input rail divider ratio × 1000
    pub input_divider_x1000: u32,
    /// Output rail divider ratio × 1000
    pub output_divider_x1000: u32,
    /// Input current sense amplifier output in mV per A
    pub input_sense_mv_per_a: u32,
    /// Output current sense amplifier output in mV per A
    pub output_sense_mv_per_a: u32,
}

/// Board front end: 47k/10k input divider, 10k/10k output divider,
/// 100 mΩ shunts with 10 V/V sense amplifiers
pub const POWER_SCALING: PowerScaling = PowerScaling {
    input_divider_x1000: 5700,
    output_divider_x1000: 2000,
    input_sense_mv_per_a: 1000,
    output_sense_mv_per_a: 1000,
};
