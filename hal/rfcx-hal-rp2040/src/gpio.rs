//! GPIO trait implementations

use core::convert::Infallible;

use embassy_rp::gpio::{Flex, Input, Output, Pull};

/// Cycles to wait before sampling a sense pin (~10 µs at 125 MHz)
///
/// Covers the input synchronizer and the RC of the probe resistor against
/// the charger status line.
pub const PROBE_SETTLE_CYCLES: u32 = 1250;

/// Push-pull output (battery drive lines, heartbeat LED)
pub struct GpioOutput<'d> {
    pin: Output<'d>,
}

impl<'d> GpioOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl rfcx_hal::OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Battery sense input that waits for the line to settle before sampling
pub struct SensePin<'d> {
    pin: Input<'d>,
    settle_cycles: u32,
}

impl<'d> SensePin<'d> {
    /// Wrap an input with the default settle time
    pub fn new(pin: Input<'d>) -> Self {
        Self {
            pin,
            settle_cycles: PROBE_SETTLE_CYCLES,
        }
    }
}

impl rfcx_hal::InputPin for SensePin<'_> {
    type Error = Infallible;

    fn is_high(&mut self) -> Result<bool, Infallible> {
        cortex_m::asm::delay(self.settle_cycles);
        Ok(self.pin.is_high())
    }
}

/// I2C line taken over as a plain GPIO, relying on the bus pull-ups
pub struct OpenDrainLine<'d> {
    pin: Flex<'d>,
}

impl<'d> OpenDrainLine<'d> {
    /// Start released with the output latch low
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::None);
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl rfcx_hal::bitbang::OpenDrain for OpenDrainLine<'_> {
    fn release(&mut self) {
        self.pin.set_as_input();
    }

    fn pull_low(&mut self) {
        self.pin.set_as_output();
    }

    fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }
}
