//! RP2040-specific HAL for the monitoring node firmware
//!
//! This crate provides RP2040 implementations of the shared `rfcx-hal`
//! traits on top of embassy-rp:
//!
//! - GPIO output, settled sense inputs and open-drain bus lines
//! - Blocking I2C bus shared between the sensor drivers, with a
//!   software-framed address-only write
//! - Blocking UART transmitter for the serial report

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod uart;

// Re-export shared traits from rfcx-hal for convenience
pub use rfcx_hal::{I2cBus, InputPin, OutputPin, UartTx};
