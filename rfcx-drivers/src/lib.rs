//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the sensor traits
//! defined in rfcx-core, written against `rfcx_hal::I2cBus`:
//!
//! - LM75BD digital temperature sensor
//! - HIH6130 humidity/temperature sensor
//! - ADS1015 4-channel ADC on the power rails

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod sensor;
