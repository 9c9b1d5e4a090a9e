//! Blocking I2C bus shared by the sensor drivers
//!
//! All sensors sit on I2C0 and are only touched from the main loop, so the
//! bus lives in a `NoopRawMutex` and each driver holds a [`SharedI2c`]
//! handle to it.
//!
//! The RP2040 controller cannot send an address without a data byte.
//! [`I2cPort`] keeps the peripheral and both pins, so it can hand the pins
//! to GPIO for a software-framed address-only write and rebuild the
//! controller for the next transfer.

use core::cell::RefCell;

use embassy_rp::gpio::Flex;
use embassy_rp::i2c::{
    self, AbortReason, Blocking, Error as I2cError, I2c, Instance, SclPin, SdaPin,
};
use embassy_rp::Peri;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use rfcx_hal::{bitbang, I2cBus, I2cBusError};

use crate::gpio::OpenDrainLine;

/// Half an SCL period for software framing (100 kHz at 125 MHz)
pub const BITBANG_HALF_PERIOD_CYCLES: u32 = 625;

/// The bus as stored in its static cell
pub type I2cMutex<P> = Mutex<NoopRawMutex, RefCell<P>>;

/// Map an embassy-rp I2C error onto the HAL error
pub fn map_error(e: I2cError) -> I2cBusError {
    match e {
        I2cError::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
        I2cError::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
        I2cError::Abort(_) => I2cBusError::Bus,
        I2cError::InvalidReadBufferLength | I2cError::InvalidWriteBufferLength => {
            I2cBusError::BufferLength
        }
        _ => I2cBusError::Other,
    }
}

/// I2C controller together with the pins it drives
pub struct I2cPort<'d, T: Instance, SCL: SclPin<T>, SDA: SdaPin<T>> {
    peri: Peri<'d, T>,
    scl: Peri<'d, SCL>,
    sda: Peri<'d, SDA>,
    frequency: u32,
}

impl<'d, T: Instance, SCL: SclPin<T>, SDA: SdaPin<T>> I2cPort<'d, T, SCL, SDA> {
    pub fn new(
        peri: Peri<'d, T>,
        scl: Peri<'d, SCL>,
        sda: Peri<'d, SDA>,
        frequency: u32,
    ) -> Self {
        Self {
            peri,
            scl,
            sda,
            frequency,
        }
    }

    /// Configure the controller on the pins for one transfer
    fn controller(&mut self) -> I2c<'_, T, Blocking> {
        let mut config = i2c::Config::default();
        config.frequency = self.frequency;
        I2c::new_blocking(
            self.peri.reborrow(),
            self.scl.reborrow(),
            self.sda.reborrow(),
            config,
        )
    }
}

impl<T: Instance, SCL: SclPin<T>, SDA: SdaPin<T>> I2cBus for I2cPort<'_, T, SCL, SDA> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        self.controller()
            .blocking_write(address, data)
            .map_err(map_error)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        self.controller()
            .blocking_read(address, buf)
            .map_err(map_error)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        self.controller()
            .blocking_write_read(address, write_data, read_buf)
            .map_err(map_error)
    }

    fn write_address_only(&mut self, address: u8) -> Result<(), I2cBusError> {
        let mut scl = OpenDrainLine::new(Flex::new(self.scl.reborrow()));
        let mut sda = OpenDrainLine::new(Flex::new(self.sda.reborrow()));
        bitbang::write_address_only(&mut scl, &mut sda, address, || {
            cortex_m::asm::delay(BITBANG_HALF_PERIOD_CYCLES)
        })
    }
}

/// Handle to the shared blocking bus
pub struct SharedI2c<'a, P> {
    bus: &'a I2cMutex<P>,
}

impl<'a, P: I2cBus> SharedI2c<'a, P> {
    pub fn new(bus: &'a I2cMutex<P>) -> Self {
        Self { bus }
    }
}

impl<P> Clone for SharedI2c<'_, P> {
    fn clone(&self) -> Self {
        Self { bus: self.bus }
    }
}

impl<P: I2cBus> I2cBus for SharedI2c<'_, P> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        self.bus.lock(|bus| bus.borrow_mut().write(address, data))
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        self.bus.lock(|bus| bus.borrow_mut().read(address, buf))
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        self.bus
            .lock(|bus| bus.borrow_mut().write_read(address, write_data, read_buf))
    }

    fn write_address_only(&mut self, address: u8) -> Result<(), I2cBusError> {
        self.bus.lock(|bus| bus.borrow_mut().write_address_only(address))
    }
}
