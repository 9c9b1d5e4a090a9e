//! Software I2C framing over two open-drain lines
//!
//! Used for transactions a controller cannot generate itself, such as an
//! address-only write. The bus pull-ups provide the high level; a line is
//! either pulled low or released.

use crate::i2c::I2cBusError;

/// Half periods to wait for a device stretching the clock
const CLOCK_STRETCH_LIMIT: u32 = 1000;

/// One open-drain bus line
pub trait OpenDrain {
    /// Stop driving; the pull-up takes the line high
    fn release(&mut self);

    /// Drive the line low
    fn pull_low(&mut self);

    /// Sample the line level
    fn is_high(&mut self) -> bool;
}

/// START, 7-bit address with the write bit, ACK slot, STOP
///
/// `half_period` blocks for half an SCL period. Both lines are released
/// when this returns, on success and on error.
pub fn write_address_only<C, D, W>(
    scl: &mut C,
    sda: &mut D,
    address: u8,
    mut half_period: W,
) -> Result<(), I2cBusError>
where
    C: OpenDrain,
    D: OpenDrain,
    W: FnMut(),
{
    let result = address_frame(scl, sda, address, &mut half_period);
    scl.release();
    sda.release();
    result
}

fn address_frame<C, D, W>(
    scl: &mut C,
    sda: &mut D,
    address: u8,
    half_period: &mut W,
) -> Result<(), I2cBusError>
where
    C: OpenDrain,
    D: OpenDrain,
    W: FnMut(),
{
    if address > 0x7F {
        return Err(I2cBusError::Other);
    }

    scl.release();
    sda.release();
    half_period();
    if !scl.is_high() || !sda.is_high() {
        return Err(I2cBusError::Bus);
    }

    // START: SDA falls while SCL is high
    sda.pull_low();
    half_period();
    scl.pull_low();
    half_period();

    let frame = address << 1;
    for bit in (0..8).rev() {
        if frame & (1 << bit) != 0 {
            sda.release();
        } else {
            sda.pull_low();
        }
        half_period();
        clock_high(scl, half_period)?;
        half_period();
        scl.pull_low();
    }

    sda.release();
    half_period();
    clock_high(scl, half_period)?;
    let acked = !sda.is_high();
    half_period();
    scl.pull_low();
    half_period();

    // STOP: SDA rises while SCL is high
    sda.pull_low();
    half_period();
    clock_high(scl, half_period)?;
    half_period();
    sda.release();
    half_period();

    if acked {
        Ok(())
    } else {
        Err(I2cBusError::Nack)
    }
}

/// Release SCL and wait out clock stretching
fn clock_high<C, W>(scl: &mut C, half_period: &mut W) -> Result<(), I2cBusError>
where
    C: OpenDrain,
    W: FnMut(),
{
    scl.release();
    for _ in 0..CLOCK_STRETCH_LIMIT {
        if scl.is_high() {
            return Ok(());
        }
        half_period();
    }
    Err(I2cBusError::Bus)
}
