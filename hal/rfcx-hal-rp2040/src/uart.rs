//! Blocking UART transmitter for the serial report

use embassy_rp::uart::{Blocking, Error as UartError, UartTx};

/// Error from UART operations
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Break condition
    Break,
    /// Other error
    Other,
}

impl From<UartError> for UartBusError {
    fn from(e: UartError) -> Self {
        match e {
            UartError::Framing => UartBusError::Framing,
            UartError::Overrun => UartBusError::Overrun,
            UartError::Parity => UartBusError::Parity,
            UartError::Break => UartBusError::Break,
            _ => UartBusError::Other,
        }
    }
}

/// Blocking transmitter carrying the serial report
pub struct SerialTx<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> SerialTx<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl rfcx_hal::UartTx for SerialTx<'_> {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data).map_err(UartBusError::from)
    }
}
