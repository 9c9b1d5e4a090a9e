//! UART serial transmit abstractions
//!
//! The node only ever talks outward over its serial link, so only the
//! transmit half is modelled.

use core::fmt;

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Text adapter over a [`UartTx`]
///
/// Lets report code use `write!` against the serial link. Transmit errors
/// are collapsed into [`fmt::Error`].
pub struct SerialWriter<T> {
    tx: T,
}

impl<T: UartTx> SerialWriter<T> {
    /// Wrap a transmitter
    pub fn new(tx: T) -> Self {
        Self { tx }
    }

    /// Release the transmitter
    pub fn into_inner(self) -> T {
        self.tx
    }
}

impl<T: UartTx> fmt::Write for SerialWriter<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.tx.write_blocking(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::fmt::Write;
    use std::vec::Vec;

    struct CaptureTx {
        bytes: Vec<u8>,
        fail: bool,
    }

    impl UartTx for CaptureTx {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.bytes.extend_from_slice(data);
            Ok(())
        }
    }

    #[test]
    fn test_writer_forwards_bytes() {
        let mut writer = SerialWriter::new(CaptureTx {
            bytes: Vec::new(),
            fail: false,
        });
        write!(writer, "Battery {}\r\n", 1).unwrap();
        assert_eq!(writer.into_inner().bytes, b"Battery 1\r\n");
    }

    #[test]
    fn test_writer_maps_errors() {
        let mut writer = SerialWriter::new(CaptureTx {
            bytes: Vec::new(),
            fail: true,
        });
        assert!(writer.write_str("x").is_err());
    }
}
