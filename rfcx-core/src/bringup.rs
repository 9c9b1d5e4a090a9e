//! Peripheral bring-up policy
//!
//! Required peripherals abort the remaining bring-up on failure, since later
//! reads would run against a bus that is not ready. Best-effort peripherals
//! are reported and skipped.

use core::fmt::{self, Write};

use crate::traits::SensorError;

/// How a bring-up failure is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Criticality {
    /// Failure stops bring-up
    Required,
    /// Failure is reported, bring-up continues
    BestEffort,
}

/// Peripherals brought up at start-up, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralKind {
    /// LM75BD
    TemperatureSensor,
    /// ADS1015 voltage/current ADC
    PowerMonitor,
    /// HIH6130
    HumiditySensor,
}

impl PeripheralKind {
    /// Name used in serial messages
    pub const fn label(&self) -> &'static str {
        match self {
            PeripheralKind::TemperatureSensor => "temp sensor",
            PeripheralKind::PowerMonitor => "ADC",
            PeripheralKind::HumiditySensor => "humidity sensor",
        }
    }

    pub const fn criticality(&self) -> Criticality {
        match self {
            PeripheralKind::TemperatureSensor | PeripheralKind::HumiditySensor => {
                Criticality::Required
            }
            PeripheralKind::PowerMonitor => Criticality::BestEffort,
        }
    }
}

/// A required peripheral failed to come up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitError {
    pub peripheral: PeripheralKind,
    pub error: SensorError,
}

/// Outcome of a completed bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BringUp {
    /// Whether the best-effort power monitor came up
    pub power_monitor_ok: bool,
}

/// Serial sink for bring-up messages
///
/// The link is not a peripheral, so a failed write does not stop bring-up.
/// It is remembered instead and reported by [`truncated`](Self::truncated).
pub struct Transcript<'a, W> {
    out: &'a mut W,
    truncated: bool,
}

impl<'a, W: Write> Transcript<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            truncated: false,
        }
    }

    /// Write one `\r\n`-terminated line
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        let written = self
            .out
            .write_fmt(args)
            .and_then(|()| self.out.write_str("\r\n"));
        if written.is_err() {
            self.truncated = true;
        }
    }

    /// Whether any line failed to reach the link
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Report one peripheral's init result and apply its criticality
///
/// Returns `Ok(true)` on success, `Ok(false)` for a tolerated failure.
pub fn report_step<W: Write>(
    out: &mut Transcript<'_, W>,
    peripheral: PeripheralKind,
    result: Result<(), SensorError>,
) -> Result<bool, InitError> {
    match result {
        Ok(()) => {
            out.line(format_args!("Successfully initialized {}", peripheral.label()));
            Ok(true)
        }
        Err(error) => {
            out.line(format_args!(
                "<-- ERROR: Error initializing {} -->",
                peripheral.label()
            ));
            match peripheral.criticality() {
                Criticality::Required => Err(InitError { peripheral, error }),
                Criticality::BestEffort => Ok(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfcx_hal::I2cBusError;
    use std::string::String;

    #[test]
    fn test_success_message() {
        let mut out = String::new();
        let result = report_step(
            &mut Transcript::new(&mut out),
            PeripheralKind::TemperatureSensor,
            Ok(()),
        );
        assert_eq!(result, Ok(true));
        assert_eq!(out, "Successfully initialized temp sensor\r\n");
    }

    #[test]
    fn test_required_failure_stops() {
        let mut out = String::new();
        let error = SensorError::Bus(I2cBusError::Nack);
        let result = report_step(
            &mut Transcript::new(&mut out),
            PeripheralKind::HumiditySensor,
            Err(error),
        );
        assert_eq!(
            result,
            Err(InitError {
                peripheral: PeripheralKind::HumiditySensor,
                error,
            })
        );
        assert_eq!(out, "<-- ERROR: Error initializing humidity sensor -->\r\n");
    }

    #[test]
    fn test_best_effort_failure_continues() {
        let mut out = String::new();
        let result = report_step(
            &mut Transcript::new(&mut out),
            PeripheralKind::PowerMonitor,
            Err(SensorError::NotPresent),
        );
        assert_eq!(result, Ok(false));
        assert_eq!(out, "<-- ERROR: Error initializing ADC -->\r\n");
    }

    struct BrokenLink;

    impl Write for BrokenLink {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_transcript_records_failed_write() {
        let mut link = BrokenLink;
        let mut log = Transcript::new(&mut link);

        let result = report_step(&mut log, PeripheralKind::TemperatureSensor, Ok(()));

        assert_eq!(result, Ok(true));
        assert!(log.truncated());
    }

    #[test]
    fn test_transcript_clean_write() {
        let mut out = String::new();
        let mut log = Transcript::new(&mut out);
        log.line(format_args!("Initializing..."));
        assert!(!log.truncated());
        assert_eq!(out, "Initializing...\r\n");
    }
}
