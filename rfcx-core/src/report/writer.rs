//! Fixed-template text report

use core::fmt::{self, Write};

use super::snapshot::SensorSnapshot;
use crate::battery::BatteryPair;

/// Separator line framing each report
pub const RULE: &str = "-----------------------------";

/// Write one report
///
/// Numbers are right-aligned to five characters with two decimals.
pub fn write_report<W: Write>(
    out: &mut W,
    snapshot: &SensorSnapshot,
    batteries: &BatteryPair,
) -> fmt::Result {
    let humidity = &snapshot.humidity;
    let power = &snapshot.power;

    write!(out, "\r\n{}\r\n", RULE)?;

    out.write_str("LM75BD:\r\n")?;
    write!(out, "\tTemperature: {:>5}C\r\n", snapshot.temperature)?;

    out.write_str("HIH6130:\r\n")?;
    write!(out, "\tHumidity: {:>5}%\r\n", humidity.humidity)?;
    write!(out, "\tTemperature: {:>5}C\r\n", humidity.temperature)?;
    write!(out, "\tStatus: {}\r\n", humidity.status.as_str())?;

    write!(out, "\tInput Voltage:  {:>5}V\r\n", power.input_voltage)?;
    write!(out, "\tOutput Voltage: {:>5}V\r\n", power.output_voltage)?;
    write!(out, "\tInput Current:  {:>5}mA\r\n", power.input_current)?;
    write!(out, "\tOutput Current: {:>5}mA\r\n", power.output_current)?;

    out.write_str("Batteries:\r\n")?;
    write!(out, "\tBattery 1 Status: {}\r\n", batteries.battery_1.as_str())?;
    write!(out, "\tBattery 2 Status: {}\r\n", batteries.battery_2.as_str())?;

    write!(out, "{}\r\n", RULE)
}
