//! The monitoring node: sensors, battery probes and one report per cycle

use core::fmt::{self, Write};

use heapless::Vec;
use rfcx_hal::{InputPin, OutputPin};

use crate::battery::{BatteryChannels, BatteryPair};
use crate::bringup::{report_step, BringUp, InitError, PeripheralKind, Transcript};
use crate::report::{write_report, SensorSnapshot};
use crate::traits::{HumiditySensor, PowerMonitor, SensorError, TemperatureSensor};

/// A sensor read that failed during a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadFault {
    pub peripheral: PeripheralKind,
    pub error: SensorError,
}

/// Result of one read/report cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleStats {
    /// Reads that failed; their previous values were reported
    pub faults: Vec<ReadFault, 3>,
    /// Battery states written to the report
    pub batteries: BatteryPair,
}

/// All peripherals of the node plus the state carried between reports
pub struct MonitorNode<T, H, P, S, D> {
    temperature: T,
    humidity: H,
    power: P,
    channels: BatteryChannels<S, D>,
    snapshot: SensorSnapshot,
    batteries: BatteryPair,
    bring_up_truncated: bool,
}

impl<T, H, P, S, D> MonitorNode<T, H, P, S, D>
where
    T: TemperatureSensor,
    H: HumiditySensor,
    P: PowerMonitor,
    S: InputPin,
    D: OutputPin,
{
    /// Assemble the node with zeroed readings and unsampled batteries
    pub fn new(temperature: T, humidity: H, power: P, channels: BatteryChannels<S, D>) -> Self {
        Self {
            temperature,
            humidity,
            power,
            channels,
            snapshot: SensorSnapshot::default(),
            batteries: BatteryPair::new(),
            bring_up_truncated: false,
        }
    }

    /// Bring up all peripherals, reporting progress on `out`
    ///
    /// Order is temperature sensor, ADC, humidity sensor. A required
    /// peripheral failing skips the rest.
    pub fn bring_up<W: Write>(&mut self, out: &mut W) -> Result<BringUp, InitError> {
        let mut log = Transcript::new(out);
        log.line(format_args!("Initializing..."));

        let result = self.init_devices(&mut log);
        match result {
            Ok(_) => log.line(format_args!("Initialization successful")),
            Err(_) => log.line(format_args!("<-- ERROR: Initialization failed -->")),
        }

        self.bring_up_truncated = log.truncated();
        result
    }

    fn init_devices<W: Write>(
        &mut self,
        out: &mut Transcript<'_, W>,
    ) -> Result<BringUp, InitError> {
        report_step(
            out,
            PeripheralKind::TemperatureSensor,
            self.temperature.init(),
        )?;
        let power_monitor_ok = report_step(out, PeripheralKind::PowerMonitor, self.power.init())?;
        report_step(out, PeripheralKind::HumiditySensor, self.humidity.init())?;

        Ok(BringUp { power_monitor_ok })
    }

    /// Read every sensor, probe both batteries and write one report
    pub fn run_cycle<W: Write>(&mut self, out: &mut W) -> Result<CycleStats, fmt::Error> {
        let mut faults = Vec::new();

        match self.temperature.read_temperature() {
            Ok(t) => self.snapshot.temperature = t,
            Err(error) => {
                let _ = faults.push(ReadFault {
                    peripheral: PeripheralKind::TemperatureSensor,
                    error,
                });
            }
        }

        match self.humidity.read_humidity() {
            Ok(reading) => self.snapshot.humidity = reading,
            Err(error) => {
                let _ = faults.push(ReadFault {
                    peripheral: PeripheralKind::HumiditySensor,
                    error,
                });
            }
        }

        match self.power.read_power() {
            Ok(reading) => self.snapshot.power = reading,
            Err(error) => {
                let _ = faults.push(ReadFault {
                    peripheral: PeripheralKind::PowerMonitor,
                    error,
                });
            }
        }

        self.batteries.refresh(&mut self.channels);

        write_report(out, &self.snapshot, &self.batteries)?;

        Ok(CycleStats {
            faults,
            batteries: self.batteries,
        })
    }

    /// Values shown in the last report
    pub fn snapshot(&self) -> &SensorSnapshot {
        &self.snapshot
    }

    /// Battery states from the last report
    pub fn batteries(&self) -> BatteryPair {
        self.batteries
    }

    /// Whether a bring-up message failed to reach the serial link
    pub fn bring_up_truncated(&self) -> bool {
        self.bring_up_truncated
    }
}
