//! Board wiring
//!
//! Fixed pin map for the single hardware revision:
//!
//! | Signal               | GPIO |
//! |----------------------|------|
//! | UART0 TX (report)    | 0    |
//! | I2C0 SDA             | 4    |
//! | I2C0 SCL             | 5    |
//! | Battery 1 sense      | 6    |
//! | Battery 1 drive      | 7    |
//! | Battery 2 sense      | 8    |
//! | Battery 2 drive      | 9    |
//! | Heartbeat LED        | 25   |

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::{I2C0, PIN_4, PIN_5};
use embassy_rp::uart::{self, UartTx};
use embassy_rp::watchdog::Watchdog;
use embassy_rp::Peripherals;

use rfcx_core::battery::{BatteryChannels, ProbeChannel};
use rfcx_core::config;
use rfcx_hal_rp2040::gpio::{GpioOutput, SensePin};
use rfcx_hal_rp2040::i2c::I2cPort;
use rfcx_hal_rp2040::uart::SerialTx;

/// Battery probe channels as wired on this board
pub type Batteries = BatteryChannels<SensePin<'static>, GpioOutput<'static>>;

/// Sensor bus: I2C0 on GPIO5 (SCL) / GPIO4 (SDA)
pub type SensorBus = I2cPort<'static, I2C0, PIN_5, PIN_4>;

/// Peripherals split out for the node
pub struct Board {
    pub serial: SerialTx<'static>,
    pub i2c: SensorBus,
    pub batteries: Batteries,
    pub heartbeat: GpioOutput<'static>,
    pub watchdog: Watchdog,
}

impl Board {
    /// Claim and configure every peripheral the node uses
    ///
    /// Drive pins and the heartbeat LED start low.
    pub fn new(p: Peripherals) -> Self {
        let mut uart_config = uart::Config::default();
        uart_config.baudrate = config::SERIAL_BAUD;
        let serial = SerialTx::new(UartTx::new_blocking(p.UART0, p.PIN_0, uart_config));

        let i2c = I2cPort::new(p.I2C0, p.PIN_5, p.PIN_4, config::I2C_FREQUENCY_HZ);

        let batteries = BatteryChannels::new(
            ProbeChannel::new(
                SensePin::new(Input::new(p.PIN_6, Pull::None)),
                GpioOutput::new(Output::new(p.PIN_7, Level::Low)),
            ),
            ProbeChannel::new(
                SensePin::new(Input::new(p.PIN_8, Pull::None)),
                GpioOutput::new(Output::new(p.PIN_9, Level::Low)),
            ),
        );

        Self {
            serial,
            i2c,
            batteries,
            heartbeat: GpioOutput::new(Output::new(p.PIN_25, Level::Low)),
            watchdog: Watchdog::new(p.WATCHDOG),
        }
    }
}
