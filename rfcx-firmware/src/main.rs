//! RFCx - Environmental Monitoring Node Firmware
//!
//! Samples the onboard temperature, humidity and power-rail sensors plus
//! both battery chargers once per second and writes a text report over
//! the serial link.
//!
//! Two execution contexts exist: the tick task on an interrupt-priority
//! executor, and the cooperative main loop below, which owns every bus.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Delay, Duration};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rfcx_core::config::{
    ADS1015_ADDRESS, HIH6130_ADDRESS, LM75BD_ADDRESS, POWER_SCALING, WATCHDOG_PERIOD_MS,
};
use rfcx_core::scheduler::{ReadinessSignal, ReportScheduler, TickContext};
use rfcx_core::MonitorNode;
use rfcx_drivers::sensor::{Ads1015, Hih6130, Lm75bd};
use rfcx_hal::SerialWriter;
use rfcx_hal_rp2040::i2c::{I2cMutex, SharedI2c};

use crate::board::{Board, SensorBus};

mod board;
mod tasks;

/// Executor for the tick task, preempts the main loop
static TICK_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

// Static cells for state shared with the tick task or borrowed by drivers
static READINESS: StaticCell<ReadinessSignal> = StaticCell::new();
static I2C_BUS: StaticCell<I2cMutex<SensorBus>> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    TICK_EXECUTOR.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("RFCx node firmware starting...");

    let Board {
        serial,
        i2c,
        batteries,
        heartbeat,
        mut watchdog,
    } = Board::new(embassy_rp::init(Default::default()));
    info!("Peripherals initialized");

    // A stalled bus call resets the node instead of hanging the report
    watchdog.pause_on_debug(true);
    watchdog.start(Duration::from_millis(WATCHDOG_PERIOD_MS));

    let mut serial = SerialWriter::new(serial);

    let bus: &'static I2cMutex<SensorBus> = I2C_BUS.init(Mutex::new(RefCell::new(i2c)));
    let temperature = Lm75bd::new(SharedI2c::new(bus), LM75BD_ADDRESS);
    let humidity = Hih6130::new(SharedI2c::new(bus), Delay, HIH6130_ADDRESS);
    let power = Ads1015::new(SharedI2c::new(bus), Delay, ADS1015_ADDRESS, POWER_SCALING);

    let mut node = MonitorNode::new(temperature, humidity, power, batteries);

    match node.bring_up(&mut serial) {
        Ok(bring_up) => {
            info!("Bring-up complete");
            if !bring_up.power_monitor_ok {
                warn!("ADC unavailable, power telemetry will read zero");
            }
        }
        Err(e) => {
            // Keep reporting; the failed sensor's fields stay at zero
            error!("Bring-up failed: {}", e);
        }
    }
    if node.bring_up_truncated() {
        warn!("Serial write failed, bring-up messages truncated");
    }
    watchdog.feed();

    // Ticks only start once bring-up is done
    let readiness = READINESS.init(ReadinessSignal::new());
    let (notifier, waiter) = readiness.split();

    interrupt::SWI_IRQ_1.set_priority(Priority::P1);
    let tick_spawner = TICK_EXECUTOR.start(interrupt::SWI_IRQ_1);
    tick_spawner
        .spawn(tasks::tick_task(TickContext::new(notifier, heartbeat)))
        .unwrap();

    info!("Tick task spawned, entering main loop");

    let mut scheduler = ReportScheduler::new(waiter);

    loop {
        watchdog.feed();

        if let Some(result) = scheduler.service(|| node.run_cycle(&mut serial)) {
            match result {
                Ok(stats) => {
                    for fault in stats.faults.iter() {
                        warn!("Read failed: {} ({})", fault.peripheral, fault.error);
                    }
                    trace!(
                        "Report {} sent: battery 1 {}, battery 2 {}",
                        scheduler.cycles_completed(),
                        stats.batteries.battery_1,
                        stats.batteries.battery_2
                    );
                }
                Err(_) => warn!("Serial write failed, report truncated"),
            }
        }

        embassy_futures::yield_now().await;
    }
}
