//! Report tick
//!
//! Runs on the interrupt-priority executor. Each period it only toggles
//! the heartbeat LED and sets the readiness signal.

use defmt::*;
use embassy_time::{Duration, Ticker};

use rfcx_core::config::TICK_PERIOD_MS;
use rfcx_core::scheduler::TickContext;
use rfcx_hal_rp2040::gpio::GpioOutput;

/// Tick task - marks a report as due once per period
#[embassy_executor::task]
pub async fn tick_task(mut ctx: TickContext<'static, GpioOutput<'static>>) {
    info!("Tick task started ({} ms)", TICK_PERIOD_MS);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));

    loop {
        ticker.next().await;
        ctx.on_tick();
    }
}
