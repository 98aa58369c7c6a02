//! Appliance loop task
//!
//! Runs the control loop forever. Each pass may block for the fixed
//! message holds and the finish chime; between passes the task yields
//! so the ring task can push the latest frame.

use defmt::*;
use embassy_time::Timer;

use cookloop_core::config::MemoryProgramStore;
use cookloop_core::Appliance;

use crate::board::RpBoard;

/// Pause between loop passes (ms)
const LOOP_PERIOD_MS: u64 = 10;

#[embassy_executor::task]
pub async fn appliance_task(mut appliance: Appliance<RpBoard, MemoryProgramStore>) {
    info!("Appliance task started");

    loop {
        appliance.tick();
        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}
