//! Inter-task communication channels
//!
//! The appliance task owns all appliance state; the only thing it hands
//! to another task is the finished LED ring frame.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use cookloop_core::traits::RingFrame;

/// Latest ring frame (updated by the appliance task, drained by the ring task)
pub static RING_FRAME: Signal<CriticalSectionRawMutex, RingFrame> = Signal::new();
