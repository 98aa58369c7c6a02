//! cookloop - Cooking Appliance Controller Firmware
//!
//! Main firmware binary for RP2040-based appliance boards: keypad,
//! door switch, 16x2 LCD, interior light, piezo buzzer and a 16-pixel
//! WS2812 ring around a cook/cool cycle controller.

#![no_std]
#![no_main]

mod board;
mod buzzer;
mod channels;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use cookloop_core::config::{MemoryProgramStore, TimingConfig};
use cookloop_core::{Appliance, Io};
use cookloop_drivers::{GpioDoorSensor, GpioLight, Lcd1602, MatrixKeypad, LCD_ADDRESS};

use crate::board::{BoardTime, RpBoard, SignalRing};
use crate::buzzer::PwmBuzzer;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("cookloop firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup PIO0 for the WS2812 ring (GPIO28)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_28, &program);

    info!("PIO ring initialized");

    // Door switch: HIGH = closed (GPIO27, pull-up)
    let door = GpioDoorSensor::new_active_high(Input::new(p.PIN_27, Pull::Up));

    // Interior light relay (GPIO4)
    let light = GpioLight::new_active_high(Output::new(p.PIN_4, Level::Low));

    // Piezo buzzer on PWM slice 1 channel A (GPIO2)
    let buzzer = PwmBuzzer::new(Pwm::new_output_a(
        p.PWM_SLICE1,
        p.PIN_2,
        PwmConfig::default(),
    ));

    // 4x4 keypad: rows GPIO13/12/11/10, columns GPIO9/8/7/6
    let rows = [
        Output::new(p.PIN_13, Level::High),
        Output::new(p.PIN_12, Level::High),
        Output::new(p.PIN_11, Level::High),
        Output::new(p.PIN_10, Level::High),
    ];
    let cols = [
        Input::new(p.PIN_9, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
    ];
    let keypad = MatrixKeypad::new(rows, cols, Delay);

    info!("GPIO, PWM and keypad initialized");

    // 16x2 LCD on I2C0 (SDA=GPIO16, SCL=GPIO17)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_17, p.PIN_16, I2cConfig::default());
    let mut display = Lcd1602::new(i2c, Delay, LCD_ADDRESS);
    match display.init() {
        Ok(()) => info!("LCD initialized at {=u8:#x}", LCD_ADDRESS),
        Err(e) => warn!("LCD init failed: {:?}", e),
    }

    let io: Io<RpBoard> = Io {
        keypad,
        door,
        display,
        light,
        buzzer,
        ring: SignalRing,
        time: BoardTime::new(),
    };

    // Factory programs are written at boot, then read back
    let store = MemoryProgramStore::with_factory_programs();
    let appliance = Appliance::new(io, store, TimingConfig::default());
    info!("Appliance ready");

    // Spawn tasks
    spawner.spawn(tasks::ring_task(ws2812)).unwrap();
    spawner.spawn(tasks::appliance_task(appliance)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task keeps the PIO common block alive
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
