//! LED ring writer task
//!
//! Waits for frames from the appliance task and clocks them out to the
//! WS2812 ring through PIO0.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use cookloop_core::traits::RING_PIXELS;

use crate::channels::RING_FRAME;

#[embassy_executor::task]
pub async fn ring_task(mut ws2812: PioWs2812<'static, PIO0, 0, RING_PIXELS>) {
    info!("Ring task started");

    let mut data = [RGB8::default(); RING_PIXELS];
    ws2812.write(&data).await;

    loop {
        let frame = RING_FRAME.wait().await;
        for (led, pixel) in data.iter_mut().zip(frame.iter()) {
            *led = RGB8::new(pixel.r, pixel.g, pixel.b);
        }
        ws2812.write(&data).await;
    }
}
