//! Simple input example
//!
//! Demonstrates basic usage of the ec11-driver crate on the Raspberry Pi
//! Pico 2. Polls an EC11 rotary encoder at 1 kHz and logs detents, button
//! presses, and the running position via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | ENC A     | GP10       | Pull-up enabled              |
//! | ENC B     | GP11       | Pull-up enabled              |
//! | ENC SW    | GP12       | Active-low, pull-up enabled  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use ec11_driver::{Direction, Ec11, Ec11Config};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder inputs (module has pull-ups on all three lines) ---
    let pin_a = Input::new(p.PIN_10, Pull::Up);
    let pin_b = Input::new(p.PIN_11, Pull::Up);
    let pin_sw = Input::new(p.PIN_12, Pull::Up);

    let config = Ec11Config {
        button_active_low: true,
        ..Ec11Config::default()
    };
    let mut encoder = match Ec11::with_config(pin_a, pin_b, pin_sw, config) {
        Ok(encoder) => encoder,
        Err(e) => {
            error!("Encoder init failed: {}", e);
            return;
        }
    };

    info!("Polling encoder on GP10/GP11/GP12");

    let mut ticker = Ticker::every(Duration::from_millis(1));
    loop {
        ticker.next().await;

        match encoder.poll_rotation() {
            Ok(Some(Direction::Clockwise)) => {
                info!("CW  detent, position {}", encoder.position());
            }
            Ok(Some(Direction::CounterClockwise)) => {
                info!("CCW detent, position {}", encoder.position());
            }
            Ok(None) => {}
            Err(e) => error!("Rotation poll failed: {}", e),
        }

        match encoder.poll_button() {
            Ok(true) => info!("Button pressed"),
            Ok(false) => {}
            Err(e) => error!("Button poll failed: {}", e),
        }
    }
}
