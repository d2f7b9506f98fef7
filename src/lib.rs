//! Polled driver for EC11-style quadrature rotary encoders with an
//! integrated push button.
//!
//! This crate decodes the two quadrature phase lines of a mechanical rotary
//! encoder into discrete detent events, and the press line into debounced
//! press events, suitable for driving menu or parameter UIs from a plain
//! polling loop.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **[`QuadratureDecoder`] / [`DebouncedButton`]** — Pure transition
//!   functions over sampled levels, with no pin or clock ownership. These
//!   are what an interrupt-driven platform feeds directly from its handlers.
//! - **[`Ec11`]** — Pin-owning, high-level API that samples three
//!   `embedded-hal` input pins on demand and timestamps button edges with
//!   `embassy-time`.
//!
//! # Quick start
//!
//! ```ignore
//! use ec11_driver::{Direction, Ec11};
//!
//! // Construct with any three `embedded-hal` input pins.
//! let mut encoder = Ec11::new(pin_a, pin_b, pin_sw)?;
//!
//! loop {
//!     match encoder.poll_rotation()? {
//!         Some(Direction::Clockwise) => value += 1,
//!         Some(Direction::CounterClockwise) => value -= 1,
//!         None => {}
//!     }
//!     if encoder.poll_button()? {
//!         select(value);
//!     }
//! }
//! ```
//!
//! Both poll methods are non-blocking and return immediately; the caller
//! supplies the cadence. Polling too slowly to observe every electrical
//! transition degrades direction detection but is never an error.
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public types
//!   for embedded logging.
//! - **`task`** — Provide [`input_poll_task`], an async polling loop that
//!   forwards decoded events into an `embassy-sync` channel.

#![no_std]

pub use debounce::DebouncedButton;
pub use decoder::{Direction, QuadratureDecoder};
pub use ec11::{Ec11, Ec11Config};
pub use error::Ec11Error;
#[cfg(feature = "task")]
pub use input_task::{input_poll_task, InputEvent};

mod debounce;
mod decoder;
mod ec11;
mod error;
#[cfg(feature = "task")]
mod input_task;
