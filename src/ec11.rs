//! High-level pin-owning interface for EC11-style encoders.
//!
//! [`Ec11`] wraps the pure [`QuadratureDecoder`] and [`DebouncedButton`]
//! units with pin sampling, button polarity mapping, and the monotonic
//! clock, exposing the two poll operations a control loop calls once per
//! tick.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::debounce::DebouncedButton;
use crate::decoder::{Direction, QuadratureDecoder};
use crate::error::Ec11Error;

/// Tuning parameters for an [`Ec11`] instance.
///
/// The defaults match the common EC11 hardware this driver was written
/// against; different encoder models vary, so both the detent size and the
/// debounce window are configurable.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ec11Config {
    /// Raw quadrature edges per mechanical detent. Must be nonzero.
    pub steps_per_detent: u8,
    /// Minimum time between accepted press edges.
    pub debounce: Duration,
    /// Set when the press line reads low while pressed (pull-up wiring).
    /// The default matches a pull-down, active-high press line.
    pub button_active_low: bool,
}

impl Default for Ec11Config {
    fn default() -> Self {
        Self {
            steps_per_detent: 4,
            debounce: Duration::from_millis(50),
            button_active_low: false,
        }
    }
}

/// Polled driver for an EC11-style rotary encoder with push button.
///
/// Owns the two quadrature phase pins and the press pin, and converts their
/// raw levels into detent and press events. Both poll methods are
/// non-blocking; the caller drives them at a steady cadence from a single
/// control loop.
///
/// # Example
///
/// ```ignore
/// use ec11_driver::{Ec11, Ec11Config};
///
/// // `pin_a`, `pin_b`, `pin_sw` are any `embedded-hal` input pins.
/// let mut encoder = Ec11::new(pin_a, pin_b, pin_sw)?;
///
/// if let Some(direction) = encoder.poll_rotation()? {
///     cursor += direction.delta();
/// }
/// if encoder.poll_button()? {
///     activate(cursor);
/// }
/// ```
pub struct Ec11<A, B, SW> {
    pin_a: A,
    pin_b: B,
    pin_sw: SW,
    decoder: QuadratureDecoder,
    button: DebouncedButton,
    button_active_low: bool,
}

impl<A, B, SW, E> Ec11<A, B, SW>
where
    A: InputPin<Error = E>,
    B: InputPin<Error = E>,
    SW: InputPin<Error = E>,
{
    /// Create a driver with the default configuration
    /// (4 steps per detent, 50 ms debounce, active-high button).
    ///
    /// # Arguments
    /// * `pin_a`, `pin_b` — quadrature phase inputs (takes ownership)
    /// * `pin_sw` — press-line input
    ///
    /// # Errors
    /// * [`Ec11Error::Pin`] if sampling the initial levels fails
    pub fn new(pin_a: A, pin_b: B, pin_sw: SW) -> Result<Self, Ec11Error<E>> {
        Self::with_config(pin_a, pin_b, pin_sw, Ec11Config::default())
    }

    /// Create a driver with an explicit configuration.
    ///
    /// All three lines are sampled immediately so the first poll has a
    /// valid baseline — an encoder resting between detents or a button held
    /// at startup does not produce a phantom event.
    ///
    /// # Errors
    /// * [`Ec11Error::InvalidConfig`] if `config.steps_per_detent` is zero
    /// * [`Ec11Error::Pin`] if sampling the initial levels fails
    pub fn with_config(
        mut pin_a: A,
        mut pin_b: B,
        mut pin_sw: SW,
        config: Ec11Config,
    ) -> Result<Self, Ec11Error<E>> {
        if config.steps_per_detent == 0 {
            return Err(Ec11Error::InvalidConfig);
        }

        let a = pin_a.is_high()?;
        let b = pin_b.is_high()?;
        let sw = pin_sw.is_high()?;
        let pressed = sw != config.button_active_low;

        Ok(Self {
            pin_a,
            pin_b,
            pin_sw,
            decoder: QuadratureDecoder::new(a, b, config.steps_per_detent),
            button: DebouncedButton::new(pressed, config.debounce),
            button_active_low: config.button_active_low,
        })
    }

    // -----------------------------------------------------------------------
    // Poll operations
    // -----------------------------------------------------------------------

    /// Sample both phase lines and decode one transition.
    ///
    /// Returns at most one detent per call; raw movement beyond one detent
    /// is retained for the next call. Invalid transitions (contact bounce)
    /// decode to no movement, never to an error.
    ///
    /// # Errors
    /// * [`Ec11Error::Pin`] on a pin read failure
    pub fn poll_rotation(&mut self) -> Result<Option<Direction>, Ec11Error<E>> {
        let a = self.pin_a.is_high()?;
        let b = self.pin_b.is_high()?;
        Ok(self.decoder.update(a, b))
    }

    /// Sample the press line and detect one debounced press edge.
    ///
    /// Returns true at most once per physical press: on the
    /// released-to-pressed transition, outside the debounce window of the
    /// previously accepted press.
    ///
    /// # Errors
    /// * [`Ec11Error::Pin`] on a pin read failure
    pub fn poll_button(&mut self) -> Result<bool, Ec11Error<E>> {
        let sw = self.pin_sw.is_high()?;
        let pressed = sw != self.button_active_low;
        Ok(self.button.update(pressed, Instant::now()))
    }

    // -----------------------------------------------------------------------
    // State accessors
    // -----------------------------------------------------------------------

    /// Raw-step position counter: `±1` per valid quadrature transition
    /// (4 per detent with the default configuration). Never reset by
    /// normal operation; wraps on overflow.
    pub fn position(&self) -> i32 {
        self.decoder.position()
    }

    /// Rebase the position counter, typically to zero.
    pub fn set_position(&mut self, position: i32) {
        self.decoder.set_position(position);
    }

    /// Most recently sampled logical button level (true = pressed).
    pub fn is_pressed(&self) -> bool {
        self.button.is_held()
    }

    /// Consume the driver and return the underlying pins.
    pub fn release(self) -> (A, B, SW) {
        (self.pin_a, self.pin_b, self.pin_sw)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
