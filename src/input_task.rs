//! Input polling task.
//!
//! Contains [`InputEvent`] and the [`input_poll_task`] async function that
//! drives an [`Ec11`] at a fixed cadence and forwards decoded events into
//! an `embassy-sync` channel for the rest of the application to consume.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Ticker};
use embedded_hal::digital::InputPin;

use crate::decoder::Direction;
use crate::ec11::Ec11;

/// A decoded input event, as delivered by [`input_poll_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// One detent of rotation.
    Rotated(Direction),
    /// One debounced button press.
    Pressed,
}

/// Fixed-cadence encoder polling loop.
///
/// This is a regular `async fn` — **not** an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function,
/// since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn encoder_task(
///     encoder: Ec11<PinA, PinB, PinSw>,
///     events: Sender<'static, CriticalSectionRawMutex, InputEvent, 8>,
/// ) -> ! {
///     input_poll_task(encoder, events, Duration::from_millis(1)).await
/// }
/// ```
///
/// # Control flow
///
/// Each tick of `poll_period`:
///
/// 1. Poll rotation; a completed detent becomes [`InputEvent::Rotated`].
/// 2. Poll the button; an accepted press becomes [`InputEvent::Pressed`].
/// 3. Events are `try_send`-ed: when the channel is full the event is
///    dropped (and logged), never awaited, so a slow consumer cannot stall
///    the polling cadence the decoder depends on.
///
/// # Errors
///
/// Pin read failures are logged and the loop continues with the next tick;
/// there is no fatal condition originating here.
pub async fn input_poll_task<A, B, SW, E, M, const N: usize>(
    mut encoder: Ec11<A, B, SW>,
    events: Sender<'static, M, InputEvent, N>,
    poll_period: Duration,
) -> !
where
    A: InputPin<Error = E>,
    B: InputPin<Error = E>,
    SW: InputPin<Error = E>,
    M: RawMutex,
{
    let mut ticker = Ticker::every(poll_period);

    loop {
        ticker.next().await;

        match encoder.poll_rotation() {
            Ok(Some(direction)) => {
                if events.try_send(InputEvent::Rotated(direction)).is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("input channel full, dropping rotation event");
                }
            }
            Ok(None) => {}
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("rotation poll failed");
            }
        }

        match encoder.poll_button() {
            Ok(true) => {
                if events.try_send(InputEvent::Pressed).is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("input channel full, dropping press event");
                }
            }
            Ok(false) => {}
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("button poll failed");
            }
        }
    }
}
