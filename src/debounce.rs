//! Press-line debouncing.
//!
//! [`DebouncedButton`] is the button-side counterpart of
//! [`QuadratureDecoder`](crate::QuadratureDecoder): a pure transition
//! function over sampled levels. The caller supplies the monotonic `now`
//! with each sample, so the unit needs no time driver and works identically
//! from a polling loop or an interrupt handler.

use embassy_time::{Duration, Instant};

/// Rising-edge press detector with a debounce window.
///
/// A press is reported on the transition from released to pressed, and only
/// when the time since the last *accepted* press strictly exceeds the
/// configured window. Edges inside the window are suppressed; a held press
/// reports exactly once until released and re-pressed.
pub struct DebouncedButton {
    /// Most recently observed logical pressed level.
    level: bool,
    /// Time of the last accepted press edge. `None` before the first
    /// acceptance, so the first edge always passes.
    last_press: Option<Instant>,
    window: Duration,
}

impl DebouncedButton {
    /// Create a debouncer from the initial logical level.
    ///
    /// Sample the line once before constructing so a button already held at
    /// startup does not register as an edge.
    pub fn new(initial_level: bool, window: Duration) -> Self {
        Self {
            level: initial_level,
            last_press: None,
            window,
        }
    }

    /// Feed one sample of the logical pressed level; returns true when an
    /// accepted press edge occurred on this sample.
    ///
    /// The stored level is updated on every call. The press timestamp is
    /// updated only on acceptance, so a burst of bouncing edges cannot keep
    /// pushing the window forward.
    pub fn update(&mut self, level: bool, now: Instant) -> bool {
        let rising = level && !self.level;
        self.level = level;

        if !rising {
            return false;
        }

        match self.last_press {
            Some(accepted) if now.duration_since(accepted) <= self.window => false,
            _ => {
                self.last_press = Some(now);
                true
            }
        }
    }

    /// Most recently observed logical pressed level.
    pub fn is_held(&self) -> bool {
        self.level
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(50);

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn first_press_is_accepted() {
        let mut button = DebouncedButton::new(false, WINDOW);
        assert!(button.update(true, at(0)));
    }

    #[test]
    fn repress_within_window_is_suppressed() {
        let mut button = DebouncedButton::new(false, WINDOW);

        assert!(button.update(true, at(0)));
        assert!(!button.update(false, at(10)));
        // 30 ms after the accepted press: inside the 50 ms window.
        assert!(!button.update(true, at(30)));
        assert!(!button.update(false, at(40)));
        // 80 ms after the accepted press: outside the window.
        assert!(button.update(true, at(80)));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let mut button = DebouncedButton::new(false, WINDOW);

        assert!(button.update(true, at(0)));
        assert!(!button.update(false, at(10)));
        // Exactly the window width does not exceed it.
        assert!(!button.update(true, at(50)));
        assert!(!button.update(false, at(55)));
        assert!(button.update(true, at(51 + 50)));
    }

    #[test]
    fn suppressed_edge_does_not_extend_window() {
        let mut button = DebouncedButton::new(false, WINDOW);

        assert!(button.update(true, at(0)));
        assert!(!button.update(false, at(10)));
        // Suppressed edge at 30 ms must not move the window start.
        assert!(!button.update(true, at(30)));
        assert!(!button.update(false, at(35)));
        // 60 ms is past the original press, even though it is only 30 ms
        // past the suppressed edge.
        assert!(button.update(true, at(60)));
    }

    #[test]
    fn held_press_reports_once() {
        let mut button = DebouncedButton::new(false, WINDOW);

        assert!(button.update(true, at(0)));
        for ms in 1..200 {
            assert!(!button.update(true, at(ms)));
        }
        assert!(button.is_held());

        assert!(!button.update(false, at(300)));
        assert!(!button.is_held());
        assert!(button.update(true, at(301)));
    }

    #[test]
    fn held_at_startup_is_not_an_edge() {
        let mut button = DebouncedButton::new(true, WINDOW);

        assert!(!button.update(true, at(0)));
        assert!(!button.update(false, at(10)));
        assert!(button.update(true, at(100)));
    }

    #[test]
    fn zero_window_accepts_every_edge() {
        let mut button = DebouncedButton::new(false, Duration::from_millis(0));

        assert!(button.update(true, at(0)));
        assert!(!button.update(false, at(1)));
        assert!(button.update(true, at(2)));
    }
}
