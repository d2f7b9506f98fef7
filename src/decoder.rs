//! Quadrature transition decoding with detent accumulation.
//!
//! [`QuadratureDecoder`] is a pure state machine over sampled phase levels:
//! it owns no pins and no clock, so it can be fed from a polling loop or
//! directly from a GPIO interrupt handler. The Gray-code contract lives in
//! one constant lookup table, [`TRANSITION_TABLE`], auditable and testable
//! in isolation from any hardware.

/// Direction of one emitted detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Positive rotation (`+1` in the transition table).
    Clockwise,
    /// Negative rotation (`-1` in the transition table).
    CounterClockwise,
}

impl Direction {
    /// Signed step value of this detent: `+1` or `-1`.
    pub fn delta(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Direction per (previous, current) combined-state pair.
///
/// The combined state packs the two phase levels as `(a << 1) | b`; the
/// table index is `(previous << 2) | current`. Valid Gray-code transitions
/// map to `±1`; everything else — no movement, or both bits flipping at
/// once (contact bounce) — maps to `0` and contributes no movement.
const TRANSITION_TABLE: [i8; 16] = [
    0, -1, 1, 0, //  from 00
    1, 0, 0, -1, // from 01
    -1, 0, 0, 1, // from 10
    0, 1, -1, 0, //  from 11
];

/// Quadrature state machine with detent accumulation.
///
/// Raw `±1` steps from the transition table accumulate until a full
/// mechanical detent's worth has been seen in one direction, at which point
/// a single [`Direction`] is emitted and the accumulator resets. A separate
/// position counter tracks every raw step and is never reset by emission.
pub struct QuadratureDecoder {
    /// Previous combined state, `(a << 1) | b`, range 0–3.
    last_state: u8,
    /// Raw steps since the last emitted detent.
    accumulator: i16,
    /// Raw-step counter; wraps on overflow.
    position: i32,
    steps_per_detent: u16,
}

impl QuadratureDecoder {
    /// Create a decoder from the initial phase levels.
    ///
    /// Sample both lines once before constructing so the first
    /// [`update()`](Self::update) call has a valid transition baseline.
    /// `steps_per_detent` is the number of raw quadrature edges per
    /// mechanical click — 4 for common EC11 hardware. Must be nonzero.
    pub fn new(phase_a: bool, phase_b: bool, steps_per_detent: u8) -> Self {
        debug_assert!(steps_per_detent > 0);
        Self {
            last_state: combine(phase_a, phase_b),
            accumulator: 0,
            position: 0,
            steps_per_detent: u16::from(steps_per_detent),
        }
    }

    /// Feed one sample of both phase levels; returns a detent if one
    /// completed on this transition.
    ///
    /// At most one detent is emitted per call even if the hardware moved
    /// further between samples — excess steps stay in the accumulator for
    /// the next detent. The stored previous state is updated on every call,
    /// emission or not.
    pub fn update(&mut self, phase_a: bool, phase_b: bool) -> Option<Direction> {
        let state = combine(phase_a, phase_b);
        let index = usize::from((self.last_state << 2) | state);
        self.last_state = state;

        let step = TRANSITION_TABLE[index];
        if step == 0 {
            return None;
        }

        self.accumulator += i16::from(step);
        self.position = self.position.wrapping_add(i32::from(step));

        if self.accumulator.unsigned_abs() >= self.steps_per_detent {
            let direction = if self.accumulator > 0 {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            self.accumulator = 0;
            return Some(direction);
        }

        None
    }

    /// Raw-step counter: `±1` per valid transition, independent of detent
    /// emission.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Rebase the raw-step counter. Does not touch the partial-detent
    /// accumulator.
    pub fn set_position(&mut self, position: i32) {
        self.position = position;
    }
}

fn combine(phase_a: bool, phase_b: bool) -> u8 {
    (u8::from(phase_a) << 1) | u8::from(phase_b)
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// One full clockwise detent as combined states, starting from 00.
    const CW_CYCLE: [u8; 4] = [0b10, 0b11, 0b01, 0b00];
    /// One full counter-clockwise detent as combined states, starting from 00.
    const CCW_CYCLE: [u8; 4] = [0b01, 0b11, 0b10, 0b00];

    fn feed(decoder: &mut QuadratureDecoder, state: u8) -> Option<Direction> {
        decoder.update(state & 0b10 != 0, state & 0b01 != 0)
    }

    #[test]
    fn clockwise_detent_emits_on_fourth_transition() {
        let mut decoder = QuadratureDecoder::new(false, false, 4);

        let mut emitted = [None; 4];
        for (i, &state) in CW_CYCLE.iter().enumerate() {
            emitted[i] = feed(&mut decoder, state);
        }

        assert_eq!(emitted[0], None);
        assert_eq!(emitted[1], None);
        assert_eq!(emitted[2], None);
        assert_eq!(emitted[3], Some(Direction::Clockwise));
    }

    #[test]
    fn two_full_cycles_emit_on_fourth_and_eighth_transition() {
        let mut decoder = QuadratureDecoder::new(false, false, 4);

        for cycle in 0..2 {
            for (i, &state) in CCW_CYCLE.iter().enumerate() {
                let result = feed(&mut decoder, state);
                if i == 3 {
                    assert_eq!(
                        result,
                        Some(Direction::CounterClockwise),
                        "cycle {} should complete a detent",
                        cycle
                    );
                } else {
                    assert_eq!(result, None, "cycle {} step {} should accumulate", cycle, i);
                }
            }
        }
    }

    #[test]
    fn single_bit_bounce_nets_zero() {
        let mut decoder = QuadratureDecoder::new(false, false, 4);

        // One step forward, bounce straight back, several times over.
        for _ in 0..8 {
            assert_eq!(feed(&mut decoder, 0b10), None);
            assert_eq!(feed(&mut decoder, 0b00), None);
        }
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn double_bit_flip_is_ignored() {
        let mut decoder = QuadratureDecoder::new(false, false, 4);

        // 00 -> 11 flips both phases at once: not a valid Gray-code step.
        assert_eq!(feed(&mut decoder, 0b11), None);
        assert_eq!(decoder.position(), 0);

        // The stored state still advanced to 11, so a valid step from
        // there decodes normally.
        assert_eq!(feed(&mut decoder, 0b01), None);
        assert_eq!(decoder.position(), 1);
    }

    #[test]
    fn reversal_drains_accumulator_before_opposite_detent() {
        let mut decoder = QuadratureDecoder::new(false, false, 4);

        // Two clockwise steps, then reverse.
        assert_eq!(feed(&mut decoder, 0b10), None);
        assert_eq!(feed(&mut decoder, 0b11), None);

        // Four counter-clockwise steps only cancel the +2 and reach -2:
        // no detent yet.
        for &state in &[0b10, 0b00, 0b01, 0b11] {
            assert_eq!(feed(&mut decoder, state), None);
        }

        // Two more complete the counter-clockwise detent.
        assert_eq!(feed(&mut decoder, 0b10), None);
        assert_eq!(feed(&mut decoder, 0b00), Some(Direction::CounterClockwise));
    }

    #[test]
    fn position_counts_raw_steps_across_detents() {
        let mut decoder = QuadratureDecoder::new(false, false, 4);

        for &state in &CW_CYCLE {
            feed(&mut decoder, state);
        }
        assert_eq!(decoder.position(), 4);

        for &state in &CCW_CYCLE {
            feed(&mut decoder, state);
        }
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn set_position_rebases_counter() {
        let mut decoder = QuadratureDecoder::new(false, false, 4);
        decoder.set_position(100);

        for &state in &CW_CYCLE {
            feed(&mut decoder, state);
        }
        assert_eq!(decoder.position(), 104);
    }

    #[test]
    fn smaller_detent_size_emits_more_often() {
        let mut decoder = QuadratureDecoder::new(false, false, 2);

        assert_eq!(feed(&mut decoder, 0b10), None);
        assert_eq!(feed(&mut decoder, 0b11), Some(Direction::Clockwise));
        assert_eq!(feed(&mut decoder, 0b01), None);
        assert_eq!(feed(&mut decoder, 0b00), Some(Direction::Clockwise));
    }

    #[test]
    fn delta_maps_to_signed_steps() {
        assert_eq!(Direction::Clockwise.delta(), 1);
        assert_eq!(Direction::CounterClockwise.delta(), -1);
    }
}
