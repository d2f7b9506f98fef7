//! Error types for the encoder driver.

use core::fmt;

/// Errors that can occur when sampling the encoder's input lines.
///
/// Invalid electrical transitions on the quadrature lines are *not* errors —
/// they decode to zero movement. This enum only covers failures of the
/// underlying pin abstraction and configuration mistakes.
#[derive(Debug)]
pub enum Ec11Error<E> {
    /// Underlying digital input error.
    Pin(E),

    /// Invalid configuration (`steps_per_detent` must be nonzero).
    InvalidConfig,
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for Ec11Error<E> {
    fn from(error: E) -> Self {
        Ec11Error::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Ec11Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ec11Error::Pin(e) => write!(f, "pin error: {:?}", e),
            Ec11Error::InvalidConfig => write!(f, "invalid config (steps_per_detent must be nonzero)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Ec11Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Ec11Error::Pin(e) => defmt::write!(f, "pin error: {}", e),
            Ec11Error::InvalidConfig => defmt::write!(f, "invalid config"),
        }
    }
}
