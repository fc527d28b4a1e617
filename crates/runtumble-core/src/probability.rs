//! Validated tumble probability.

use crate::error::LatticeError;
use std::fmt;

/// Probability that a particle tumbles during one elementary update.
///
/// Guaranteed finite and within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct TumbleProbability(f64);

impl TumbleProbability {
    /// Never tumble: particles run straight forever.
    pub const NEVER: Self = Self(0.0);
    /// Tumble on every update.
    pub const ALWAYS: Self = Self(1.0);

    /// Validate `p`.
    ///
    /// Returns `Err(LatticeError::InvalidArgument)` for NaN or values
    /// outside `[0, 1]`.
    pub fn new(p: f64) -> Result<Self, LatticeError> {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return Err(LatticeError::invalid_argument(
                "tumble_probability",
                format!("{p} is outside [0, 1]"),
            ));
        }
        Ok(Self(p))
    }

    /// The raw probability.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TumbleProbability {
    type Error = LatticeError;

    fn try_from(p: f64) -> Result<Self, Self::Error> {
        Self::new(p)
    }
}

impl fmt::Display for TumbleProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
