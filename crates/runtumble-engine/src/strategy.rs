//! Run-time choice of update strategy.

use std::fmt;
use std::str::FromStr;

use runtumble_core::LatticeError;

use crate::lattice::Lattice;

/// How [`Lattice::advance`] applies the elementary update rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Repeated [`Lattice::step`] calls. `count` = elementary updates.
    Reference,
    /// One [`Lattice::bulk_step`] call. `count` = elementary updates.
    #[default]
    Batched,
    /// One [`Lattice::sweep`] call. `count` = sweeps.
    Sweep,
}

impl Strategy {
    /// All strategies.
    pub const ALL: [Self; 3] = [Self::Reference, Self::Batched, Self::Sweep];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Batched => "batched",
            Self::Sweep => "sweep",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| {
                LatticeError::invalid_argument(
                    "strategy",
                    format!("unknown strategy '{s}', expected reference, batched or sweep"),
                )
            })
    }
}

impl Lattice {
    /// Advance the lattice with the chosen strategy.
    ///
    /// `count` is the number of elementary updates for
    /// [`Strategy::Reference`] and [`Strategy::Batched`], and the number of
    /// sweeps for [`Strategy::Sweep`].
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `count` is zero or `tumble_probability` is
    /// invalid; `NotInitialized` unless the lattice is ready.
    pub fn advance(
        &mut self,
        strategy: Strategy,
        tumble_probability: f64,
        count: u64,
    ) -> Result<(), LatticeError> {
        match strategy {
            Strategy::Reference => {
                if count == 0 {
                    return Err(LatticeError::invalid_argument("count", "must be at least 1"));
                }
                for _ in 0..count {
                    self.step(tumble_probability)?;
                }
                Ok(())
            }
            Strategy::Batched => self.bulk_step(tumble_probability, count),
            Strategy::Sweep => self.sweep(tumble_probability, count),
        }
    }
}
