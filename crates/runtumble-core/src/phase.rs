//! Lifecycle tag of a lattice.

use std::fmt;

/// Where a lattice is in its construction lifecycle.
///
/// A lattice starts `Uninitialized`. Building a topology sizes every
/// buffer and moves it to `TopologyBuilt`; once both occupancy and
/// orientations have been reset (or restored) it is `Ready`, and update
/// and projection operations become available.
///
/// ```
/// use runtumble_core::Phase;
///
/// let phase = Phase::TopologyBuilt { occupancy: false, orientation: false }
///     .with_occupancy()
///     .with_orientation();
/// assert_eq!(phase, Phase::Ready);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed, no topology yet. Buffers are unallocated.
    Uninitialized,
    /// Topology built; records which parts of the state have been reset.
    TopologyBuilt {
        /// `reset_occupancy` (or a restore) has run.
        occupancy: bool,
        /// `reset_orientations` (or a restore) has run.
        orientation: bool,
    },
    /// Topology built and state reset: every operation is available.
    Ready,
}

impl Phase {
    /// Whether a topology has been built.
    pub fn has_topology(self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    /// Whether update and projection operations are available.
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Phase after occupancy has been reset. `Uninitialized` is unchanged.
    pub fn with_occupancy(self) -> Self {
        match self {
            Self::TopologyBuilt { orientation, .. } => Self::settle(true, orientation),
            other => other,
        }
    }

    /// Phase after orientations have been reset. `Uninitialized` is unchanged.
    pub fn with_orientation(self) -> Self {
        match self {
            Self::TopologyBuilt { occupancy, .. } => Self::settle(occupancy, true),
            other => other,
        }
    }

    fn settle(occupancy: bool, orientation: bool) -> Self {
        if occupancy && orientation {
            Self::Ready
        } else {
            Self::TopologyBuilt {
                occupancy,
                orientation,
            }
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::TopologyBuilt {
                occupancy,
                orientation,
            } => {
                write!(f, "awaiting reset of")?;
                if !occupancy {
                    write!(f, " occupancy")?;
                }
                if !occupancy && !orientation {
                    write!(f, " and")?;
                }
                if !orientation {
                    write!(f, " orientations")?;
                }
                Ok(())
            }
            Self::Ready => write!(f, "ready"),
        }
    }
}
