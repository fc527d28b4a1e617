//! Error types for the runtumble lattice simulator.
//!
//! Every failure in the core is synchronous and fatal to the call that
//! produced it. Configuration problems surface while building a lattice;
//! the remaining variants signal caller misuse or, for
//! [`LatticeError::InvariantViolation`], an algorithm bug.

use crate::phase::Phase;
use std::error::Error;
use std::fmt;

/// Structural problems detected while configuring a lattice or building
/// its topology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The lattice was configured with zero sites.
    ZeroSites,
    /// Site indices are stored as `u32`; the lattice is too large.
    TooManySites {
        /// Requested site count (saturated on overflow).
        n_sites: usize,
        /// Largest supported site count.
        max: usize,
    },
    /// The lattice was configured with zero particles.
    ZeroParticles,
    /// Connectivity must be at least 1.
    ZeroConnectivity,
    /// Orientations are stored as `u32`; the connectivity is too large.
    ConnectivityTooLarge {
        /// Requested connectivity.
        connectivity: usize,
        /// Largest supported connectivity.
        max: usize,
    },
    /// More particles than sites: exclusion cannot be satisfied.
    TooManyParticles {
        /// Requested particle count.
        n_particles: usize,
        /// Available sites.
        n_sites: usize,
    },
    /// A grid dimension is zero.
    ZeroDimension {
        /// Axis name (`"n_x"` or `"n_y"`).
        axis: &'static str,
    },
    /// `n_x * n_y` does not equal the configured site count.
    DimensionMismatch {
        /// Grid extent along x.
        n_x: usize,
        /// Grid extent along y.
        n_y: usize,
        /// Configured site count.
        n_sites: usize,
    },
    /// The topology's degree differs from the configured connectivity.
    ConnectivityMismatch {
        /// Connectivity the lattice was configured with.
        expected: usize,
        /// Connectivity of the offered topology.
        found: usize,
    },
    /// A neighbor table entry points outside `[0, n_sites)`.
    NeighborOutOfRange {
        /// Source site.
        site: usize,
        /// Orientation (table column).
        orientation: usize,
        /// Offending target.
        target: usize,
        /// Number of sites in the table.
        n_sites: usize,
    },
    /// A flat neighbor buffer has the wrong length for its shape.
    TableSizeMismatch {
        /// `n_sites * connectivity`.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },
    /// The lattice already has a topology; it is immutable once built.
    TopologyAlreadyBuilt,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSites => write!(f, "lattice must have at least one site"),
            Self::TooManySites { n_sites, max } => {
                write!(f, "{n_sites} sites exceed the supported maximum of {max}")
            }
            Self::ZeroParticles => write!(f, "lattice must hold at least one particle"),
            Self::ZeroConnectivity => write!(f, "connectivity must be at least 1"),
            Self::ConnectivityTooLarge { connectivity, max } => write!(
                f,
                "connectivity {connectivity} exceeds the supported maximum of {max}"
            ),
            Self::TooManyParticles {
                n_particles,
                n_sites,
            } => write!(
                f,
                "{n_particles} particles do not fit on {n_sites} sites"
            ),
            Self::ZeroDimension { axis } => write!(f, "grid dimension {axis} must be non-zero"),
            Self::DimensionMismatch { n_x, n_y, n_sites } => write!(
                f,
                "grid {n_x}x{n_y} has {} sites, lattice has {n_sites}",
                n_x.saturating_mul(*n_y)
            ),
            Self::ConnectivityMismatch { expected, found } => write!(
                f,
                "topology has connectivity {found}, lattice expects {expected}"
            ),
            Self::NeighborOutOfRange {
                site,
                orientation,
                target,
                n_sites,
            } => write!(
                f,
                "neighbor of site {site} along orientation {orientation} is {target}, \
                 outside [0, {n_sites})"
            ),
            Self::TableSizeMismatch { expected, found } => write!(
                f,
                "neighbor buffer holds {found} entries, expected {expected}"
            ),
            Self::TopologyAlreadyBuilt => write!(f, "topology has already been built"),
        }
    }
}

impl Error for ConfigError {}

/// Errors returned by lattice operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Inconsistent configuration; the simulation never starts.
    Configuration(ConfigError),
    /// The operation requires a lifecycle phase the lattice has not reached.
    NotInitialized {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Phase the lattice was in.
        phase: Phase,
    },
    /// An argument is outside its valid domain.
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
    /// Occupancy and particle list disagree. Unreachable unless the update
    /// algorithm is broken.
    InvariantViolation {
        /// Description of the first mismatch found.
        reason: String,
    },
}

impl LatticeError {
    /// Shorthand for [`LatticeError::InvalidArgument`].
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "configuration error: {e}"),
            Self::NotInitialized { operation, phase } => {
                write!(f, "{operation} is not allowed while lattice is {phase}")
            }
            Self::InvalidArgument { name, reason } => {
                write!(f, "invalid argument '{name}': {reason}")
            }
            Self::InvariantViolation { reason } => write!(f, "invariant violated: {reason}"),
        }
    }
}

impl Error for LatticeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for LatticeError {
    fn from(e: ConfigError) -> Self {
        Self::Configuration(e)
    }
}
