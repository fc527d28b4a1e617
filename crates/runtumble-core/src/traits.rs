//! Read-only access to particle state.

use crate::error::LatticeError;

/// Borrowed view of a lattice's particle state.
///
/// `particles[i]` is the row-major site index (`x * n_y + y`) of particle
/// `i` and `orientation[i]` its heading in `[0, connectivity)`.
#[derive(Clone, Copy, Debug)]
pub struct ParticleFrame<'a> {
    /// Grid extent along x.
    pub n_x: usize,
    /// Grid extent along y.
    pub n_y: usize,
    /// Number of orientations per site.
    pub connectivity: usize,
    /// Site held by each particle.
    pub particles: &'a [u32],
    /// Heading of each particle.
    pub orientation: &'a [u32],
}

/// Read-only access to particle state for projection.
///
/// This trait decouples snapshot extraction from the lattice engine:
/// projectors read through `ParticleView` rather than the concrete
/// lattice type.
pub trait ParticleView {
    /// Borrow the current particle state.
    ///
    /// Returns `Err(LatticeError::NotInitialized)` unless the state has
    /// been fully reset.
    fn frame(&self) -> Result<ParticleFrame<'_>, LatticeError>;
}
