//! Projection of particle state onto grid coordinates and images.
//!
//! [`ImageProjector`] is implemented for every
//! [`ParticleView`], so any ready lattice can be projected with
//! `lattice.snapshot()` once the trait is in scope.

use runtumble_core::{LatticeError, ParticleFrame, ParticleView};
use runtumble_space::GridShape;

use crate::snapshot::Snapshot;

/// Read-only projections of a [`ParticleView`].
pub trait ImageProjector: ParticleView {
    /// Grid coordinates `(x, y)` of each particle, in particle order.
    ///
    /// Returns `Err(LatticeError::NotInitialized)` before both resets.
    fn positions(&self) -> Result<Vec<(usize, usize)>, LatticeError> {
        let frame = self.frame()?;
        let shape = shape_of(&frame)?;
        Ok(frame
            .particles
            .iter()
            .map(|&site| shape.coords(site as usize))
            .collect())
    }

    /// Fresh `n_x × n_y` image: 0 for empty sites, `orientation + 1` for
    /// occupied ones.
    ///
    /// Returns `Err(LatticeError::NotInitialized)` before both resets.
    fn snapshot(&self) -> Result<Snapshot, LatticeError> {
        let frame = self.frame()?;
        let mut out = Snapshot::empty(frame.n_x, frame.n_y)?;
        paint(&frame, &mut out);
        Ok(out)
    }

    /// Overwrite `out` with the current image, reusing its buffer.
    ///
    /// Returns `Err(LatticeError::InvalidArgument)` if `out` has different
    /// dimensions, `Err(LatticeError::NotInitialized)` before both resets.
    fn snapshot_into(&self, out: &mut Snapshot) -> Result<(), LatticeError> {
        let frame = self.frame()?;
        if out.dimensions() != (frame.n_x, frame.n_y) {
            let (ox, oy) = out.dimensions();
            return Err(LatticeError::invalid_argument(
                "out",
                format!(
                    "snapshot is {ox}x{oy}, lattice is {}x{}",
                    frame.n_x, frame.n_y
                ),
            ));
        }
        paint(&frame, out);
        Ok(())
    }
}

impl<T: ParticleView + ?Sized> ImageProjector for T {}

fn shape_of(frame: &ParticleFrame<'_>) -> Result<GridShape, LatticeError> {
    Ok(GridShape::new(frame.n_x, frame.n_y)?)
}

fn paint(frame: &ParticleFrame<'_>, out: &mut Snapshot) {
    let cells = out.cells_mut();
    cells.fill(0);
    for (&site, &o) in frame.particles.iter().zip(frame.orientation) {
        let cell = &mut cells[site as usize];
        debug_assert_eq!(*cell, 0, "two particles on site {site}");
        *cell = o + 1;
    }
}
