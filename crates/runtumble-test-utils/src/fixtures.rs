//! Reusable lattice fixtures.
//!
//! - [`ready_square`]: periodic square lattice, topology built and state reset.
//! - [`blocked_pair`]: two sites, degree 1, both occupied: nothing can move.
//! - [`Histogram`]: category counter for distribution tests.

use runtumble_engine::{Lattice, LatticeConfig};
use runtumble_space::{GridShape, NeighborTable};

/// A ready `n_x × n_y` square lattice with connectivity 4.
///
/// Panics on invalid sizes; fixtures are for tests only.
pub fn ready_square(n_x: usize, n_y: usize, n_particles: usize, seed: u64) -> Lattice {
    let config = LatticeConfig::new(n_x * n_y, n_particles, 4).seed(seed);
    let mut lattice = Lattice::new(config).expect("valid fixture config");
    lattice
        .build_square_topology(n_x, n_y)
        .expect("valid fixture topology");
    lattice.reset_occupancy().expect("topology built");
    lattice.reset_orientations().expect("topology built");
    lattice
}

/// Two sites, connectivity 1, each site's only neighbor is the other one.
///
/// Both sites are occupied, so every move is rejected by exclusion while
/// tumbles still happen.
pub fn blocked_pair(seed: u64) -> Lattice {
    let mut lattice =
        Lattice::new(LatticeConfig::new(2, 2, 1).seed(seed)).expect("valid fixture config");
    let shape = GridShape::new(1, 2).expect("non-zero shape");
    let table = NeighborTable::from_fn(2, 1, |site, _| 1 - site).expect("targets in range");
    lattice
        .build_topology(shape, table)
        .expect("table matches config");
    lattice.reset_occupancy().expect("topology built");
    lattice.reset_orientations().expect("topology built");
    lattice
}

/// Counts of observations per category `0..len`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    pub fn new(len: usize) -> Self {
        Self {
            counts: vec![0; len],
        }
    }

    /// Record one observation. Panics if `category >= len`.
    pub fn record(&mut self, category: usize) {
        self.counts[category] += 1;
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
