//! Benchmark profiles for the runtumble lattice engine.
//!
//! Provides ready-to-step lattices for benchmarks:
//!
//! - [`reference_profile`]: 100x100 grid (10K sites) at 10% density
//! - [`dense_profile`]: 100x100 grid at 90% density, where most moves are
//!   rejected
//! - [`stress_profile`]: 316x316 grid (~100K sites) at 10% density

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use runtumble_core::LatticeError;
use runtumble_engine::{Lattice, LatticeConfig};

/// Tumble probability used by every profile benchmark.
pub const TUMBLE_PROBABILITY: f64 = 0.1;

/// Build a ready square lattice of `n_x × n_y` sites at `density`.
pub fn profile(n_x: usize, n_y: usize, density: f64, seed: u64) -> Result<Lattice, LatticeError> {
    let n_sites = n_x * n_y;
    let n_particles = ((n_sites as f64 * density) as usize).clamp(1, n_sites);
    let mut lattice = Lattice::new(LatticeConfig::new(n_sites, n_particles, 4).seed(seed))?;
    lattice.build_square_topology(n_x, n_y)?;
    lattice.reset_occupancy()?;
    lattice.reset_orientations()?;
    Ok(lattice)
}

/// 100x100 grid, 1 000 particles.
pub fn reference_profile(seed: u64) -> Result<Lattice, LatticeError> {
    profile(100, 100, 0.1, seed)
}

/// 100x100 grid, 9 000 particles.
pub fn dense_profile(seed: u64) -> Result<Lattice, LatticeError> {
    profile(100, 100, 0.9, seed)
}

/// 316x316 grid, ~10K particles.
pub fn stress_profile(seed: u64) -> Result<Lattice, LatticeError> {
    profile(316, 316, 0.1, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_ready() {
        for lattice in [
            reference_profile(42).unwrap(),
            dense_profile(42).unwrap(),
            stress_profile(42).unwrap(),
        ] {
            assert!(lattice.phase().is_ready());
            assert_eq!(lattice.check_invariants(), Ok(()));
        }
    }

    #[test]
    fn profile_particle_counts() {
        assert_eq!(reference_profile(1).unwrap().particle_count(), 1_000);
        assert_eq!(dense_profile(1).unwrap().particle_count(), 9_000);
        assert_eq!(profile(2, 2, 0.0, 1).unwrap().particle_count(), 1);
    }

    #[test]
    fn profiles_are_deterministic() {
        let a = reference_profile(7).unwrap();
        let b = reference_profile(7).unwrap();
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.orientations(), b.orientations());
    }
}
