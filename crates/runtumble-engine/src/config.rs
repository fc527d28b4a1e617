//! Lattice configuration and validation.
//!
//! [`LatticeConfig`] is the builder-input for constructing a
//! [`Lattice`](crate::Lattice). [`validate()`](LatticeConfig::validate)
//! checks the structural invariants the engine relies on; the lattice
//! constructor calls it before allocating anything.

use runtumble_core::ConfigError;
use runtumble_space::MAX_SITES;

/// Largest supported connectivity: orientations are stored as `u32`.
pub const MAX_CONNECTIVITY: usize = u32::MAX as usize;

/// Sizes and seed of a lattice.
///
/// Immutable once the lattice is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeConfig {
    /// Number of lattice sites.
    pub n_sites: usize,
    /// Number of particles; at most `n_sites`.
    pub n_particles: usize,
    /// Neighbor directions per site. Default for square lattices: 4.
    pub connectivity: usize,
    /// Seed of the lattice's owned random generator.
    pub seed: u64,
}

impl LatticeConfig {
    /// Configuration with a freshly drawn seed.
    ///
    /// The seed is recorded, so a run can be reproduced later from
    /// [`Lattice::seed()`](crate::Lattice::seed).
    pub fn new(n_sites: usize, n_particles: usize, connectivity: usize) -> Self {
        Self {
            n_sites,
            n_particles,
            connectivity,
            seed: rand::random(),
        }
    }

    /// Set the generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if
    /// - `n_sites` is zero or exceeds [`MAX_SITES`]
    /// - `n_particles` is zero or exceeds `n_sites`
    /// - `connectivity` is zero or exceeds [`MAX_CONNECTIVITY`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_sites == 0 {
            return Err(ConfigError::ZeroSites);
        }
        if self.n_sites > MAX_SITES {
            return Err(ConfigError::TooManySites {
                n_sites: self.n_sites,
                max: MAX_SITES,
            });
        }
        if self.n_particles == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if self.n_particles > self.n_sites {
            return Err(ConfigError::TooManyParticles {
                n_particles: self.n_particles,
                n_sites: self.n_sites,
            });
        }
        if self.connectivity == 0 {
            return Err(ConfigError::ZeroConnectivity);
        }
        if self.connectivity > MAX_CONNECTIVITY {
            return Err(ConfigError::ConnectivityTooLarge {
                connectivity: self.connectivity,
                max: MAX_CONNECTIVITY,
            });
        }
        Ok(())
    }
}
