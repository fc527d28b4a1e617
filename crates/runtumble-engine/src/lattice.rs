//! Lattice state: occupancy, particle sites, orientations.
//!
//! [`Lattice`] owns every buffer of a simulation run and its random
//! generator. The lifecycle is explicit (see [`Phase`]):
//!
//! 1. [`Lattice::new`] validates the configuration. No buffers exist yet.
//! 2. [`build_square_topology`](Lattice::build_square_topology) (or
//!    [`build_topology`](Lattice::build_topology)) installs the neighbor
//!    table and sizes every buffer once.
//! 3. [`reset_occupancy`](Lattice::reset_occupancy) and
//!    [`reset_orientations`](Lattice::reset_orientations) (or
//!    [`restore`](Lattice::restore)) fill the state; the lattice is then
//!    ready for updates and projection.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`; the borrow checker rules out
//! aliasing of the buffers. Nothing is resized after step 2.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use runtumble_core::{ConfigError, LatticeError, ParticleFrame, ParticleView, Phase};
use runtumble_space::{GridShape, NeighborTable};
use tracing::debug;

use crate::config::LatticeConfig;
use crate::metrics::UpdateMetrics;

/// Grid shape and neighbor table, installed together.
#[derive(Clone, Debug)]
pub(crate) struct Topology {
    pub(crate) shape: GridShape,
    pub(crate) table: NeighborTable,
}

/// A lattice of sites holding run-and-tumble particles under exclusion.
///
/// # Example
///
/// ```
/// use runtumble_engine::{Lattice, LatticeConfig};
///
/// let mut lattice = Lattice::new(LatticeConfig::new(16, 4, 4).seed(1)).unwrap();
/// lattice.build_square_topology(4, 4).unwrap();
/// lattice.reset_occupancy().unwrap();
/// lattice.reset_orientations().unwrap();
///
/// lattice.bulk_step(0.1, 1000).unwrap();
/// assert_eq!(lattice.particles().len(), 4);
/// assert_eq!(lattice.metrics().attempted, 1000);
/// ```
pub struct Lattice {
    config: LatticeConfig,
    phase: Phase,
    pub(crate) topology: Option<Topology>,
    pub(crate) occupancy: Vec<u8>,
    pub(crate) particles: Vec<u32>,
    pub(crate) orientation: Vec<u32>,
    /// Visiting order scratch for sweeps.
    pub(crate) order: Vec<u32>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) metrics: UpdateMetrics,
}

impl Lattice {
    /// Create an uninitialized lattice from a validated configuration.
    pub fn new(config: LatticeConfig) -> Result<Self, LatticeError> {
        config.validate()?;
        debug!(
            n_sites = config.n_sites,
            n_particles = config.n_particles,
            connectivity = config.connectivity,
            seed = config.seed,
            "lattice created"
        );
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            phase: Phase::Uninitialized,
            topology: None,
            occupancy: Vec::new(),
            particles: Vec::new(),
            orientation: Vec::new(),
            order: Vec::new(),
            metrics: UpdateMetrics::default(),
        })
    }

    /// Shorthand for [`Lattice::new`] with a freshly drawn seed.
    pub fn create(
        n_sites: usize,
        n_particles: usize,
        connectivity: usize,
    ) -> Result<Self, LatticeError> {
        Self::new(LatticeConfig::new(n_sites, n_particles, connectivity))
    }

    // ── Topology ────────────────────────────────────────────────

    /// Install the periodic 4-connected square topology of an
    /// `n_x × n_y` grid.
    ///
    /// # Errors
    ///
    /// `Configuration` if a dimension is zero, `n_x * n_y != n_sites`,
    /// connectivity is not 4, or a topology already exists.
    pub fn build_square_topology(&mut self, n_x: usize, n_y: usize) -> Result<(), LatticeError> {
        let shape = GridShape::new(n_x, n_y)?;
        self.check_shape(&shape)?;
        let table = NeighborTable::square(&shape);
        self.build_topology(shape, table)
    }

    /// Install an arbitrary topology: a grid shape for projection and a
    /// neighbor table for movement.
    ///
    /// # Errors
    ///
    /// `Configuration` if the shape or table size differs from `n_sites`,
    /// the table degree differs from the configured connectivity, or a
    /// topology already exists.
    pub fn build_topology(
        &mut self,
        shape: GridShape,
        table: NeighborTable,
    ) -> Result<(), LatticeError> {
        self.check_shape(&shape)?;
        if table.site_count() != self.config.n_sites {
            return Err(ConfigError::TableSizeMismatch {
                expected: self.config.n_sites * self.config.connectivity,
                found: table.as_flat().len(),
            }
            .into());
        }
        if table.connectivity() != self.config.connectivity {
            return Err(ConfigError::ConnectivityMismatch {
                expected: self.config.connectivity,
                found: table.connectivity(),
            }
            .into());
        }

        let n_particles = self.config.n_particles;
        self.occupancy = vec![0; self.config.n_sites];
        self.particles = Vec::with_capacity(n_particles);
        self.orientation = vec![0; n_particles];
        self.order = (0..n_particles as u32).collect();
        self.topology = Some(Topology { shape, table });
        self.phase = Phase::TopologyBuilt {
            occupancy: false,
            orientation: false,
        };
        debug!(
            n_x = shape.n_x(),
            n_y = shape.n_y(),
            connectivity = self.config.connectivity,
            "topology built"
        );
        Ok(())
    }

    fn check_shape(&self, shape: &GridShape) -> Result<(), ConfigError> {
        if self.topology.is_some() {
            return Err(ConfigError::TopologyAlreadyBuilt);
        }
        let (n_x, n_y) = shape.dimensions();
        if shape.site_count() != self.config.n_sites {
            return Err(ConfigError::DimensionMismatch {
                n_x,
                n_y,
                n_sites: self.config.n_sites,
            });
        }
        Ok(())
    }

    // ── State reset ─────────────────────────────────────────────

    /// Place `n_particles` particles on distinct sites drawn uniformly
    /// without replacement. Particle `i` is the `i`-th occupied site in
    /// ascending order.
    pub fn reset_occupancy(&mut self) -> Result<(), LatticeError> {
        self.require_topology("reset_occupancy")?;
        let mut sites =
            rand::seq::index::sample(&mut self.rng, self.config.n_sites, self.config.n_particles)
                .into_vec();
        sites.sort_unstable();

        self.occupancy.fill(0);
        self.particles.clear();
        for site in sites {
            self.occupancy[site] = 1;
            self.particles.push(site as u32);
        }
        self.phase = self.phase.with_occupancy();
        debug!(n_particles = self.particles.len(), phase = %self.phase, "occupancy reset");
        Ok(())
    }

    /// Draw every orientation independently and uniformly from
    /// `[0, connectivity)`.
    pub fn reset_orientations(&mut self) -> Result<(), LatticeError> {
        use rand::Rng;

        self.require_topology("reset_orientations")?;
        let connectivity = self.config.connectivity as u32;
        for o in &mut self.orientation {
            *o = self.rng.random_range(0..connectivity);
        }
        self.phase = self.phase.with_orientation();
        debug!(phase = %self.phase, "orientations reset");
        Ok(())
    }

    /// Install an explicit state, e.g. one decoded from a snapshot.
    ///
    /// Particle `i` is placed on `particles[i]` with heading
    /// `orientation[i]`; the order is kept as given.
    ///
    /// # Errors
    ///
    /// `NotInitialized` before topology is built. `InvalidArgument` if a
    /// length differs from `n_particles`, a site is out of range or
    /// repeated, or an orientation is not below the connectivity.
    pub fn restore(&mut self, particles: &[u32], orientation: &[u32]) -> Result<(), LatticeError> {
        self.require_topology("restore")?;
        let n_particles = self.config.n_particles;
        if particles.len() != n_particles {
            return Err(LatticeError::invalid_argument(
                "particles",
                format!("expected {n_particles} sites, got {}", particles.len()),
            ));
        }
        if orientation.len() != n_particles {
            return Err(LatticeError::invalid_argument(
                "orientation",
                format!(
                    "expected {n_particles} orientations, got {}",
                    orientation.len()
                ),
            ));
        }
        if let Some(o) = orientation
            .iter()
            .find(|&&o| o as usize >= self.config.connectivity)
        {
            return Err(LatticeError::invalid_argument(
                "orientation",
                format!(
                    "orientation {o} outside [0, {})",
                    self.config.connectivity
                ),
            ));
        }

        let mut occupancy = vec![0u8; self.config.n_sites];
        for &site in particles {
            match occupancy.get_mut(site as usize) {
                None => {
                    return Err(LatticeError::invalid_argument(
                        "particles",
                        format!("site {site} outside [0, {})", self.config.n_sites),
                    ))
                }
                Some(1) => {
                    return Err(LatticeError::invalid_argument(
                        "particles",
                        format!("site {site} holds more than one particle"),
                    ))
                }
                Some(cell) => *cell = 1,
            }
        }

        self.occupancy.copy_from_slice(&occupancy);
        self.particles.clear();
        self.particles.extend_from_slice(particles);
        self.orientation.copy_from_slice(orientation);
        self.phase = self.phase.with_occupancy().with_orientation();
        debug!(n_particles, "state restored");
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Number of sites.
    pub fn site_count(&self) -> usize {
        self.config.n_sites
    }

    /// Number of particles.
    pub fn particle_count(&self) -> usize {
        self.config.n_particles
    }

    /// Neighbor directions per site.
    pub fn connectivity(&self) -> usize {
        self.config.connectivity
    }

    /// Seed the lattice's generator was created with.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// The configuration this lattice was built from.
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `(n_x, n_y)` of the installed grid.
    pub fn dimensions(&self) -> Result<(usize, usize), LatticeError> {
        Ok(self.require_topology("dimensions")?.shape.dimensions())
    }

    /// Installed grid shape, if any.
    pub fn grid_shape(&self) -> Option<&GridShape> {
        self.topology.as_ref().map(|t| &t.shape)
    }

    /// Installed neighbor table, if any.
    pub fn neighbor_table(&self) -> Option<&NeighborTable> {
        self.topology.as_ref().map(|t| &t.table)
    }

    /// Occupancy per site (0 or 1). Empty before topology is built.
    pub fn occupancy(&self) -> &[u8] {
        &self.occupancy
    }

    /// Site of each particle. Empty until occupancy is reset.
    pub fn particles(&self) -> &[u32] {
        &self.particles
    }

    /// Orientation of each particle. Zeroed until orientations are reset.
    pub fn orientations(&self) -> &[u32] {
        &self.orientation
    }

    /// Cumulative update counters.
    pub fn metrics(&self) -> &UpdateMetrics {
        &self.metrics
    }

    /// Zero the update counters.
    pub fn reset_metrics(&mut self) {
        self.metrics = UpdateMetrics::default();
    }

    // ── Invariants ──────────────────────────────────────────────

    /// Verify that occupancy is exactly the characteristic function of the
    /// particle list and every orientation is in range.
    ///
    /// Update operations assert this in debug builds; a failure means the
    /// algorithm is broken.
    pub fn check_invariants(&self) -> Result<(), LatticeError> {
        self.require_ready("check_invariants")?;
        let violation = |reason: String| -> Result<(), LatticeError> {
            Err(LatticeError::InvariantViolation { reason })
        };

        let n_sites = self.config.n_sites;
        let n_particles = self.config.n_particles;
        if self.occupancy.len() != n_sites {
            return violation(format!(
                "occupancy has {} entries, expected {n_sites}",
                self.occupancy.len()
            ));
        }
        if self.particles.len() != n_particles || self.orientation.len() != n_particles {
            return violation(format!(
                "{} particles and {} orientations, expected {n_particles}",
                self.particles.len(),
                self.orientation.len()
            ));
        }

        let mut seen = vec![false; n_sites];
        for (i, &site) in self.particles.iter().enumerate() {
            let site = site as usize;
            match self.occupancy.get(site) {
                Some(1) => {}
                Some(v) => {
                    return violation(format!("particle {i} on site {site} with occupancy {v}"))
                }
                None => return violation(format!("particle {i} on site {site} outside lattice")),
            }
            if std::mem::replace(&mut seen[site], true) {
                return violation(format!("site {site} holds two particles"));
            }
        }
        let occupied = self.occupancy.iter().filter(|&&v| v != 0).count();
        if occupied != n_particles {
            return violation(format!("{occupied} occupied sites for {n_particles} particles"));
        }
        if let Some((i, o)) = self
            .orientation
            .iter()
            .enumerate()
            .find(|&(_, &o)| o as usize >= self.config.connectivity)
        {
            return violation(format!("particle {i} has orientation {o}"));
        }
        Ok(())
    }

    // ── Phase guards ────────────────────────────────────────────

    pub(crate) fn require_topology(
        &self,
        operation: &'static str,
    ) -> Result<&Topology, LatticeError> {
        self.topology.as_ref().ok_or(LatticeError::NotInitialized {
            operation,
            phase: self.phase,
        })
    }

    pub(crate) fn require_ready(&self, operation: &'static str) -> Result<&Topology, LatticeError> {
        match &self.topology {
            Some(t) if self.phase.is_ready() => Ok(t),
            _ => Err(LatticeError::NotInitialized {
                operation,
                phase: self.phase,
            }),
        }
    }
}

impl ParticleView for Lattice {
    fn frame(&self) -> Result<ParticleFrame<'_>, LatticeError> {
        let (n_x, n_y) = self.require_ready("frame")?.shape.dimensions();
        Ok(ParticleFrame {
            n_x,
            n_y,
            connectivity: self.config.connectivity,
            particles: &self.particles,
            orientation: &self.orientation,
        })
    }
}

impl std::fmt::Debug for Lattice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lattice")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("dimensions", &self.grid_shape().map(GridShape::dimensions))
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
