//! runtumble: run-and-tumble particles on a periodic lattice.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! runtumble sub-crates. For most users, adding `runtumble` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use runtumble::prelude::*;
//!
//! // 32×32 periodic square lattice with 100 particles.
//! let config = LatticeConfig::new(32 * 32, 100, 4).seed(42);
//! let mut lattice = Lattice::new(config).unwrap();
//! lattice.build_square_topology(32, 32).unwrap();
//! lattice.reset_occupancy().unwrap();
//! lattice.reset_orientations().unwrap();
//!
//! // 10 000 elementary updates, tumbling with probability 0.05 each.
//! lattice.bulk_step(0.05, 10_000).unwrap();
//!
//! let image = lattice.snapshot().unwrap();
//! assert_eq!(image.dimensions(), (32, 32));
//! assert_eq!(image.occupied(), 100);
//! assert!(image.as_slice().iter().all(|&v| v <= 4));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `runtumble-core` | Errors, lifecycle phase, tumble probability, `ParticleView` |
//! | [`space`] | `runtumble-space` | Grid shapes, directions, neighbor tables |
//! | [`engine`] | `runtumble-engine` | Lattice state, update strategies, metrics |
//! | [`obs`] | `runtumble-obs` | Snapshot images and projection |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`runtumble-core`).
///
/// Contains the error types, the [`types::Phase`] lifecycle, and the
/// [`types::ParticleView`] read trait.
pub use runtumble_core as types;

/// Lattice geometry (`runtumble-space`).
///
/// [`space::GridShape`] for periodic square grids and
/// [`space::NeighborTable`] for flat neighbor lookup, square or custom.
pub use runtumble_space as space;

/// Lattice state and stochastic updates (`runtumble-engine`).
///
/// [`engine::Lattice`] owns the state; [`engine::Strategy`] selects between
/// reference, batched and sweep updates.
pub use runtumble_engine as engine;

/// Snapshot images (`runtumble-obs`).
///
/// [`obs::ImageProjector`] turns any ready lattice into an
/// [`obs::Snapshot`].
pub use runtumble_obs as obs;

/// Common imports for typical runtumble usage.
///
/// ```rust
/// use runtumble::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use runtumble_core::{ConfigError, LatticeError, ParticleView, Phase, TumbleProbability};

    // Space
    pub use runtumble_space::{Direction, GridShape, NeighborTable};

    // Engine
    pub use runtumble_engine::{Lattice, LatticeConfig, Strategy, UpdateMetrics};

    // Observation
    pub use runtumble_obs::{ImageProjector, Snapshot};
}
