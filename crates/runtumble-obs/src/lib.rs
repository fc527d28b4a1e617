//! Snapshot projection for runtumble.
//!
//! Turns particle state into the `n_x × n_y` integer images consumed
//! downstream: 0 marks an empty site, `orientation + 1` an occupied one.
//! Projection reads through [`ParticleView`](runtumble_core::ParticleView)
//! and never mutates the lattice.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod projector;
pub mod snapshot;

pub use projector::ImageProjector;
pub use snapshot::{Cell, Snapshot};
