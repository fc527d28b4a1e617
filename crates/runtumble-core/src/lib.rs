//! Core types and traits for the runtumble lattice simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the topology, engine, and projection crates:
//! error types, the lifecycle [`Phase`] tag, the validated
//! [`TumbleProbability`], and the read-only [`ParticleView`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod phase;
pub mod probability;
pub mod traits;

pub use error::{ConfigError, LatticeError};
pub use phase::Phase;
pub use probability::TumbleProbability;
pub use traits::{ParticleFrame, ParticleView};
