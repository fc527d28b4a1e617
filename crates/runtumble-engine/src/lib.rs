//! Run-and-tumble lattice engine.
//!
//! Provides [`Lattice`], which owns the occupancy, particle, and
//! orientation buffers of one simulation run together with its seeded
//! generator, and the update strategies that evolve it: the reference
//! [`Lattice::step`], the batched [`Lattice::bulk_step`], and
//! random-sequential [`Lattice::sweep`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod lattice;
pub mod metrics;
pub mod strategy;
mod update;

pub use config::LatticeConfig;
pub use lattice::Lattice;
pub use metrics::UpdateMetrics;
pub use strategy::Strategy;
