//! Lattice topology for runtumble.
//!
//! A topology is a [`GridShape`] (the row-major site numbering shared with
//! snapshot projection) plus a [`NeighborTable`] mapping
//! `(site, orientation)` to the site reached by one move.
//!
//! # Backends
//!
//! - [`NeighborTable::square`]: periodic 4-connected square grid, with
//!   orientations laid out as in [`Direction`]
//! - [`NeighborTable::from_fn`]: any fixed-degree table, validated

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod grid;
pub mod table;

#[cfg(test)]
pub(crate) mod compliance;

pub use direction::Direction;
pub use grid::{GridShape, MAX_SITES};
pub use table::NeighborTable;
