//! Test utilities for runtumble development.
//!
//! Provides lattice fixtures ([`ready_square`], [`blocked_pair`]) and the
//! goodness-of-fit helpers used by the statistical equivalence tests
//! ([`chi_square_uniform`], [`chi_square_homogeneity`],
//! [`chi_square_critical`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod stats;

pub use fixtures::{blocked_pair, ready_square, Histogram};
pub use stats::{chi_square_critical, chi_square_homogeneity, chi_square_uniform, ChiSquare};
