//! runtumble quickstart: a complete run-and-tumble simulation.
//!
//! Demonstrates:
//!   1. Configuring and creating a lattice
//!   2. Building the periodic square topology
//!   3. Resetting occupancy and orientations
//!   4. Advancing with each update strategy
//!   5. Reading snapshots and update metrics
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use runtumble::prelude::*;
use tracing_subscriber::EnvFilter;

// ─── Lattice parameters ─────────────────────────────────────────

const N_X: usize = 16;
const N_Y: usize = 24;
const N_PARTICLES: usize = 60;
const TUMBLE: f64 = 0.05;

fn main() -> Result<(), LatticeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = LatticeConfig::new(N_X * N_Y, N_PARTICLES, 4).seed(7);
    let mut lattice = Lattice::new(config)?;
    lattice.build_square_topology(N_X, N_Y)?;
    lattice.reset_occupancy()?;
    lattice.reset_orientations()?;
    println!("{lattice:?}");

    for strategy in Strategy::ALL {
        lattice.reset_metrics();
        let count = match strategy {
            Strategy::Sweep => 50,
            Strategy::Reference | Strategy::Batched => 50 * N_PARTICLES as u64,
        };
        lattice.advance(strategy, TUMBLE, count)?;
        let m = lattice.metrics();
        println!(
            "{strategy:>9}: {} attempted, {} moved, {} tumbles, acceptance {:.3}",
            m.attempted,
            m.moved,
            m.tumbles,
            m.acceptance_ratio().unwrap_or(0.0),
        );
    }

    // ─── Print the final image ──────────────────────────────────

    let image = lattice.snapshot()?;
    for row in image.rows() {
        let line: String = row
            .iter()
            .map(|&v| match v {
                0 => '.',
                1 => 'v',
                2 => '^',
                3 => '>',
                _ => '<',
            })
            .collect();
        println!("{line}");
    }
    Ok(())
}
