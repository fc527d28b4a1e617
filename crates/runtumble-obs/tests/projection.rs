//! Integration test: snapshots agree with the particle state they encode.

use proptest::prelude::*;
use runtumble_engine::{Lattice, LatticeConfig};
use runtumble_obs::{Cell, ImageProjector, Snapshot};
use runtumble_test_utils::ready_square;

fn decoded_state(lattice: &Lattice) -> Vec<Cell> {
    let mut cells: Vec<Cell> = lattice
        .positions()
        .unwrap()
        .into_iter()
        .zip(lattice.orientations())
        .map(|((x, y), &orientation)| Cell { x, y, orientation })
        .collect();
    cells.sort();
    cells
}

#[test]
fn quiet_run_keeps_four_particles_in_image() {
    let mut lattice = Lattice::new(LatticeConfig::new(16, 4, 4).seed(2024)).unwrap();
    lattice.build_square_topology(4, 4).unwrap();
    lattice.reset_occupancy().unwrap();
    lattice.reset_orientations().unwrap();
    let headings = lattice.orientations().to_vec();

    for _ in 0..10_000 {
        lattice.step(0.0).unwrap();
    }

    let snap = lattice.snapshot().unwrap();
    assert_eq!(snap.dimensions(), (4, 4));
    assert_eq!(snap.occupied(), 4);
    assert!(snap.as_slice().iter().all(|&v| v <= 4));
    assert!(snap
        .as_slice()
        .iter()
        .filter(|&&v| v != 0)
        .all(|&v| (1..=4).contains(&v)));
    assert_eq!(lattice.orientations(), &headings[..]);
}

#[test]
fn rolled_snapshot_restores_into_shifted_state() {
    let mut lattice = ready_square(5, 4, 7, 11);
    lattice.bulk_step(0.2, 300).unwrap();
    let rolled = lattice.snapshot().unwrap().rolled(2, -1);

    let cells = rolled.decode();
    let particles: Vec<u32> = cells.iter().map(|c| (c.x * 4 + c.y) as u32).collect();
    let orientation: Vec<u32> = cells.iter().map(|c| c.orientation).collect();

    let mut other = Lattice::new(LatticeConfig::new(20, 7, 4).seed(0)).unwrap();
    other.build_square_topology(5, 4).unwrap();
    other.restore(&particles, &orientation).unwrap();
    assert_eq!(other.snapshot().unwrap(), rolled);
}

proptest! {
    #[test]
    fn snapshot_decodes_to_particle_state(
        n_x in 1usize..9,
        n_y in 1usize..9,
        fill in 0.05f64..1.0,
        p in 0.0f64..=1.0,
        updates in 0u64..400,
        seed in any::<u64>(),
    ) {
        let n_sites = n_x * n_y;
        let n_particles = ((n_sites as f64 * fill).ceil() as usize).clamp(1, n_sites);
        let mut lattice = ready_square(n_x, n_y, n_particles, seed);
        if updates > 0 {
            lattice.bulk_step(p, updates).unwrap();
        }

        let snap = lattice.snapshot().unwrap();
        prop_assert_eq!(snap.occupied(), n_particles);
        prop_assert_eq!(snap.decode(), decoded_state(&lattice));

        let mut buf = Snapshot::empty(n_x, n_y).unwrap();
        lattice.snapshot_into(&mut buf).unwrap();
        prop_assert_eq!(buf, snap);
    }
}
