//! Integration test: structural properties of the lattice under updates.
//!
//! Occupancy must remain the characteristic function of the particle list,
//! the particle count never changes, and exclusion holds on degenerate
//! topologies.

use proptest::prelude::*;
use runtumble_core::{LatticeError, Phase};
use runtumble_engine::{Lattice, LatticeConfig, Strategy};
use runtumble_space::{GridShape, NeighborTable};
use runtumble_test_utils::{blocked_pair, ready_square};

fn assert_consistent(lattice: &Lattice, n_particles: usize) {
    assert_eq!(lattice.particles().len(), n_particles);
    assert_eq!(
        lattice.occupancy().iter().map(|&c| c as usize).sum::<usize>(),
        n_particles
    );
    let mut seen = vec![false; lattice.site_count()];
    for &site in lattice.particles() {
        assert_eq!(lattice.occupancy()[site as usize], 1);
        assert!(!seen[site as usize], "site {site} listed twice");
        seen[site as usize] = true;
    }
    assert!(lattice
        .orientations()
        .iter()
        .all(|&o| (o as usize) < lattice.connectivity()));
    assert_eq!(lattice.check_invariants(), Ok(()));
}

#[test]
fn full_lifecycle() {
    let mut lattice = Lattice::create(64, 20, 4).unwrap();
    assert_eq!(lattice.phase(), Phase::Uninitialized);
    assert!(matches!(
        lattice.step(0.5),
        Err(LatticeError::NotInitialized { .. })
    ));

    lattice.build_square_topology(8, 8).unwrap();
    lattice.reset_occupancy().unwrap();
    assert_eq!(lattice.occupancy().iter().filter(|&&c| c == 1).count(), 20);
    lattice.reset_orientations().unwrap();
    assert_eq!(lattice.phase(), Phase::Ready);

    lattice.step(0.5).unwrap();
    lattice.bulk_step(0.5, 1_000).unwrap();
    lattice.sweep(0.5, 5).unwrap();
    assert_consistent(&lattice, 20);
    assert_eq!(lattice.metrics().attempted, 1 + 1_000 + 5 * 20);
}

#[test]
fn square_tables_are_reproducible() {
    let shape = GridShape::new(7, 3).unwrap();
    let a = NeighborTable::square(&shape);
    let b = NeighborTable::square(&shape);
    assert_eq!(a, b);

    let mut x = ready_square(7, 3, 2, 1);
    let y = ready_square(7, 3, 2, 99);
    assert_eq!(x.neighbor_table(), y.neighbor_table());
    assert!(matches!(
        x.build_square_topology(7, 3),
        Err(LatticeError::Configuration(_))
    ));
}

#[test]
fn exclusion_blocks_every_move_on_a_saturated_pair() {
    let mut lattice = blocked_pair(5);
    for _ in 0..1_000 {
        lattice.step(0.5).unwrap();
        assert_eq!(lattice.particles(), &[0, 1]);
    }
    lattice.bulk_step(0.5, 10_000).unwrap();
    lattice.sweep(0.5, 100).unwrap();
    assert_eq!(lattice.particles(), &[0, 1]);
    assert_eq!(lattice.occupancy(), &[1, 1]);
    assert_eq!(lattice.metrics().moved, 0);
    assert_eq!(lattice.metrics().blocked, lattice.metrics().attempted);
}

#[test]
fn lone_particle_on_a_pair_hops_back_and_forth() {
    let mut lattice = Lattice::new(LatticeConfig::new(2, 1, 1).seed(3)).unwrap();
    let table = NeighborTable::from_fn(2, 1, |site, _| 1 - site).unwrap();
    lattice
        .build_topology(GridShape::new(2, 1).unwrap(), table)
        .unwrap();
    lattice.restore(&[0], &[0]).unwrap();
    for i in 1..=9u32 {
        lattice.step(0.0).unwrap();
        assert_eq!(lattice.particles(), &[i % 2]);
    }
}

proptest! {
    #[test]
    fn updates_preserve_occupancy_invariants(
        n_x in 1usize..10,
        n_y in 1usize..10,
        fill in 0.0f64..1.0,
        p in 0.0f64..=1.0,
        ops in prop::collection::vec((0usize..3, 1u64..50), 1..12),
        seed in any::<u64>(),
    ) {
        let n_sites = n_x * n_y;
        let n_particles = ((n_sites as f64 * fill) as usize).clamp(1, n_sites);
        let mut lattice = ready_square(n_x, n_y, n_particles, seed);
        for (which, count) in ops {
            lattice.advance(Strategy::ALL[which], p, count).unwrap();
            assert_consistent(&lattice, n_particles);
        }
    }

    #[test]
    fn reset_occupancy_places_exactly_n_particles(
        n_sites in 1usize..200,
        fill in 0.0f64..1.0,
        seed in any::<u64>(),
    ) {
        let n_particles = ((n_sites as f64 * fill) as usize).clamp(1, n_sites);
        let mut lattice =
            Lattice::new(LatticeConfig::new(n_sites, n_particles, 4).seed(seed)).unwrap();
        lattice.build_square_topology(1, n_sites).unwrap();
        lattice.reset_occupancy().unwrap();
        prop_assert_eq!(
            lattice.occupancy().iter().filter(|&&c| c == 1).count(),
            n_particles
        );
        prop_assert!(lattice.occupancy().iter().all(|&c| c <= 1));
        prop_assert!(lattice.particles().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn full_lattice_never_moves(
        n_x in 1usize..6,
        n_y in 1usize..6,
        p in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let n_sites = n_x * n_y;
        let mut lattice = ready_square(n_x, n_y, n_sites, seed);
        let before = lattice.particles().to_vec();
        lattice.bulk_step(p, 500).unwrap();
        prop_assert_eq!(lattice.particles(), &before[..]);
        prop_assert_eq!(lattice.metrics().moved, 0);
    }

    #[test]
    fn zero_tumble_keeps_headings(
        n_x in 2usize..8,
        n_y in 2usize..8,
        seed in any::<u64>(),
    ) {
        let mut lattice = ready_square(n_x, n_y, 3, seed);
        let headings = lattice.orientations().to_vec();
        lattice.step(0.0).unwrap();
        lattice.bulk_step(0.0, 200).unwrap();
        lattice.sweep(0.0, 10).unwrap();
        prop_assert_eq!(lattice.orientations(), &headings[..]);
        prop_assert_eq!(lattice.metrics().tumbles, 0);
    }
}
