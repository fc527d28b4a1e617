//! Neighbor table compliance test helpers.
//!
//! These functions verify that a table satisfies the invariants the update
//! engine and snapshot projector depend on.

use crate::direction::Direction;
use crate::grid::GridShape;
use crate::table::NeighborTable;

/// Assert every entry lies in `[0, n_sites)` and rows have the right width.
pub fn assert_entries_in_range(table: &NeighborTable) {
    assert_eq!(
        table.as_flat().len(),
        table.site_count() * table.connectivity()
    );
    for site in 0..table.site_count() {
        for &t in table.neighbors(site) {
            assert!(
                (t as usize) < table.site_count(),
                "site {site} has neighbour {t} outside [0, {})",
                table.site_count()
            );
        }
    }
}

/// Assert each orientation column is a permutation of the sites, so moves
/// along one direction never merge two sites.
pub fn assert_columns_are_permutations(table: &NeighborTable) {
    for o in 0..table.connectivity() {
        let mut seen = vec![false; table.site_count()];
        for site in 0..table.site_count() {
            let t = table.neighbor(site, o);
            assert!(!seen[t], "orientation {o}: site {t} reached twice");
            seen[t] = true;
        }
    }
}

/// Assert that moving along a direction and then its opposite returns to
/// the starting site.
pub fn assert_opposites_invert(table: &NeighborTable) {
    for site in 0..table.site_count() {
        for d in Direction::ALL {
            let there = table.neighbor(site, d.orientation());
            let back = table.neighbor(there, d.opposite().orientation());
            assert_eq!(back, site, "{d:?} then {:?} from {site}", d.opposite());
        }
    }
}

/// Assert each entry agrees with the row-major coordinate mapping of
/// `shape`: the neighbour's `(x, y)` differs by the direction's offset,
/// modulo the grid extents.
pub fn assert_matches_coordinates(shape: &GridShape, table: &NeighborTable) {
    let (n_x, n_y) = shape.dimensions();
    for site in 0..table.site_count() {
        let (x, y) = shape.coords(site);
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            let expect_x = (x as isize + dx).rem_euclid(n_x as isize) as usize;
            let expect_y = (y as isize + dy).rem_euclid(n_y as isize) as usize;
            let got = shape.coords(table.neighbor(site, d.orientation()));
            assert_eq!(got, (expect_x, expect_y), "{d:?} from ({x}, {y})");
        }
    }
}

/// Run all compliance checks for a periodic square table.
pub fn run_square_compliance(shape: &GridShape, table: &NeighborTable) {
    assert_eq!(table.site_count(), shape.site_count());
    assert_eq!(table.connectivity(), 4);
    assert_entries_in_range(table);
    assert_columns_are_permutations(table);
    assert_opposites_invert(table);
    assert_matches_coordinates(shape, table);
}
