//! Fixed-degree neighbor tables.

use crate::direction::Direction;
use crate::grid::{GridShape, MAX_SITES};
use runtumble_core::ConfigError;

/// Immutable `(site, orientation) -> site` map.
///
/// Stored as one flat row-major buffer of `n_sites * connectivity` entries
/// so the update loop reads `entries[site * connectivity + orientation]`
/// without indirection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborTable {
    n_sites: usize,
    connectivity: usize,
    entries: Vec<u32>,
}

impl NeighborTable {
    /// Periodic 4-connected square table for `shape`.
    ///
    /// Column `o` of row `site` is `shape.step(site, d)` where `d` is the
    /// [`Direction`] with orientation `o`. The result is a pure function of
    /// the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use runtumble_space::{Direction, GridShape, NeighborTable};
    ///
    /// let shape = GridShape::new(4, 4).unwrap();
    /// let table = NeighborTable::square(&shape);
    /// assert_eq!(table.connectivity(), 4);
    ///
    /// // Site (0, 0) wraps to (3, 0) when moving along -x.
    /// let origin = shape.site(0, 0);
    /// let west = table.neighbor(origin, Direction::MinusX.orientation());
    /// assert_eq!(shape.coords(west), (3, 0));
    /// ```
    pub fn square(shape: &GridShape) -> Self {
        let n_sites = shape.site_count();
        let mut entries = Vec::with_capacity(n_sites * Direction::ALL.len());
        for site in 0..n_sites {
            for d in Direction::ALL {
                // GridShape caps site_count at MAX_SITES, so targets fit in u32.
                entries.push(shape.step(site, d) as u32);
            }
        }
        Self {
            n_sites,
            connectivity: Direction::ALL.len(),
            entries,
        }
    }

    /// Build a table by evaluating `f(site, orientation)` for every entry.
    ///
    /// Returns `Err` if `n_sites` or `connectivity` is zero, if the table
    /// would exceed [`MAX_SITES`], or if `f` returns a target outside
    /// `[0, n_sites)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use runtumble_space::NeighborTable;
    ///
    /// // Two sites facing each other, one orientation each.
    /// let pair = NeighborTable::from_fn(2, 1, |site, _| 1 - site).unwrap();
    /// assert_eq!(pair.neighbors(0), &[1]);
    /// assert_eq!(pair.neighbors(1), &[0]);
    /// ```
    pub fn from_fn(
        n_sites: usize,
        connectivity: usize,
        mut f: impl FnMut(usize, usize) -> usize,
    ) -> Result<Self, ConfigError> {
        check_shape(n_sites, connectivity)?;
        let mut entries = Vec::with_capacity(n_sites * connectivity);
        for site in 0..n_sites {
            for orientation in 0..connectivity {
                let target = f(site, orientation);
                if target >= n_sites {
                    return Err(ConfigError::NeighborOutOfRange {
                        site,
                        orientation,
                        target,
                        n_sites,
                    });
                }
                entries.push(target as u32);
            }
        }
        Ok(Self {
            n_sites,
            connectivity,
            entries,
        })
    }

    /// Adopt a flat row-major buffer.
    ///
    /// Returns `Err(ConfigError::TableSizeMismatch)` if
    /// `entries.len() != n_sites * connectivity`, plus every error of
    /// [`from_fn`](Self::from_fn).
    pub fn from_flat(
        n_sites: usize,
        connectivity: usize,
        entries: Vec<u32>,
    ) -> Result<Self, ConfigError> {
        check_shape(n_sites, connectivity)?;
        let expected = n_sites * connectivity;
        if entries.len() != expected {
            return Err(ConfigError::TableSizeMismatch {
                expected,
                found: entries.len(),
            });
        }
        if let Some(pos) = entries.iter().position(|&t| t as usize >= n_sites) {
            return Err(ConfigError::NeighborOutOfRange {
                site: pos / connectivity,
                orientation: pos % connectivity,
                target: entries[pos] as usize,
                n_sites,
            });
        }
        Ok(Self {
            n_sites,
            connectivity,
            entries,
        })
    }

    /// Number of sites (rows).
    pub fn site_count(&self) -> usize {
        self.n_sites
    }

    /// Number of orientations (columns).
    pub fn connectivity(&self) -> usize {
        self.connectivity
    }

    /// The neighbors of `site`, indexed by orientation.
    ///
    /// # Panics
    ///
    /// Panics if `site >= site_count()`.
    pub fn neighbors(&self, site: usize) -> &[u32] {
        let start = site * self.connectivity;
        &self.entries[start..start + self.connectivity]
    }

    /// Site reached from `site` moving along `orientation`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn neighbor(&self, site: usize, orientation: usize) -> usize {
        self.neighbors(site)[orientation] as usize
    }

    /// The whole table as one row-major slice.
    pub fn as_flat(&self) -> &[u32] {
        &self.entries
    }
}

fn check_shape(n_sites: usize, connectivity: usize) -> Result<(), ConfigError> {
    if n_sites == 0 {
        return Err(ConfigError::ZeroSites);
    }
    if connectivity == 0 {
        return Err(ConfigError::ZeroConnectivity);
    }
    if n_sites > MAX_SITES || n_sites.checked_mul(connectivity).is_none() {
        return Err(ConfigError::TooManySites {
            n_sites,
            max: MAX_SITES,
        });
    }
    Ok(())
}
