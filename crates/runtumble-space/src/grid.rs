//! Row-major site numbering for 2D grids.

use crate::direction::Direction;
use runtumble_core::ConfigError;

/// Largest site count a lattice can hold: site indices are stored as `u32`.
pub const MAX_SITES: usize = u32::MAX as usize;

/// Dimensions of a 2D grid and its row-major site numbering.
///
/// Site `(x, y)` has index `x * n_y + y`, with `0 <= x < n_x` and
/// `0 <= y < n_y`. [`site`](Self::site) and [`coords`](Self::coords)
/// are exact inverses; both the neighbor table and snapshot projection
/// go through them.
///
/// # Examples
///
/// ```
/// use runtumble_space::GridShape;
///
/// let shape = GridShape::new(4, 3).unwrap();
/// assert_eq!(shape.site_count(), 12);
/// assert_eq!(shape.site(2, 1), 7);
/// assert_eq!(shape.coords(7), (2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    n_x: usize,
    n_y: usize,
}

impl GridShape {
    /// Create a grid of `n_x * n_y` sites.
    ///
    /// Returns `Err(ConfigError::ZeroDimension)` if either dimension is 0,
    /// or `Err(ConfigError::TooManySites)` if the product exceeds
    /// [`MAX_SITES`].
    pub fn new(n_x: usize, n_y: usize) -> Result<Self, ConfigError> {
        if n_x == 0 {
            return Err(ConfigError::ZeroDimension { axis: "n_x" });
        }
        if n_y == 0 {
            return Err(ConfigError::ZeroDimension { axis: "n_y" });
        }
        match n_x.checked_mul(n_y) {
            Some(n) if n <= MAX_SITES => Ok(Self { n_x, n_y }),
            _ => Err(ConfigError::TooManySites {
                n_sites: n_x.saturating_mul(n_y),
                max: MAX_SITES,
            }),
        }
    }

    /// Extent along x.
    pub fn n_x(&self) -> usize {
        self.n_x
    }

    /// Extent along y.
    pub fn n_y(&self) -> usize {
        self.n_y
    }

    /// `(n_x, n_y)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.n_x, self.n_y)
    }

    /// Total number of sites.
    pub fn site_count(&self) -> usize {
        self.n_x * self.n_y
    }

    /// Row-major index of `(x, y)`.
    pub fn site(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.n_x && y < self.n_y, "({x}, {y}) outside grid");
        x * self.n_y + y
    }

    /// `(x, y)` of a site index.
    pub fn coords(&self, site: usize) -> (usize, usize) {
        debug_assert!(site < self.site_count(), "site {site} outside grid");
        (site / self.n_y, site % self.n_y)
    }

    /// Site reached from `site` by one move along `direction`, wrapping
    /// periodically on both axes.
    pub fn step(&self, site: usize, direction: Direction) -> usize {
        let (x, y) = self.coords(site);
        let (dx, dy) = direction.offset();
        self.site(wrap_axis(x, dx, self.n_x), wrap_axis(y, dy, self.n_y))
    }
}

/// Move `pos` by `delta` on a periodic axis of length `len`.
pub(crate) fn wrap_axis(pos: usize, delta: isize, len: usize) -> usize {
    let len = len as isize;
    (pos as isize + delta).rem_euclid(len) as usize
}
