//! Occupancy/orientation images.

use runtumble_core::LatticeError;

/// One occupied cell decoded from a [`Snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Row.
    pub x: usize,
    /// Column.
    pub y: usize,
    /// Particle orientation (cell value minus one).
    pub orientation: u32,
}

/// An `n_x × n_y` image of the lattice.
///
/// Stored row-major, so `as_slice()[site]` is the value of lattice site
/// `site`. A value of 0 means empty; `v > 0` means a particle with
/// orientation `v - 1`.
///
/// # Examples
///
/// ```
/// use runtumble_obs::{Cell, Snapshot};
///
/// let mut s = Snapshot::empty(2, 3).unwrap();
/// s.set(1, 2, 4);
/// assert_eq!(s.get(1, 2), 4);
/// assert_eq!(s.occupied(), 1);
/// assert_eq!(s.decode(), vec![Cell { x: 1, y: 2, orientation: 3 }]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snapshot {
    n_x: usize,
    n_y: usize,
    cells: Vec<u32>,
}

impl Snapshot {
    /// An all-empty image.
    ///
    /// Returns `Err(LatticeError::InvalidArgument)` if a dimension is zero
    /// or the cell count overflows.
    pub fn empty(n_x: usize, n_y: usize) -> Result<Self, LatticeError> {
        let len = n_x
            .checked_mul(n_y)
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                LatticeError::invalid_argument(
                    "dimensions",
                    format!("{n_x}x{n_y} is not a valid image size"),
                )
            })?;
        Ok(Self {
            n_x,
            n_y,
            cells: vec![0; len],
        })
    }

    /// `(n_x, n_y)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.n_x, self.n_y)
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        assert!(x < self.n_x && y < self.n_y, "({x}, {y}) outside image");
        self.cells[x * self.n_y + y]
    }

    /// Overwrite the value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        assert!(x < self.n_x && y < self.n_y, "({x}, {y}) outside image");
        self.cells[x * self.n_y + y] = value;
    }

    /// Row-major cell values.
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    /// Consume the image, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<u32> {
        self.cells
    }

    /// Iterate rows (`x` ascending), each `n_y` values long.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.n_y)
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Occupied cells in row-major order.
    pub fn decode(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(site, &v)| Cell {
                x: site / self.n_y,
                y: site % self.n_y,
                orientation: v - 1,
            })
            .collect()
    }

    /// Periodically shift the image: the value at `(x, y)` moves to
    /// `(x + dx, y + dy)` modulo the dimensions.
    pub fn rolled(&self, dx: isize, dy: isize) -> Self {
        let shift = |pos: usize, d: isize, len: usize| -> usize {
            (pos as isize + d).rem_euclid(len as isize) as usize
        };
        let mut out = vec![0; self.cells.len()];
        for (site, &v) in self.cells.iter().enumerate() {
            let (x, y) = (site / self.n_y, site % self.n_y);
            out[shift(x, dx, self.n_x) * self.n_y + shift(y, dy, self.n_y)] = v;
        }
        Self {
            n_x: self.n_x,
            n_y: self.n_y,
            cells: out,
        }
    }
}
