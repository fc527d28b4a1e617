//! Orientation convention of the square lattice.

/// Heading of a particle on the 4-connected square lattice.
///
/// The discriminant is the orientation index stored per particle and the
/// column of the neighbor table. The layout is fixed: every update
/// strategy and the snapshot projector rely on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Move one site along `+x` (next row).
    PlusX = 0,
    /// Move one site along `-x` (previous row).
    MinusX = 1,
    /// Move one site along `+y` (next column).
    PlusY = 2,
    /// Move one site along `-y` (previous column).
    MinusY = 3,
}

impl Direction {
    /// All directions in orientation order.
    pub const ALL: [Self; 4] = [Self::PlusX, Self::MinusX, Self::PlusY, Self::MinusY];

    /// Orientation index of this direction.
    pub fn orientation(self) -> usize {
        self as usize
    }

    /// Direction for an orientation index, if it is one of the four.
    pub fn from_orientation(orientation: usize) -> Option<Self> {
        Self::ALL.get(orientation).copied()
    }

    /// Returns the `(dx, dy)` offset for this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::PlusX => (1, 0),
            Self::MinusX => (-1, 0),
            Self::PlusY => (0, 1),
            Self::MinusY => (0, -1),
        }
    }

    /// The direction that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::PlusX => Self::MinusX,
            Self::MinusX => Self::PlusX,
            Self::PlusY => Self::MinusY,
            Self::MinusY => Self::PlusY,
        }
    }
}
