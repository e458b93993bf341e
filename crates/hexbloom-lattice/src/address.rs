//! Cell addresses on the two-sublattice hex tiling.
//!
//! Sublattice 1 is offset half a column right and half a row down from
//! sublattice 0, so together the two triangular grids tile the plane with
//! pointy-top hexagons.

use std::cmp::Ordering;

use crate::render::SQRT_3;
use crate::{Error, Result, NEIGHBOR_COUNT};

/// One of the two interleaved coordinate families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "u8", try_from = "i64")
)]
pub enum Sublattice {
    /// Sublattice 0, containing the origin.
    #[default]
    Base,
    /// Sublattice 1, offset by half a cell in both directions.
    Shifted,
}

impl Sublattice {
    /// Numeric index (0 or 1) used in the neighbor formula.
    #[inline]
    pub const fn index(self) -> i64 {
        match self {
            Sublattice::Base => 0,
            Sublattice::Shifted => 1,
        }
    }

    /// The opposite sublattice.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Sublattice::Base => Sublattice::Shifted,
            Sublattice::Shifted => Sublattice::Base,
        }
    }
}

impl TryFrom<i64> for Sublattice {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Sublattice::Base),
            1 => Ok(Sublattice::Shifted),
            other => Err(Error::InvalidSublattice(other)),
        }
    }
}

impl From<Sublattice> for u8 {
    fn from(value: Sublattice) -> Self {
        value.index() as u8
    }
}

/// Unique key of a hex cell: `(sublattice, row, column)`.
///
/// Ordering is lexicographic on the three fields and exists only to give
/// grids a deterministic iteration order.
///
/// Rows and columns must lie in `COORD_MIN..=COORD_MAX` for
/// [`neighbors`](Self::neighbors) to be defined. [`Address::try_new`]
/// enforces this; code writing the public fields directly must keep to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    pub sublattice: Sublattice,
    pub row: i64,
    pub column: i64,
}

impl Address {
    /// The origin cell `(0, 0, 0)`.
    pub const ORIGIN: Self = Self {
        sublattice: Sublattice::Base,
        row: 0,
        column: 0,
    };

    /// Smallest usable row or column.
    pub const COORD_MIN: i64 = i64::MIN + 1;
    /// Largest usable row or column.
    pub const COORD_MAX: i64 = i64::MAX - 1;

    /// Create an address from an already-valid sublattice.
    pub const fn new(sublattice: Sublattice, row: i64, column: i64) -> Self {
        Self {
            sublattice,
            row,
            column,
        }
    }

    /// Create an address from a raw triple, rejecting sublattices other
    /// than 0 and 1 and coordinates outside `COORD_MIN..=COORD_MAX`.
    pub fn try_new(sublattice: i64, row: i64, column: i64) -> Result<Self> {
        let sublattice = Sublattice::try_from(sublattice)?;
        for (axis, value) in [("row", row), ("column", column)] {
            if !(Self::COORD_MIN..=Self::COORD_MAX).contains(&value) {
                return Err(Error::CoordinateOutOfRange { axis, value });
            }
        }
        Ok(Self::new(sublattice, row, column))
    }

    /// Whether both coordinates are in the usable range.
    pub const fn is_in_range(&self) -> bool {
        self.row >= Self::COORD_MIN
            && self.row <= Self::COORD_MAX
            && self.column >= Self::COORD_MIN
            && self.column <= Self::COORD_MAX
    }

    /// The raw `(sublattice, row, column)` triple.
    pub const fn as_triple(&self) -> (i64, i64, i64) {
        (self.sublattice.index(), self.row, self.column)
    }

    /// The six neighbor addresses, in a fixed order: the two cells on the
    /// opposite sublattice above, the two horizontal cells, then the two
    /// cells on the opposite sublattice below.
    ///
    /// Requires [`is_in_range`](Self::is_in_range); outside it the
    /// arithmetic overflows.
    pub fn neighbors(&self) -> [Self; NEIGHBOR_COUNT] {
        let s = self.sublattice.index();
        let t = 1 - s;
        let other = self.sublattice.other();
        let (r, c) = (self.row, self.column);

        [
            Self::new(other, r - t, c - t),
            Self::new(other, r - t, c + s),
            Self::new(self.sublattice, r, c - 1),
            Self::new(self.sublattice, r, c + 1),
            Self::new(other, r + s, c - t),
            Self::new(other, r + s, c + s),
        ]
    }

    /// Center of this cell in the plane, in units of the center-to-center
    /// distance: `x = s/2 + c`, `y = √3 · (s/2 + r)`.
    ///
    /// Only the renderer needs this.
    pub fn plane_position(&self) -> (f64, f64) {
        let half = self.sublattice.index() as f64 / 2.0;
        let x = half + self.column as f64;
        let y = SQRT_3 * (half + self.row as f64);
        (x, y)
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sublattice
            .cmp(&other.sublattice)
            .then_with(|| self.row.cmp(&other.row))
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.sublattice.index(),
            self.row,
            self.column
        )
    }
}
