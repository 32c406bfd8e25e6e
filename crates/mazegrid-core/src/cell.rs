//! The [`Cell`] type — wall flags plus carve-time bookkeeping.

use crate::coord::Side;

/// The four wall flags of a cell. A set flag means the wall is present.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    /// All four walls present.
    pub const CLOSED: Self = Self {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// Whether the wall on `side` is present.
    #[inline]
    pub const fn has(self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Remove the wall on `side`.
    #[inline]
    pub fn remove(&mut self, side: Side) {
        match side {
            Side::Top => self.top = false,
            Side::Right => self.right = false,
            Side::Bottom => self.bottom = false,
            Side::Left => self.left = false,
        }
    }

    /// Number of removed walls.
    pub fn open_count(self) -> usize {
        Side::ALL.iter().filter(|&&s| !self.has(s)).count()
    }
}

impl Default for Walls {
    #[inline]
    fn default() -> Self {
        Self::CLOSED
    }
}

/// A single maze cell.
///
/// Plain data, no behavior: wall flags plus the `visited` marker used by
/// generators while carving. `visited` is meaningless once carving is done
/// and is never consulted by solvers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub walls: Walls,
    pub visited: bool,
}
