//! Grid coordinates and wall sides: [`Coord`] and [`Side`].

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A (row, col) cell position. Rows grow down, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The neighbor on the given side.
    #[inline]
    pub const fn step(self, side: Side) -> Self {
        let (dr, dc) = side.delta();
        self.shift(dr, dc)
    }

    /// The stable string identifier for this position, `"{row}-{col}"`.
    pub fn id(self) -> String {
        format!("{}-{}", self.row, self.col)
    }

    /// The four cardinal neighbors, in [`Side::ALL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        [
            self.step(Side::Top),
            self.step(Side::Right),
            self.step(Side::Bottom),
            self.step(Side::Left),
        ]
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major (linear) order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// One of the four walls of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides, clockwise from `Top`.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The (drow, dcol) unit delta toward the adjacent cell on this side.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Side::Top => (-1, 0),
            Side::Right => (0, 1),
            Side::Bottom => (1, 0),
            Side::Left => (0, -1),
        }
    }

    /// The side facing back at us from the adjacent cell.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// The side of `from` shared with `to`, if the two cells are
    /// 4-connected-adjacent. Purely positional: compares row/col deltas.
    pub fn between(from: Coord, to: Coord) -> Option<Side> {
        match (to.row - from.row, to.col - from.col) {
            (-1, 0) => Some(Side::Top),
            (0, 1) => Some(Side::Right),
            (1, 0) => Some(Side::Bottom),
            (0, -1) => Some(Side::Left),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_id() {
        assert_eq!(Coord::new(3, 7).id(), "3-7");
        assert_eq!(Coord::ZERO.id(), "0-0");
    }

    #[test]
    fn coord_step_and_shift() {
        let c = Coord::new(2, 2);
        assert_eq!(c.step(Side::Top), Coord::new(1, 2));
        assert_eq!(c.step(Side::Right), Coord::new(2, 3));
        assert_eq!(c.step(Side::Bottom), Coord::new(3, 2));
        assert_eq!(c.step(Side::Left), Coord::new(2, 1));
        assert_eq!(c.shift(-2, 5), Coord::new(0, 7));
    }

    #[test]
    fn coord_row_major_order() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn side_opposite_is_involution() {
        for s in Side::ALL {
            assert_eq!(s.opposite().opposite(), s);
        }
    }

    #[test]
    fn side_between_adjacent() {
        let c = Coord::new(4, 4);
        for s in Side::ALL {
            assert_eq!(Side::between(c, c.step(s)), Some(s));
            // And the reverse direction yields the opposite side.
            assert_eq!(Side::between(c.step(s), c), Some(s.opposite()));
        }
    }

    #[test]
    fn side_between_non_adjacent() {
        let c = Coord::new(4, 4);
        assert_eq!(Side::between(c, c), None);
        assert_eq!(Side::between(c, c.shift(1, 1)), None);
        assert_eq!(Side::between(c, c.shift(0, 2)), None);
    }

    #[test]
    fn neighbors_4_matches_sides() {
        let c = Coord::new(1, 1);
        let ns = c.neighbors_4();
        assert_eq!(ns[0], Coord::new(0, 1));
        assert_eq!(ns[1], Coord::new(1, 2));
        assert_eq!(ns[2], Coord::new(2, 1));
        assert_eq!(ns[3], Coord::new(1, 0));
    }
}
