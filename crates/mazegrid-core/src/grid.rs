//! The [`Grid`] type — an owning, row-major grid of [`Cell`]s.
//!
//! The grid exclusively owns its cells; all mutation goes through `&mut`
//! methods, so there is no shared-buffer aliasing and no interior
//! mutability. Dimensions are fixed at construction.

use rand::{Rng, RngExt};

use crate::cell::Cell;
use crate::coord::{Coord, Side};
use crate::error::Error;

/// An owning 2D grid of maze [`Cell`]s.
///
/// Cells are stored row-major: `index(row, col) = row * cols + col`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
    carved: bool,
}

impl Grid {
    /// Create a new grid of the given dimensions with every wall present.
    ///
    /// Fails with [`Error::InvalidDimension`] unless both dimensions are
    /// at least 1.
    pub fn new(rows: i32, cols: i32) -> Result<Self, Error> {
        if rows < 1 || cols < 1 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Self {
            cells: vec![Cell::default(); (rows as usize) * (cols as usize)],
            rows,
            cols,
            carved: false,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// First cell in linear order — the conventional maze start.
    #[inline]
    pub fn start(&self) -> Coord {
        Coord::ZERO
    }

    /// Last cell in linear order — the conventional maze end.
    #[inline]
    pub fn end(&self) -> Coord {
        Coord::new(self.rows - 1, self.cols - 1)
    }

    /// Whether a generator has already carved this grid.
    #[inline]
    pub fn is_carved(&self) -> bool {
        self.carved
    }

    /// Record that carving is complete. Called by generators; a carved
    /// grid refuses further carving.
    #[inline]
    pub fn mark_carved(&mut self) {
        self.carved = true;
    }

    // -----------------------------------------------------------------------
    // Indexing
    // -----------------------------------------------------------------------

    /// Row-major linear index. Callers guarantee bounds.
    #[inline]
    fn index(&self, row: i32, col: i32) -> usize {
        debug_assert!(self.contains(Coord::new(row, col)));
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    /// Convert a coordinate to a flat index. `None` if out of range.
    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(self.index(c.row, c.col))
        } else {
            None
        }
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        Coord::new(
            (idx / self.cols as usize) as i32,
            (idx % self.cols as usize) as i32,
        )
    }

    fn out_of_range(&self, c: Coord) -> Error {
        Error::IndexOutOfRange {
            coord: c,
            rows: self.rows,
            cols: self.cols,
        }
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Checked cell access. Fails with [`Error::IndexOutOfRange`].
    pub fn cell(&self, c: Coord) -> Result<&Cell, Error> {
        self.idx(c)
            .map(|i| &self.cells[i])
            .ok_or_else(|| self.out_of_range(c))
    }

    /// Checked mutable cell access. Fails with [`Error::IndexOutOfRange`].
    pub fn cell_mut(&mut self, c: Coord) -> Result<&mut Cell, Error> {
        match self.idx(c) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(self.out_of_range(c)),
        }
    }

    /// Option-flavored cell access, for walkers that probe neighbors.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<&Cell> {
        self.idx(c).map(|i| &self.cells[i])
    }

    /// A uniformly random coordinate.
    pub fn random_coord(&self, rng: &mut impl Rng) -> Coord {
        Coord::new(
            rng.random_range(0..self.rows),
            rng.random_range(0..self.cols),
        )
    }

    /// Row-major iterator over `(Coord, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.coord(i), cell))
    }

    // -----------------------------------------------------------------------
    // Walls
    // -----------------------------------------------------------------------

    /// Whether the wall on `side` of `c` has been removed. Out-of-range
    /// coordinates report `false` (no open connection).
    #[inline]
    pub fn open(&self, c: Coord, side: Side) -> bool {
        match self.at(c) {
            Some(cell) => !cell.walls.has(side),
            None => false,
        }
    }

    /// Whether `a` and `b` are adjacent and joined by an open connection.
    pub fn open_between(&self, a: Coord, b: Coord) -> bool {
        match Side::between(a, b) {
            Some(side) => self.open(a, side),
            None => false,
        }
    }

    /// Remove the wall between `c` and its neighbor on `side`.
    ///
    /// Both wall flags are cleared in the same mutation, so the symmetry
    /// invariant (A open toward B iff B open toward A) holds at every
    /// step. Fails with [`Error::IndexOutOfRange`] if either cell is
    /// outside the grid: outer boundary walls cannot be removed.
    pub fn open_wall(&mut self, c: Coord, side: Side) -> Result<(), Error> {
        let n = c.step(side);
        let ci = self.idx(c).ok_or_else(|| self.out_of_range(c))?;
        let ni = self.idx(n).ok_or_else(|| self.out_of_range(n))?;
        self.cells[ci].walls.remove(side);
        self.cells[ni].walls.remove(side.opposite());
        Ok(())
    }

    /// Append the neighbors of `c` reachable through open walls.
    pub fn open_neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for side in Side::ALL {
            if self.open(c, side) {
                let n = c.step(side);
                if self.contains(n) {
                    buf.push(n);
                }
            }
        }
    }

    /// Total number of open internal connections. Each connection is
    /// counted once even though it clears a flag on both of its cells.
    pub fn open_connections(&self) -> usize {
        let total: usize = self.cells.iter().map(|c| c.walls.open_count()).sum();
        total / 2
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Render the maze walls as ASCII art, one `+---+` box per cell.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            // Top edge of this row.
            for col in 0..self.cols {
                out.push('+');
                let c = &self.cells[self.index(row, col)];
                out.push_str(if c.walls.top { "---" } else { "   " });
            }
            out.push_str("+\n");
            // Cell interiors with left walls; the row's trailing right wall.
            for col in 0..self.cols {
                let c = &self.cells[self.index(row, col)];
                out.push(if c.walls.left { '|' } else { ' ' });
                out.push_str("   ");
            }
            let last = &self.cells[self.index(row, self.cols - 1)];
            out.push(if last.walls.right { '|' } else { ' ' });
            out.push('\n');
        }
        // Bottom edge of the final row.
        for col in 0..self.cols {
            out.push('+');
            let c = &self.cells[self.index(self.rows - 1, col)];
            out.push_str(if c.walls.bottom { "---" } else { "   " });
        }
        out.push_str("+\n");
        out
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(2, 2).unwrap();
        g.open_wall(Coord::new(0, 0), Side::Bottom).unwrap();
        g.mark_carved();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows(), 2);
        assert_eq!(back.cols(), 2);
        assert!(back.is_carved());
        assert!(back.open_between(Coord::new(0, 0), Coord::new(1, 0)));
    }
}
