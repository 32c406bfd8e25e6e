//! The [`Pather`] seam between search and the maze graph.

use mazegrid_core::{Coord, Grid};

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// A carved grid is a graph whose edges are the open connections.
impl Pather for Grid {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        self.open_neighbors(c, buf);
    }
}
