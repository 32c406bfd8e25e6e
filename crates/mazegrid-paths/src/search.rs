//! Uniform-cost best-first search with path reconstruction.

use std::collections::BinaryHeap;

use mazegrid_core::{Coord, Error, Grid};

use crate::traits::Pather;

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Internal per-cell search node
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct Node {
    dist: u32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `dist` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    dist: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest dist first.
        other.dist.cmp(&self.dist).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Reusable shortest-path searcher for a rows×cols grid rectangle.
///
/// All per-cell search state (tentative distance, predecessor, frontier
/// membership) lives here rather than on the grid's cells, keeping the
/// grid immutable during solving. A generation counter lazily invalidates
/// state between runs, so repeated queries incur no clearing pass and no
/// allocations after warm-up.
#[derive(Debug)]
pub struct Search {
    rows: i32,
    cols: i32,
    width: usize,
    nodes: Vec<Node>,
    generation: u32,
    // shared scratch buffer for neighbor queries
    nbuf: Vec<Coord>,
}

impl Search {
    /// Create a searcher for a rows×cols rectangle.
    ///
    /// Fails with [`Error::InvalidDimension`] unless both dimensions are
    /// at least 1.
    pub fn new(rows: i32, cols: i32) -> Result<Self, Error> {
        if rows < 1 || cols < 1 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            width: cols as usize,
            nodes: vec![Node::default(); (rows as usize) * (cols as usize)],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        })
    }

    /// Create a searcher sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            width: grid.cols() as usize,
            nodes: vec![Node::default(); grid.len()],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the rectangle dimensions, reallocating the node array only
    /// when the new size exceeds existing capacity. Otherwise the array is
    /// kept and the generation counter is bumped so stale entries are
    /// ignored.
    pub fn set_dims(&mut self, rows: i32, cols: i32) {
        let new_len = (rows.max(0) as usize) * (cols.max(0) as usize);
        self.rows = rows;
        self.cols = cols;
        self.width = cols.max(0) as usize;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a coordinate to a flat index. `None` if out of range.
    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols {
            Some((c.row as usize) * self.width + (c.col as usize))
        } else {
            None
        }
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.width) as i32, (idx % self.width) as i32)
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Compute a minimum-step path from `from` to `to`, where every
    /// neighbor step costs one.
    ///
    /// Returns the full path including both endpoints, or `None` if no
    /// path exists within the rectangle (or either endpoint lies outside
    /// it). `from == to` yields a single-element path.
    pub fn shortest_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Vec<Coord>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            // Stamp the trivial run so dist_at reports it like any other.
            self.generation = self.generation.wrapping_add(1);
            let node = &mut self.nodes[start_idx];
            node.dist = 0;
            node.parent = usize::MAX;
            node.generation = self.generation;
            node.open = false;
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.dist = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            dist: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            // Settle the cell: its distance is now final.
            self.nodes[ci].open = false;
            let current_dist = self.nodes[ci].dist;
            let current_coord = self.coord(ci);

            nbuf.clear();
            pather.neighbors(current_coord, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative = current_dist + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.dist {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.dist = UNREACHABLE;
                }

                n.dist = tentative;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    dist: tentative,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct by walking predecessors back from the goal.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }

    /// Solve `grid` from its start to its end.
    ///
    /// Resizes the searcher if the grid dimensions changed. Returns the
    /// empty path when the end is unreachable — on a correctly carved
    /// maze that indicates either a generation bug or solving before
    /// carving, so it is reported but not fatal.
    pub fn solve(&mut self, grid: &Grid) -> Vec<Coord> {
        self.set_dims(grid.rows(), grid.cols());
        match self.shortest_path(grid, grid.start(), grid.end()) {
            Some(path) => path,
            None => {
                log::warn!(
                    "no path from {} to {} (grid carved: {})",
                    grid.start(),
                    grid.end(),
                    grid.is_carved()
                );
                Vec::new()
            }
        }
    }

    /// Distance computed for `c` during the last search.
    ///
    /// Returns `None` if `c` is out of range or was not reached. For
    /// settled cells this is the exact minimum step count from the start.
    pub fn dist_at(&self, c: Coord) -> Option<u32> {
        let i = self.idx(c)?;
        let n = &self.nodes[i];
        if n.generation == self.generation && n.dist != UNREACHABLE {
            Some(n.dist)
        } else {
            None
        }
    }
}
