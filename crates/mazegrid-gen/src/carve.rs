//! Randomized depth-first maze carving.
//!
//! The carver walks the grid depth-first from a random cell, knocking
//! down the wall toward a random unvisited neighbor at each step and
//! backtracking when a dead end is reached. Every cell is visited exactly
//! once, so the open connections form a spanning tree of the grid graph:
//! a *perfect* maze with exactly one route between any two cells.

use rand::{Rng, RngExt};

use mazegrid_core::{Coord, Error, Grid, Side};

/// Maze generator operating on a [`Grid`].
///
/// Generic over the random source so tests can inject a seeded rng.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator with the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze into `grid` in place.
    ///
    /// Carving is single-use: a grid that has already been carved is
    /// refused with [`Error::AlreadyCarved`] rather than silently
    /// re-walked (every cell would already be marked visited, turning a
    /// second run into a no-op).
    ///
    /// The maze start is [`Grid::start`] and the end is [`Grid::end`];
    /// both are reachable from everywhere once carving completes.
    pub fn carve(&mut self, grid: &mut Grid) -> Result<(), Error> {
        if grid.is_carved() {
            return Err(Error::AlreadyCarved);
        }
        log::debug!("carving {}x{} maze", grid.rows(), grid.cols());

        let mut stack: Vec<Coord> = Vec::with_capacity(grid.len());
        let mut sides: Vec<Side> = Vec::with_capacity(4);

        let first = grid.random_coord(&mut self.rng);
        grid.cell_mut(first)?.visited = true;
        stack.push(first);

        while let Some(current) = stack.pop() {
            sides.clear();
            unvisited_sides(grid, current, &mut sides);

            // Dead end: backtrack by leaving the cell popped.
            if sides.is_empty() {
                continue;
            }

            // Keep the cell around for future backtracking, then step
            // through a random open-able wall.
            stack.push(current);
            let side = sides[self.rng.random_range(0..sides.len())];
            grid.open_wall(current, side)?;
            let next = current.step(side);
            grid.cell_mut(next)?.visited = true;
            stack.push(next);
        }

        grid.mark_carved();
        log::debug!(
            "carved maze: {} cells, {} open connections",
            grid.len(),
            grid.open_connections()
        );
        Ok(())
    }
}

/// Append the sides of `c` that face an in-grid, not-yet-visited cell.
fn unvisited_sides(grid: &Grid, c: Coord, out: &mut Vec<Side>) {
    for side in Side::ALL {
        if let Some(cell) = grid.at(c.step(side)) {
            if !cell.visited {
                out.push(side);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn carved(rows: i32, cols: i32, seed: u64) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        let mut generator = MazeGen::new(StdRng::seed_from_u64(seed));
        generator.carve(&mut grid).unwrap();
        grid
    }

    /// Flood fill over open connections, returning the number of cells
    /// reachable from the start.
    fn reachable_cells(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.len()];
        let mut stack = vec![grid.start()];
        let mut buf = Vec::new();
        let mut count = 0;
        seen[0] = true;
        while let Some(c) = stack.pop() {
            count += 1;
            buf.clear();
            grid.open_neighbors(c, &mut buf);
            for &n in &buf {
                let i = (n.row * grid.cols() + n.col) as usize;
                if !seen[i] {
                    seen[i] = true;
                    stack.push(n);
                }
            }
        }
        count
    }

    #[test]
    fn carve_produces_spanning_tree() {
        for &(rows, cols) in &[(1, 1), (1, 8), (8, 1), (2, 2), (5, 7), (12, 12)] {
            let grid = carved(rows, cols, 7);
            let n = grid.len();
            // Connected with exactly n - 1 open connections: a tree.
            assert_eq!(reachable_cells(&grid), n, "{rows}x{cols} not connected");
            assert_eq!(grid.open_connections(), n - 1, "{rows}x{cols} not a tree");
        }
    }

    #[test]
    fn carve_visits_every_cell() {
        let grid = carved(6, 9, 3);
        assert!(grid.iter().all(|(_, cell)| cell.visited));
        assert!(grid.is_carved());
    }

    #[test]
    fn wall_symmetry_holds_everywhere() {
        let grid = carved(10, 10, 99);
        for (c, _) in grid.iter() {
            for side in Side::ALL {
                let n = c.step(side);
                if grid.contains(n) {
                    assert_eq!(
                        grid.open(c, side),
                        grid.open(n, side.opposite()),
                        "asymmetric wall between {c} and {n}"
                    );
                } else {
                    // Outer boundary walls are never removed.
                    assert!(!grid.open(c, side), "boundary breached at {c}");
                }
            }
        }
    }

    #[test]
    fn carve_is_deterministic_for_a_seed() {
        let a = carved(9, 9, 2024);
        let b = carved(9, 9, 2024);
        for ((ca, cell_a), (cb, cell_b)) in a.iter().zip(b.iter()) {
            assert_eq!(ca, cb);
            assert_eq!(cell_a.walls, cell_b.walls);
        }
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = carved(9, 9, 1);
        let b = carved(9, 9, 2);
        let same = a
            .iter()
            .zip(b.iter())
            .all(|((_, x), (_, y))| x.walls == y.walls);
        assert!(!same);
    }

    #[test]
    fn second_carve_is_refused() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut generator = MazeGen::new(StdRng::seed_from_u64(0));
        generator.carve(&mut grid).unwrap();
        assert_eq!(generator.carve(&mut grid), Err(Error::AlreadyCarved));
    }

    #[test]
    fn two_by_two_has_three_connections() {
        for seed in 0..16 {
            let grid = carved(2, 2, seed);
            assert_eq!(grid.open_connections(), 3);
        }
    }

    #[test]
    fn single_cell_grid_carves_to_nothing() {
        let grid = carved(1, 1, 0);
        assert!(grid.is_carved());
        assert_eq!(grid.open_connections(), 0);
    }
}
