//! **mazegrid-gen** — Maze generation for mazegrid grids.
//!
//! Provides [`MazeGen`], a randomized iterative depth-first carver with
//! backtracking that turns a closed [`mazegrid_core::Grid`] into a
//! perfect maze (a spanning tree of open connections).

pub mod carve;

pub use carve::MazeGen;
