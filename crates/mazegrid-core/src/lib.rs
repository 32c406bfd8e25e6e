//! **mazegrid-core** — Foundational types for maze generation and solving.
//!
//! This crate provides the types shared across the *mazegrid* workspace:
//! grid coordinates, cells with per-side wall flags, the owning [`Grid`],
//! and the [`Error`] enum reported by fallible operations.

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;

pub use cell::{Cell, Walls};
pub use coord::{Coord, Side};
pub use error::Error;
pub use grid::Grid;
