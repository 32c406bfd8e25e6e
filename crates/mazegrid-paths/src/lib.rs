//! **mazegrid-paths** — Shortest-path search over carved mazes.
//!
//! Provides [`Search`], a uniform-cost best-first search (every open
//! connection costs one step) with path reconstruction. Search state
//! lives inside `Search`, not on the grid's cells, so the same grid can
//! be solved any number of times and the same `Search` can be reused
//! across grids without reallocation.
//!
//! The graph is abstracted behind the [`Pather`] trait, implemented for
//! [`mazegrid_core::Grid`] via its open connections.

pub mod search;
pub mod traits;

pub use search::{Search, UNREACHABLE};
pub use traits::Pather;
