//! The [`Error`] enum shared across the mazegrid crates.

use crate::coord::Coord;

/// Errors reported by grid construction, cell access, and carving.
///
/// An unreachable end cell is *not* an error: solvers signal it by
/// returning an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Grid construction with non-positive dimensions.
    #[error("invalid grid dimensions {rows}x{cols}: both must be >= 1")]
    InvalidDimension { rows: i32, cols: i32 },

    /// Checked cell access outside the grid.
    #[error("coordinate {coord} out of range for {rows}x{cols} grid")]
    IndexOutOfRange { coord: Coord, rows: i32, cols: i32 },

    /// A second carve on an already-carved grid. Carving is single-use
    /// per grid instance.
    #[error("grid has already been carved")]
    AlreadyCarved,
}
