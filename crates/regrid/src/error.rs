//! Error types for grid transposition.
//!
//! This module provides [`TransposeError`], the single error type returned by
//! every fallible operation of the engine. All variants are terminal: they are
//! raised while the grid is being analysed, before any item is moved.

use thiserror::Error;

use regrid_core::item::ItemError;

use crate::grid::Axis;

/// The main error type for grid transposition.
#[derive(Debug, Error)]
pub enum TransposeError {
    /// Fewer than two items were supplied.
    #[error("Input error: at least 2 items are required, got {count}")]
    Input { count: usize },

    /// Every item falls on one row and one column.
    #[error("Single cell: all items resolve to one row and one column")]
    SingleCell,

    /// A pitch required by the grid shape could not be estimated.
    #[error("Degenerate grid: cannot estimate {axis} pitch from fewer than 2 lines")]
    DegenerateGrid { axis: Axis },

    /// Two items were assigned to the same cell.
    #[error(
        "Collision: items #{first} and #{second} both occupy row {row}, column {col}"
    )]
    Collision {
        row: usize,
        col: usize,
        first: usize,
        second: usize,
    },

    /// A snap tolerance was zero, negative, or not a number.
    #[error("Invalid {axis} tolerance {value}: must be a finite number greater than 0")]
    InvalidTolerance { axis: Axis, value: f32 },

    /// The host failed to measure or move an item.
    #[error("Item #{index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: ItemError,
    },
}

impl TransposeError {
    /// Wrap a host failure for the item at `index`.
    pub fn item(index: usize, source: ItemError) -> Self {
        Self::Item { index, source }
    }
}
