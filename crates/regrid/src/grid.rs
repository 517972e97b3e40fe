//! Grid reconstruction and transposition.
//!
//! The pipeline runs once per invocation, in this order:
//!
//! 1. [`bounds`] snapshots each item's top-left corner.
//! 2. [`cluster`] groups left edges into columns and top edges into rows.
//! 3. [`assign`] maps every item to a unique (row, column) cell.
//! 4. [`pitch`] estimates the spacing between adjacent lines on each axis.
//! 5. [`transpose`] swaps rows and columns and picks the pitches to place with.
//! 6. [`reposition`] moves each item to its transposed cell.
//!
//! Steps 1 to 5 only read; step 6 is the only one that mutates items.

pub mod assign;
pub mod bounds;
pub mod cluster;
pub mod pitch;
pub mod reposition;
pub mod transpose;

use std::fmt;

pub use assign::{Cell, CellAssignment};
pub use transpose::{GridShape, TransposePlan};

/// One of the two document axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x-axis; clusters along it are columns.
    Horizontal,
    /// The y-axis; clusters along it are rows.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}
