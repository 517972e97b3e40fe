//! Transposed cell mapping and placement pitches.
//!
//! Transposing exchanges the roles of rows and columns: the item in
//! `(row, col)` moves to `(col, row)`, and an `R x C` grid becomes `C x R`.
//! The spacing that separated rows now separates columns and vice versa.
//!
//! Grids with a single row or a single column only carry spacing
//! information on one axis. Those are handled as their own cases:
//!
//! | Shape              | Output        | Pitch required |
//! |--------------------|---------------|----------------|
//! | `1 x 1`            | error         | -              |
//! | `R x C`, both >= 2 | `C x R`       | both           |
//! | `1 x C`            | single column | column pitch   |
//! | `R x 1`            | single row    | row pitch      |

use std::fmt;

use log::debug;

use regrid_core::geometry::Point;

use super::{Axis, Cell};
use crate::{config::Anchor, error::TransposeError};

/// Row and column counts of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn rows(self) -> usize {
        self.rows
    }

    pub fn cols(self) -> usize {
        self.cols
    }

    /// Returns the shape with rows and columns exchanged.
    pub fn transposed(self) -> Self {
        Self::new(self.cols, self.rows)
    }

    /// Whether the grid resolves to a single cell.
    pub fn is_single_cell(self) -> bool {
        self.rows <= 1 && self.cols <= 1
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Everything needed to place items in the transposed grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransposePlan {
    shape: GridShape,
    horizontal_pitch: f32,
    vertical_pitch: f32,
    origin: Point,
}

impl TransposePlan {
    /// Shape of the original grid
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Spacing between columns of the transposed grid
    pub fn horizontal_pitch(&self) -> f32 {
        self.horizontal_pitch
    }

    /// Spacing between rows of the transposed grid
    pub fn vertical_pitch(&self) -> f32 {
        self.vertical_pitch
    }

    /// Position of cell `(0, 0)` of the transposed grid
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Computes the top-left target of an item whose original cell is `cell`.
    ///
    /// Rows advance downwards, so the row offset is subtracted from the
    /// origin's `y`.
    pub fn target(&self, cell: Cell) -> Point {
        let cell = cell.transposed();
        Point::new(
            self.origin.x() + cell.col() as f32 * self.horizontal_pitch,
            self.origin.y() - cell.row() as f32 * self.vertical_pitch,
        )
    }
}

/// Picks the point cell `(0, 0)` of the transposed grid is placed at.
///
/// The origin is always taken from the original axes, even though rows and
/// columns swap identity.
///
/// # Arguments
///
/// * `anchor` - Which corner of the original arrangement to keep.
/// * `columns` - Column centers, ascending.
/// * `rows` - Row centers, ascending.
pub fn origin(anchor: Anchor, columns: &[f32], rows: &[f32]) -> Point {
    let x = columns.first().copied().unwrap_or_default();
    let y = match anchor {
        Anchor::MinCenters => rows.first(),
        Anchor::TopLeft => rows.last(),
    }
    .copied()
    .unwrap_or_default();

    Point::new(x, y)
}

/// Builds the transpose plan for a grid.
///
/// # Arguments
///
/// * `shape` - Row and column counts of the original grid.
/// * `column_pitch` - Estimated spacing between original columns (`0` if
///   indeterminate).
/// * `row_pitch` - Estimated spacing between original rows (`0` if
///   indeterminate).
/// * `origin` - Anchor point, see [`origin`].
///
/// # Errors
///
/// - [`TransposeError::SingleCell`] for a `1 x 1` grid.
/// - [`TransposeError::DegenerateGrid`] when a pitch the shape depends on is
///   indeterminate.
pub fn plan(
    shape: GridShape,
    column_pitch: f32,
    row_pitch: f32,
    origin: Point,
) -> Result<TransposePlan, TransposeError> {
    let require = |pitch: f32, axis: Axis| {
        if pitch > 0.0 {
            Ok(pitch)
        } else {
            Err(TransposeError::DegenerateGrid { axis })
        }
    };

    let (horizontal_pitch, vertical_pitch) = match (shape.rows, shape.cols) {
        (rows, cols) if rows <= 1 && cols <= 1 => return Err(TransposeError::SingleCell),
        // One row becomes one column, stacked by the column spacing.
        (1, _) => (row_pitch, require(column_pitch, Axis::Horizontal)?),
        // One column becomes one row, spread by the row spacing.
        (_, 1) => (require(row_pitch, Axis::Vertical)?, column_pitch),
        _ => (
            require(row_pitch, Axis::Vertical)?,
            require(column_pitch, Axis::Horizontal)?,
        ),
    };

    let plan = TransposePlan {
        shape,
        horizontal_pitch,
        vertical_pitch,
        origin,
    };
    debug!(
        shape:% = shape,
        transposed:% = shape.transposed(),
        horizontal_pitch,
        vertical_pitch,
        origin_x = origin.x(),
        origin_y = origin.y();
        "Transpose plan built"
    );
    Ok(plan)
}
