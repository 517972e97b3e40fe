//! Cell assignment and collision detection.

use std::fmt;

use indexmap::IndexMap;
use log::trace;

use regrid_core::geometry::Point;

use crate::error::TransposeError;

/// A (row, column) grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Returns the cell with row and column exchanged.
    pub fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The injective mapping from item index to cell.
///
/// Items are referred to by their index in the selection.
#[derive(Debug, Clone, Default)]
pub struct CellAssignment {
    occupancy: IndexMap<Cell, usize>,
    cells: Vec<Cell>,
}

impl CellAssignment {
    /// Returns the cell of the item at `index`
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns the index of the item occupying `cell`
    pub fn occupant(&self, cell: Cell) -> Option<usize> {
        self.occupancy.get(&cell).copied()
    }

    /// Iterates over `(item index, cell)` pairs in selection order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Cell)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Index of the center closest to `value`; ties go to the lower index.
fn nearest(centers: &[f32], value: f32) -> usize {
    centers
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - value).abs().total_cmp(&(*b - value).abs()))
        .map_or(0, |(index, _)| index)
}

/// Assigns every item to its nearest column and nearest row.
///
/// Matching is plain nearest-center, without a tolerance bound.
///
/// # Arguments
///
/// * `positions` - Top-left corner of each item, in selection order.
/// * `columns` - Column centers, ascending (index 0 is leftmost).
/// * `rows` - Row centers, descending (index 0 is topmost under the y-up
///   convention).
///
/// # Errors
///
/// Returns [`TransposeError::Collision`] as soon as a second item lands on an
/// occupied cell. Items are scanned in selection order, so `first` is always
/// the earlier of the two in the selection.
pub fn assign(
    positions: &[Point],
    columns: &[f32],
    rows: &[f32],
) -> Result<CellAssignment, TransposeError> {
    let mut assignment = CellAssignment {
        occupancy: IndexMap::with_capacity(positions.len()),
        cells: Vec::with_capacity(positions.len()),
    };

    for (index, position) in positions.iter().enumerate() {
        let cell = Cell::new(nearest(rows, position.y()), nearest(columns, position.x()));

        if let Some(&first) = assignment.occupancy.get(&cell) {
            return Err(TransposeError::Collision {
                row: cell.row(),
                col: cell.col(),
                first,
                second: index,
            });
        }

        trace!(index, row = cell.row(), col = cell.col(); "Assigned item to cell");
        assignment.occupancy.insert(cell, index);
        assignment.cells.push(cell);
    }

    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_positions() -> Vec<Point> {
        vec![
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(200.0, 0.0),
        ]
    }

    #[test]
    fn test_assigns_topmost_row_first() {
        let assignment = assign(&grid_positions(), &[0.0, 100.0, 200.0], &[100.0, 0.0]).unwrap();

        assert_eq!(assignment.len(), 6);
        assert_eq!(assignment.cell(0), Some(Cell::new(0, 0)));
        assert_eq!(assignment.cell(2), Some(Cell::new(0, 2)));
        assert_eq!(assignment.cell(5), Some(Cell::new(1, 2)));
        assert_eq!(assignment.occupant(Cell::new(1, 1)), Some(4));
    }

    #[test]
    fn test_nearest_match_ignores_tolerance() {
        // 46 is far from both columns but closer to 0.
        let positions = [Point::new(46.0, 0.0), Point::new(100.0, 0.0)];
        let assignment = assign(&positions, &[0.0, 100.0], &[0.0]).unwrap();

        assert_eq!(assignment.cell(0), Some(Cell::new(0, 0)));
        assert_eq!(assignment.cell(1), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_collision_reports_cell_and_selection_order() {
        let positions = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(3.0, -2.0),
        ];

        let err = assign(&positions, &[1.5, 100.0], &[-1.0]).unwrap_err();
        assert!(matches!(
            err,
            TransposeError::Collision {
                row: 0,
                col: 0,
                first: 0,
                second: 2,
            }
        ));
    }

    #[test]
    fn test_sparse_grid_leaves_cells_empty() {
        let positions = [Point::new(0.0, 100.0), Point::new(100.0, 0.0)];
        let assignment = assign(&positions, &[0.0, 100.0], &[100.0, 0.0]).unwrap();

        assert_eq!(assignment.occupant(Cell::new(0, 1)), None);
        assert_eq!(assignment.occupant(Cell::new(1, 1)), Some(1));
    }

    #[test]
    fn test_cell_transposed() {
        assert_eq!(Cell::new(1, 2).transposed(), Cell::new(2, 1));
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
    }
}
