//! Snapshot of item positions.

use log::trace;

use regrid_core::{
    geometry::Point,
    item::{ItemError, Movable},
};

use super::Axis;
use crate::error::TransposeError;

/// Reads the top-left corner of every item, in selection order.
///
/// All bounding boxes are read here, before anything moves, so one item's
/// move can never influence another item's measured position.
///
/// # Errors
///
/// - [`TransposeError::Input`] if fewer than two items are supplied.
/// - [`TransposeError::Item`] if the host cannot measure an item.
pub fn read_positions<T: Movable>(items: &[T]) -> Result<Vec<Point>, TransposeError> {
    if items.len() < 2 {
        return Err(TransposeError::Input { count: items.len() });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<Point, TransposeError> {
            let position = read_position(index, item)?;
            trace!(index, x = position.x(), y = position.y(); "Read item position");
            Ok(position)
        })
        .collect()
}

/// Reads one item's current top-left corner.
///
/// Hosts are not trusted to report sane geometry: a bounding box with a NaN
/// or infinite component is treated as a failed read.
///
/// # Errors
///
/// Returns [`TransposeError::Item`] if the host cannot measure the item or
/// reports non-finite bounds.
pub fn read_position<T: Movable>(index: usize, item: &T) -> Result<Point, TransposeError> {
    let bounds = item
        .bounds()
        .map_err(|err| TransposeError::item(index, err))?;
    if !bounds.is_finite() {
        return Err(TransposeError::item(
            index,
            ItemError::new("host reported a non-finite bounding box"),
        ));
    }
    Ok(bounds.top_left())
}

/// Projects positions onto one axis.
pub fn axis_values(positions: &[Point], axis: Axis) -> Vec<f32> {
    positions
        .iter()
        .map(|position| match axis {
            Axis::Horizontal => position.x(),
            Axis::Vertical => position.y(),
        })
        .collect()
}
