//! Moving items to their transposed cells.
//!
//! This is the only stage that mutates items. It runs in two passes: first
//! every item's current bounds are re-read and its translation computed,
//! then every translation is applied. If the host fails a move part-way
//! through, the items already moved are put back.

use log::{trace, warn};

use regrid_core::{
    geometry::Point,
    item::{ItemError, Movable},
};

use super::bounds::read_position;
use crate::error::TransposeError;

/// A pending move of one item to an absolute top-left position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    index: usize,
    target: Point,
}

impl Move {
    pub fn new(index: usize, target: Point) -> Self {
        Self { index, target }
    }

    /// Index of the item in the selection
    pub fn index(&self) -> usize {
        self.index
    }

    /// Where the item's top-left corner should end up
    pub fn target(&self) -> Point {
        self.target
    }
}

/// Moves each item so its top-left corner lands on its target.
///
/// Returns the number of items moved.
///
/// # Errors
///
/// Returns [`TransposeError::Item`] if an item cannot be measured (nothing
/// has moved yet) or cannot be moved (items moved before it are translated
/// back first).
pub fn apply<T: Movable>(items: &mut [T], moves: &[Move]) -> Result<usize, TransposeError> {
    let deltas = moves
        .iter()
        .map(|mv| -> Result<(usize, Point), TransposeError> {
            let item = items.get(mv.index).ok_or_else(|| {
                TransposeError::item(mv.index, ItemError::new("item is not in the selection"))
            })?;
            let current = read_position(mv.index, item)?;
            Ok((mv.index, mv.target.sub_point(current)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (applied, &(index, delta)) in deltas.iter().enumerate() {
        trace!(index, dx = delta.x(), dy = delta.y(); "Moving item");

        if let Err(err) = items[index].translate_by(delta) {
            warn!(index, moved = applied; "Move failed, restoring moved items");
            rollback(items, &deltas[..applied]);
            return Err(TransposeError::item(index, err));
        }
    }

    Ok(deltas.len())
}

/// Undoes already applied translations, most recent first.
fn rollback<T: Movable>(items: &mut [T], applied: &[(usize, Point)]) {
    for &(index, delta) in applied.iter().rev() {
        if let Err(err) = items[index].translate_by(delta.negate()) {
            warn!(index, err:err; "Could not restore item position");
        }
    }
}
