//! The host-facing item interface.
//!
//! The grid engine never owns the objects it rearranges. A host editor
//! exposes each selected object through [`Movable`]: the engine reads the
//! object's bounding box and asks the host to translate it by a delta.

use thiserror::Error;

use crate::geometry::{Bounds, Point};

/// Failure reported by a host while reading or moving an item.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ItemError {
    message: String,
}

impl ItemError {
    /// Create a new item error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A movable 2-D object owned by a host editor.
///
/// Implementations must report the bounding box as it is at call time;
/// the engine re-reads it right before moving an item.
pub trait Movable {
    /// Returns the item's current axis-aligned bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if the host cannot measure the item.
    fn bounds(&self) -> Result<Bounds, ItemError>;

    /// Moves the item by `delta` without resizing it.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if the host refuses or fails the move.
    fn translate_by(&mut self, delta: Point) -> Result<(), ItemError>;
}
