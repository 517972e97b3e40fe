//! A serializable in-memory scene of rectangular items.
//!
//! [`Scene`] is the stand-in host used by the command-line front end: it is
//! read from and written back to a document file, and every [`Shape`] in it
//! implements [`Movable`].
//!
//! # Example
//!
//! ```
//! # use regrid_core::{geometry::Point, item::Movable, scene::Shape};
//! let mut shape = Shape::new("a", 0.0, 100.0, 20.0, 20.0);
//! shape.translate_by(Point::new(10.0, -50.0)).unwrap();
//! assert_eq!(shape.bounds().unwrap().top_left(), Point::new(10.0, 50.0));
//! ```

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Bounds, Point, Size},
    item::{ItemError, Movable},
};

/// A named rectangle placed in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: String,
    left: f32,
    top: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
}

impl Shape {
    pub fn new(id: impl Into<String>, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            left,
            top,
            width,
            height,
        }
    }

    /// Returns the shape's identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the position of the top-left corner
    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Movable for Shape {
    fn bounds(&self) -> Result<Bounds, ItemError> {
        let bounds = Bounds::new_from_top_left(self.position(), self.size());
        if !bounds.is_finite() {
            return Err(ItemError::new(format!(
                "shape `{}` has a non-finite bounding box",
                self.id
            )));
        }
        Ok(bounds)
    }

    fn translate_by(&mut self, delta: Point) -> Result<(), ItemError> {
        if !delta.is_finite() {
            return Err(ItemError::new(format!(
                "refusing to move shape `{}` by a non-finite offset",
                self.id
            )));
        }

        self.left += delta.x();
        self.top += delta.y();
        trace!(id = self.id, left = self.left, top = self.top; "Shape moved");
        Ok(())
    }
}

/// An ordered collection of shapes; order is the selection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    items: Vec<Shape>,
}

impl Scene {
    pub fn new(items: Vec<Shape>) -> Self {
        Self { items }
    }

    /// Returns the shapes in selection order
    pub fn items(&self) -> &[Shape] {
        &self.items
    }

    /// Returns the shapes mutably, for handing to the grid engine
    pub fn items_mut(&mut self) -> &mut [Shape] {
        &mut self.items
    }

    /// Returns the smallest bounds enclosing every shape, if there are any
    pub fn extent(&self) -> Option<Bounds> {
        self.items
            .iter()
            .map(|shape| Bounds::new_from_top_left(shape.position(), shape.size()))
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_shape_translate_moves_top_left() {
        let mut shape = Shape::new("a", 10.0, 20.0, 5.0, 5.0);
        shape.translate_by(Point::new(-10.0, 30.0)).unwrap();

        let bounds = shape.bounds().unwrap();
        assert_approx_eq!(f32, bounds.left(), 0.0);
        assert_approx_eq!(f32, bounds.top(), 50.0);
        assert_eq!(bounds.to_size(), shape.size());
    }

    #[test]
    fn test_shape_rejects_non_finite_bounds() {
        let shape = Shape::new("bad", f32::NAN, 0.0, 1.0, 1.0);
        let err = shape.bounds().unwrap_err();
        assert!(err.message().contains("bad"));
    }

    #[test]
    fn test_shape_rejects_non_finite_move() {
        let mut shape = Shape::new("a", 0.0, 0.0, 1.0, 1.0);
        assert!(shape.translate_by(Point::new(f32::INFINITY, 0.0)).is_err());
        assert_eq!(shape.position(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_scene_extent() {
        let scene = Scene::new(vec![
            Shape::new("a", 0.0, 100.0, 10.0, 10.0),
            Shape::new("b", 100.0, 0.0, 20.0, 20.0),
        ]);

        let extent = scene.extent().unwrap();
        assert_approx_eq!(f32, extent.left(), 0.0);
        assert_approx_eq!(f32, extent.top(), 100.0);
        assert_approx_eq!(f32, extent.right(), 120.0);
        assert_approx_eq!(f32, extent.bottom(), -20.0);
        assert!(Scene::default().extent().is_none());
    }
}
