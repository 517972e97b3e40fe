//! Geometric primitives for item positions and bounding boxes.
//!
//! This module provides the value types the grid engine reads from and
//! writes to host items.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in document space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned bounding box anchored at its top-left corner
//!
//! # Coordinate System
//!
//! Regrid uses the document coordinate system of print-oriented editors,
//! where the vertical axis points up:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **X-axis**: Increases rightward (positive to the right)
//! - **Y-axis**: Increases upward (a larger `y` is higher on the page)
//!
//! A bounding box's `top` is therefore its largest `y`, and its bottom edge
//! lies at `top - height`.

/// A 2D point representing a position in document coordinate space.
///
/// # Examples
///
/// ```
/// # use regrid_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let delta = p1.sub_point(p2);
/// assert_eq!(delta.x(), 5.0);
/// assert_eq!(delta.y(), 15.0);
/// assert_eq!(delta.negate(), Point::new(-5.0, -15.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks that neither coordinate is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Returns the point with both coordinates negated
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned bounding box described by its top-left corner and size.
///
/// This mirrors what host editors report for an item: `left`, `top`,
/// `width` and `height`. Because the y-axis points up, `bottom()` is
/// `top - height`.
///
/// # Examples
///
/// ```
/// # use regrid_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new_from_top_left(Point::new(10.0, 50.0), Size::new(20.0, 30.0));
/// assert_eq!(bounds.right(), 30.0);
/// assert_eq!(bounds.bottom(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl Bounds {
    /// Creates bounds from the left and top edges plus dimensions
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates bounds from a top-left corner and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x(), top_left.y(), size.width(), size.height())
    }

    /// Returns the x-coordinate of the left edge
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the y-coordinate of the top edge (the largest `y`)
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the x-coordinate of the right edge
    pub fn right(self) -> f32 {
        self.left + self.width
    }

    /// Returns the y-coordinate of the bottom edge (the smallest `y`)
    pub fn bottom(self) -> f32 {
        self.top - self.height
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the top-left corner as a Point
    pub fn top_left(self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns the dimensions of the bounds
    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Checks that every component is a finite number
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Returns the smallest bounds containing both `self` and `other`
    pub fn merge(&self, other: &Self) -> Self {
        let left = self.left.min(other.left);
        let top = self.top.max(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().min(other.bottom());

        Self::new(left, top, right - left, top - bottom)
    }
}
