//! Regrid - reconstruct the grid behind a loose arrangement of items and transpose it.
//!
//! Given a selection of 2-D items that roughly line up in rows and columns,
//! regrid infers the rows and columns under a snap tolerance, assigns each
//! item to a cell, and moves the items so that rows become columns and
//! columns become rows. Sparse grids and single-row or single-column
//! arrangements are supported.
//!
//! The engine works against any host that implements
//! [`regrid_core::item::Movable`]. All analysis happens before the first item
//! is moved, so a rejected selection is left untouched.

pub mod config;
pub mod grid;

mod error;
mod transposer;

pub use error::TransposeError;
pub use transposer::{Placement, Plan, Summary, Transposer};
