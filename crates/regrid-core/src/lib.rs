//! Regrid Core Types and Definitions
//!
//! This crate provides the foundational types shared by the regrid engine
//! and its front ends. It includes:
//!
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Items**: The [`item::Movable`] interface a host editor implements for
//!   every object the engine may reposition
//! - **Scene**: A serializable in-memory item model ([`scene`] module)

pub mod geometry;
pub mod item;
pub mod scene;
