//! Core data structures for surfanno
//!
//! This crate provides the shared types of the surface annotation workflow:
//! surfaces, brush strokes, per-vertex label fields and the common error
//! taxonomy.

pub mod error;
pub mod label_field;
pub mod stroke;
pub mod surface;

pub use error::*;
pub use label_field::*;
pub use stroke::*;
pub use surface::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};

/// Single-precision 3D point, the vertex position type
pub type Point3f = Point3<f32>;
/// Single-precision 3D vector
pub type Vector3f = Vector3<f32>;
