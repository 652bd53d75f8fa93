//! # surfanno-measure
//!
//! Measurement tables and the scalar-field kernel seam for the surfanno
//! annotation workflow.
//!
//! A [`MeasurementTable`] keeps named per-vertex columns synchronized with a
//! surface's vertex ordering; [`ScalarFieldKernel`] is the opaque boundary to
//! whatever geometry library computes the actual fields.

pub mod kernel;
pub mod measurement;
pub mod table;

pub use kernel::*;
pub use measurement::*;
pub use table::*;
