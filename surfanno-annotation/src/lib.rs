//! # surfanno-annotation
//!
//! The interactive half of the surfanno workflow: resolving brush strokes to
//! vertex sets, keeping the label field and measurement table consistent
//! through an [`AnnotationSession`], and the static [`CommandRegistry`] the
//! host viewer's menus dispatch through.

pub mod brush;
pub mod registry;
pub mod session;

pub use registry::*;
pub use session::*;
