//! Brush stroke input types
//!
//! A [`Stroke`] is the transient record of one pointer gesture: the sampled
//! pointer positions, the brush shape and the brush radius. It is consumed
//! once to resolve an affected-vertex set and then discarded.

use crate::Point3f;
use serde::{Deserialize, Serialize};

/// Shape of the brush footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushShape {
    /// Distance to the polyline through the stroke points.
    Freehand,
    /// Distance to the first stroke point only.
    Circle,
}

/// One pointer gesture, finalized.
///
/// Screen-space strokes embed their 2D positions with z = 0 and are resolved
/// against host-projected vertex positions with z = 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point3f>,
    pub shape: BrushShape,
    pub radius: f32,
}

impl Stroke {
    /// A freehand stroke through the given points
    pub fn freehand(points: Vec<Point3f>, radius: f32) -> Self {
        Self {
            points,
            shape: BrushShape::Freehand,
            radius,
        }
    }

    /// A circle brush centered at `center`
    pub fn circle(center: Point3f, radius: f32) -> Self {
        Self {
            points: vec![center],
            shape: BrushShape::Circle,
            radius,
        }
    }

    /// Check if the stroke carries no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_stroke_has_one_point() {
        let stroke = Stroke::circle(Point3f::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(stroke.points.len(), 1);
        assert_eq!(stroke.shape, BrushShape::Circle);
    }

    #[test]
    fn test_empty_stroke() {
        let stroke = Stroke::freehand(vec![], 1.0);
        assert!(stroke.is_empty());
    }
}
