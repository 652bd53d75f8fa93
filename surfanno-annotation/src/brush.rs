//! Annotation brush
//!
//! Maps a finalized [`Stroke`] to the set of vertex indices it affects. The
//! mapping is purely geometric: a vertex is affected if its distance to the
//! brush footprint is within the stroke radius. Given identical inputs the
//! result is identical; nothing here depends on rendering state.

use std::collections::BTreeSet;

use rayon::prelude::*;
use surfanno_core::{BrushShape, Point3f, Stroke, Surface};

/// Resolve a stroke against a surface's vertices.
///
/// Freehand strokes affect every vertex whose minimum point-to-segment
/// distance over the stroke polyline is within the radius; circle strokes
/// measure against the first stroke point only. An empty stroke affects no
/// vertices.
pub fn resolve(surface: &Surface, stroke: &Stroke) -> BTreeSet<usize> {
    resolve_positions(&surface.vertices, stroke)
}

/// Resolve a stroke against an arbitrary position array.
///
/// Used for screen-space brushing: the host projects vertex positions into
/// the view plane (z = 0) and passes the projected array here together with a
/// z = 0 stroke. Index `i` of the result refers to `positions[i]`.
pub fn resolve_positions(positions: &[Point3f], stroke: &Stroke) -> BTreeSet<usize> {
    if stroke.is_empty() {
        return BTreeSet::new();
    }

    positions
        .par_iter()
        .enumerate()
        .filter(|(_, p)| distance_to_stroke(p, stroke) <= stroke.radius)
        .map(|(i, _)| i)
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

fn distance_to_stroke(point: &Point3f, stroke: &Stroke) -> f32 {
    match stroke.shape {
        BrushShape::Circle => (point - stroke.points[0]).norm(),
        BrushShape::Freehand => {
            if stroke.points.len() == 1 {
                return (point - stroke.points[0]).norm();
            }
            stroke
                .points
                .windows(2)
                .map(|seg| point_segment_distance(point, &seg[0], &seg[1]))
                .fold(f32::INFINITY, f32::min)
        }
    }
}

/// Distance from `p` to the segment `a`-`b`.
fn point_segment_distance(p: &Point3f, a: &Point3f, b: &Point3f) -> f32 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < f32::EPSILON {
        // Degenerate segment
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
