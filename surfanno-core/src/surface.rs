//! Surface data structures and functionality

use crate::Point3f;
use serde::{Deserialize, Serialize};

/// A triangle surface with vertices and faces.
///
/// The host viewer owns surfaces conceptually; annotation components borrow
/// them and validate against `vertex_count()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
}

impl Surface {
    /// Create a new empty surface
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a surface from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the surface is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Add a vertex to the surface
    pub fn add_vertex(&mut self, vertex: Point3f) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a face to the surface
    pub fn add_face(&mut self, face: [usize; 3]) {
        self.faces.push(face);
    }

    /// Scale all vertex positions by a uniform factor
    pub fn scale(&mut self, factor: f32) {
        for v in &mut self.vertices {
            v.coords *= factor;
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

/// A unit square in the z = 0 plane, two triangles over four vertices.
///
/// Vertex order: (0,0), (1,0), (1,1), (0,1).
pub fn unit_square() -> Surface {
    Surface::from_vertices_and_faces(
        vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(1.0, 1.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
}

/// A UV-sphere style example surface, useful as demo data.
///
/// `rings` and `segments` control resolution; `radius` the size. Poles are
/// shared vertices, so the vertex count is `rings * segments + 2`.
pub fn uv_sphere(rings: usize, segments: usize, radius: f32) -> Surface {
    let mut surface = Surface::new();
    let north = surface.add_vertex(Point3f::new(0.0, 0.0, radius));

    for r in 1..=rings {
        let polar = std::f32::consts::PI * r as f32 / (rings + 1) as f32;
        for s in 0..segments {
            let azimuth = 2.0 * std::f32::consts::PI * s as f32 / segments as f32;
            surface.add_vertex(Point3f::new(
                radius * polar.sin() * azimuth.cos(),
                radius * polar.sin() * azimuth.sin(),
                radius * polar.cos(),
            ));
        }
    }
    let south = surface.add_vertex(Point3f::new(0.0, 0.0, -radius));

    let ring_start = |r: usize| 1 + (r - 1) * segments;
    for s in 0..segments {
        let next = (s + 1) % segments;
        surface.add_face([north, ring_start(1) + s, ring_start(1) + next]);
        surface.add_face([south, ring_start(rings) + next, ring_start(rings) + s]);
    }
    for r in 1..rings {
        for s in 0..segments {
            let next = (s + 1) % segments;
            let a = ring_start(r) + s;
            let b = ring_start(r) + next;
            let c = ring_start(r + 1) + s;
            let d = ring_start(r + 1) + next;
            surface.add_face([a, c, d]);
            surface.add_face([a, d, b]);
        }
    }
    surface
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_surface() {
        let surface = Surface::new();
        assert!(surface.is_empty());
        assert_eq!(surface.vertex_count(), 0);
        assert_eq!(surface.face_count(), 0);
    }

    #[test]
    fn test_unit_square() {
        let surface = unit_square();
        assert_eq!(surface.vertex_count(), 4);
        assert_eq!(surface.face_count(), 2);
        assert!(!surface.is_empty());
    }

    #[test]
    fn test_add_vertex_returns_index() {
        let mut surface = Surface::new();
        assert_eq!(surface.add_vertex(Point3f::new(0.0, 0.0, 0.0)), 0);
        assert_eq!(surface.add_vertex(Point3f::new(1.0, 0.0, 0.0)), 1);
    }

    #[test]
    fn test_uv_sphere_counts() {
        let surface = uv_sphere(3, 8, 1.0);
        assert_eq!(surface.vertex_count(), 3 * 8 + 2);
        assert!(surface.face_count() > 0);
    }

    #[test]
    fn test_uv_sphere_vertices_on_sphere() {
        use approx::assert_relative_eq;
        let radius = 2.5;
        let surface = uv_sphere(4, 6, radius);
        for v in &surface.vertices {
            assert_relative_eq!(v.coords.norm(), radius, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_scale() {
        let mut surface = unit_square();
        surface.scale(2.0);
        assert_eq!(surface.vertices[2], Point3f::new(2.0, 2.0, 0.0));
    }
}
