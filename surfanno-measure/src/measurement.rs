//! Measurement descriptors
//!
//! Names the per-vertex scalar fields a geometry kernel can compute. The
//! descriptors are pure identifiers; the computation itself lives behind
//! [`crate::ScalarFieldKernel`].

use serde::{Deserialize, Serialize};

/// Per-vertex mesh quality measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Area,
    AspectRatio,
    Condition,
    EdgeRatio,
    Jacobian,
    MaxAngle,
    MinAngle,
    RadiusRatio,
    ScaledJacobian,
    Shape,
    Shear,
    Skew,
    Stretch,
}

impl Quality {
    /// Stable lowercase identifier, used as column name and kernel key
    pub fn name(&self) -> &'static str {
        match self {
            Quality::Area => "area",
            Quality::AspectRatio => "aspect_ratio",
            Quality::Condition => "condition",
            Quality::EdgeRatio => "edge_ratio",
            Quality::Jacobian => "jacobian",
            Quality::MaxAngle => "max_angle",
            Quality::MinAngle => "min_angle",
            Quality::RadiusRatio => "radius_ratio",
            Quality::ScaledJacobian => "scaled_jacobian",
            Quality::Shape => "shape",
            Quality::Shear => "shear",
            Quality::Skew => "skew",
            Quality::Stretch => "stretch",
        }
    }
}

/// Per-vertex surface curvature measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Curvature {
    Gauss,
    Mean,
    Maximum,
    Minimum,
    /// Curvature estimated by fitting spheres of the given radius around
    /// each vertex.
    SphereFitted { radius: f64 },
}

impl Curvature {
    /// Stable lowercase identifier, used as column name and kernel key
    pub fn name(&self) -> &'static str {
        match self {
            Curvature::Gauss => "gauss_curvature",
            Curvature::Mean => "mean_curvature",
            Curvature::Maximum => "maximum_curvature",
            Curvature::Minimum => "minimum_curvature",
            Curvature::SphereFitted { .. } => "sphere_fitted_curvature",
        }
    }
}

/// One scalar field a kernel can be asked to compute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    Quality(Quality),
    Curvature(Curvature),
}

impl Measurement {
    /// The algorithm identifier, also the table column name for this field
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Measurement::Quality(q) => q.name(),
            Measurement::Curvature(c) => c.name(),
        }
    }
}

impl From<Quality> for Measurement {
    fn from(q: Quality) -> Self {
        Measurement::Quality(q)
    }
}

impl From<Curvature> for Measurement {
    fn from(c: Curvature) -> Self {
        Measurement::Curvature(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names_are_distinct() {
        let measurements: Vec<Measurement> = vec![
            Quality::Skew.into(),
            Quality::MinAngle.into(),
            Quality::MaxAngle.into(),
            Quality::Area.into(),
            Curvature::Gauss.into(),
            Curvature::Mean.into(),
            Curvature::SphereFitted { radius: 1.0 }.into(),
        ];
        let names: std::collections::HashSet<_> =
            measurements.iter().map(|m| m.algorithm_name()).collect();
        assert_eq!(names.len(), measurements.len());
    }

    #[test]
    fn test_sphere_fitted_name_ignores_radius() {
        let a = Curvature::SphereFitted { radius: 1.0 };
        let b = Curvature::SphereFitted { radius: 2.0 };
        assert_eq!(a.name(), b.name());
    }
}
