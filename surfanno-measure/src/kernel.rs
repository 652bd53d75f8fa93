//! Scalar-field kernel seam
//!
//! All geometry computation is delegated through [`ScalarFieldKernel`]; this
//! crate never implements a mesh algorithm itself. A kernel is asked for one
//! per-vertex scalar field at a time and may fail per algorithm.

use surfanno_core::{Error, Result, Surface};

use crate::{Measurement, MeasurementTable};

/// Column holding each row's own vertex index, always present in built tables.
pub const VERTEX_INDEX_COLUMN: &str = "vertex_index";

/// An opaque per-vertex scalar field provider.
///
/// Implementations wrap an external geometry library. The returned vector
/// must contain exactly one value per surface vertex; the caller validates
/// the length before accepting it.
pub trait ScalarFieldKernel {
    /// Compute the named scalar field for every vertex of `surface`
    fn compute(&self, surface: &Surface, measurement: &Measurement) -> Result<Vec<f64>>;
}

/// Adapter turning a closure into a kernel.
pub struct FnKernel<F>(pub F);

impl<F> ScalarFieldKernel for FnKernel<F>
where
    F: Fn(&Surface, &Measurement) -> Result<Vec<f64>>,
{
    fn compute(&self, surface: &Surface, measurement: &Measurement) -> Result<Vec<f64>> {
        (self.0)(surface, measurement)
    }
}

/// Build a measurement table for a surface.
///
/// Produces one column per requested measurement plus the
/// [`VERTEX_INDEX_COLUMN`], so a table over `n` measurements has `n + 1`
/// columns. A kernel result of the wrong length is reported as
/// [`Error::MeasurementFailed`] for that algorithm.
pub fn measurement_table(
    surface: &Surface,
    kernel: &dyn ScalarFieldKernel,
    measurements: &[Measurement],
) -> Result<MeasurementTable> {
    let vertex_count = surface.vertex_count();
    let mut table = MeasurementTable::new(vertex_count);
    table.add_column(
        VERTEX_INDEX_COLUMN,
        (0..vertex_count).map(|i| i as f64).collect(),
    )?;

    for measurement in measurements {
        let values = kernel.compute(surface, measurement)?;
        if values.len() != vertex_count {
            return Err(Error::MeasurementFailed {
                algorithm: measurement.algorithm_name().to_string(),
                reason: format!(
                    "kernel returned {} values for {} vertices",
                    values.len(),
                    vertex_count
                ),
            });
        }
        table.add_column(measurement.algorithm_name(), values)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quality;
    use surfanno_core::unit_square;

    fn constant_kernel(value: f64) -> impl ScalarFieldKernel {
        FnKernel(move |surface: &Surface, _: &Measurement| {
            Ok(vec![value; surface.vertex_count()])
        })
    }

    #[test]
    fn test_table_has_one_column_per_measurement_plus_index() {
        let surface = unit_square();
        let measurements: Vec<Measurement> = vec![
            Quality::MinAngle.into(),
            Quality::MaxAngle.into(),
            Quality::Area.into(),
        ];
        let table = measurement_table(&surface, &constant_kernel(1.0), &measurements).unwrap();
        assert_eq!(table.len(), 4);
        assert!(table.contains(VERTEX_INDEX_COLUMN));
        assert!(table.contains("min_angle"));
        assert_eq!(table.column(VERTEX_INDEX_COLUMN), Some(&[0.0, 1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn test_kernel_failure_propagates() {
        let surface = unit_square();
        let failing = FnKernel(|_: &Surface, m: &Measurement| -> Result<Vec<f64>> {
            Err(Error::MeasurementFailed {
                algorithm: m.algorithm_name().to_string(),
                reason: "backend unavailable".to_string(),
            })
        });
        let err =
            measurement_table(&surface, &failing, &[Quality::Skew.into()]).unwrap_err();
        assert!(matches!(err, Error::MeasurementFailed { algorithm, .. } if algorithm == "skew"));
    }

    #[test]
    fn test_wrong_length_result_is_a_measurement_failure() {
        let surface = unit_square();
        let short = FnKernel(|_: &Surface, _: &Measurement| Ok(vec![1.0]));
        let err = measurement_table(&surface, &short, &[Quality::Area.into()]).unwrap_err();
        assert!(matches!(err, Error::MeasurementFailed { .. }));
    }
}
