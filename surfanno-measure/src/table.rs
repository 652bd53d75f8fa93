//! Measurement tables
//!
//! A [`MeasurementTable`] is an ordered set of uniquely named per-vertex
//! columns, all with length equal to the bound surface's vertex count. One
//! column by convention, [`ANNOTATION_COLUMN`], mirrors the vertex label
//! field and is the only path by which painted labels reach exported output.

use serde::{Deserialize, Serialize};
use surfanno_core::{Error, Result, VertexLabelField};

/// Name of the column mirroring the vertex label field.
pub const ANNOTATION_COLUMN: &str = "annotation";

/// One named per-vertex column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// An ordered mapping from column names to per-vertex values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementTable {
    vertex_count: usize,
    columns: Vec<Column>,
}

impl MeasurementTable {
    /// Create an empty table bound to a surface with `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            columns: Vec::new(),
        }
    }

    /// The vertex count every column must match
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check if a column with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Column names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Get a column's values by name
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Iterate over columns in table order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Add a new column.
    ///
    /// Fails with [`Error::LengthMismatch`] if the values do not cover every
    /// vertex, or [`Error::DuplicateColumn`] if the name is taken.
    pub fn add_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if values.len() != self.vertex_count {
            return Err(Error::LengthMismatch {
                expected: self.vertex_count,
                actual: values.len(),
            });
        }
        if self.contains(&name) {
            return Err(Error::DuplicateColumn { name });
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Remove a column by name, returning its values.
    ///
    /// Fails with [`Error::ColumnNotFound`] if absent.
    pub fn remove_column(&mut self, name: &str) -> Result<Vec<f64>> {
        match self.columns.iter().position(|c| c.name == name) {
            Some(pos) => Ok(self.columns.remove(pos).values),
            None => Err(Error::ColumnNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Rename a column, keeping its position and values.
    pub fn rename_column(&mut self, old_name: &str, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        if old_name != new_name && self.contains(&new_name) {
            return Err(Error::DuplicateColumn { name: new_name });
        }
        match self.columns.iter_mut().find(|c| c.name == old_name) {
            Some(column) => {
                column.name = new_name;
                Ok(())
            }
            None => Err(Error::ColumnNotFound {
                name: old_name.to_string(),
            }),
        }
    }

    /// Overwrite (or create) the annotation column from a label field.
    ///
    /// This is a full overwrite, so repeating the call after a failure is
    /// always safe. Fails with [`Error::LengthMismatch`] if the field is
    /// bound to a different vertex count.
    pub fn sync_annotation_column(&mut self, field: &VertexLabelField) -> Result<()> {
        if field.len() != self.vertex_count {
            return Err(Error::LengthMismatch {
                expected: self.vertex_count,
                actual: field.len(),
            });
        }
        let values: Vec<f64> = field.get().iter().map(|&l| f64::from(l)).collect();
        match self.columns.iter_mut().find(|c| c.name == ANNOTATION_COLUMN) {
            Some(column) => column.values = values,
            None => self.columns.push(Column {
                name: ANNOTATION_COLUMN.to_string(),
                values,
            }),
        }
        Ok(())
    }

    /// Read the annotation column back into a label field.
    ///
    /// Inverse of [`Self::sync_annotation_column`], used when resuming a
    /// session from a saved table. Fails with [`Error::ColumnNotFound`] if no
    /// annotation column exists, or [`Error::LengthMismatch`] if its length
    /// disagrees with the field's bound vertex count.
    pub fn load_annotation_column(&self, field: &mut VertexLabelField) -> Result<()> {
        let values = self
            .column(ANNOTATION_COLUMN)
            .ok_or_else(|| Error::ColumnNotFound {
                name: ANNOTATION_COLUMN.to_string(),
            })?;
        if values.len() != field.len() {
            return Err(Error::LengthMismatch {
                expected: field.len(),
                actual: values.len(),
            });
        }
        let labels: Vec<u32> = values.iter().map(|&v| v as u32).collect();
        *field = VertexLabelField::from_labels(labels, field.mode());
        Ok(())
    }

    /// One table row (one value per column, in table order).
    ///
    /// Row index equals vertex index; fails with [`Error::IndexOutOfRange`]
    /// past the bound vertex count.
    pub fn row(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.vertex_count {
            return Err(Error::IndexOutOfRange {
                index,
                vertex_count: self.vertex_count,
            });
        }
        Ok(self.columns.iter().map(|c| c.values[index]).collect())
    }

    /// Render the table as CSV text, header row first.
    ///
    /// This is the named-columns-of-numbers handoff shape the host's export
    /// mechanism consumes; writing it anywhere is the host's job.
    pub fn to_csv_string(&self) -> String {
        let mut out = String::new();
        let names: Vec<&str> = self.names().collect();
        out.push_str(&names.join(","));
        out.push('\n');
        for row in 0..self.vertex_count {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|c| c.values[row].to_string())
                .collect();
            out.push_str(&cells.join(","));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn painted_field(vertex_count: usize, indices: &[usize], value: u32) -> VertexLabelField {
        let mut field = VertexLabelField::new(vertex_count);
        let set: BTreeSet<usize> = indices.iter().copied().collect();
        field.paint(&set, value).unwrap();
        field
    }

    #[test]
    fn test_add_column_length_mismatch() {
        let mut table = MeasurementTable::new(4);
        let err = table.add_column("annotation", vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_add_duplicate_column() {
        let mut table = MeasurementTable::new(2);
        table.add_column("skew", vec![0.1, 0.2]).unwrap();
        let err = table.add_column("skew", vec![0.3, 0.4]).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateColumn {
                name: "skew".to_string()
            }
        );
    }

    #[test]
    fn test_remove_missing_column() {
        let mut table = MeasurementTable::new(2);
        let err = table.remove_column("skew").unwrap_err();
        assert_eq!(
            err,
            Error::ColumnNotFound {
                name: "skew".to_string()
            }
        );
    }

    #[test]
    fn test_columns_keep_equal_length_under_mutation() {
        let mut table = MeasurementTable::new(3);
        table.add_column("a", vec![1.0, 2.0, 3.0]).unwrap();
        table.add_column("b", vec![4.0, 5.0, 6.0]).unwrap();
        table.remove_column("a").unwrap();
        table.add_column("c", vec![7.0, 8.0, 9.0]).unwrap();
        assert!(table.add_column("d", vec![1.0]).is_err());
        for column in table.columns() {
            assert_eq!(column.values.len(), table.vertex_count());
        }
    }

    #[test]
    fn test_sync_creates_and_overwrites_annotation() {
        let mut table = MeasurementTable::new(4);
        let field = painted_field(4, &[0], 5);
        table.sync_annotation_column(&field).unwrap();
        assert_eq!(table.column(ANNOTATION_COLUMN), Some(&[5.0, 0.0, 0.0, 0.0][..]));

        let field = painted_field(4, &[2], 3);
        table.sync_annotation_column(&field).unwrap();
        assert_eq!(table.column(ANNOTATION_COLUMN), Some(&[0.0, 0.0, 3.0, 0.0][..]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut table = MeasurementTable::new(3);
        let field = painted_field(3, &[1], 8);
        table.sync_annotation_column(&field).unwrap();
        let once = table.clone();
        table.sync_annotation_column(&field).unwrap();
        assert_eq!(table, once);
    }

    #[test]
    fn test_sync_length_mismatch() {
        let mut table = MeasurementTable::new(3);
        let field = VertexLabelField::new(4);
        assert!(matches!(
            table.sync_annotation_column(&field),
            Err(Error::LengthMismatch { expected: 3, actual: 4 })
        ));
    }

    #[test]
    fn test_round_trip_sync_then_load() {
        let mut table = MeasurementTable::new(5);
        let field = painted_field(5, &[0, 3], 42);
        table.sync_annotation_column(&field).unwrap();

        let mut restored = VertexLabelField::new(5);
        table.load_annotation_column(&mut restored).unwrap();
        assert_eq!(restored.get(), field.get());
    }

    #[test]
    fn test_load_without_annotation_column() {
        let mut table = MeasurementTable::new(4);
        table.add_column("skew", vec![0.0; 4]).unwrap();
        let mut field = VertexLabelField::new(4);
        assert_eq!(
            table.load_annotation_column(&mut field).unwrap_err(),
            Error::ColumnNotFound {
                name: ANNOTATION_COLUMN.to_string()
            }
        );
    }

    #[test]
    fn test_remove_then_load_fails() {
        let mut table = MeasurementTable::new(2);
        let field = painted_field(2, &[1], 1);
        table.sync_annotation_column(&field).unwrap();
        table.remove_column(ANNOTATION_COLUMN).unwrap();

        let mut restored = VertexLabelField::new(2);
        assert!(matches!(
            table.load_annotation_column(&mut restored),
            Err(Error::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_load_length_mismatch() {
        let mut table = MeasurementTable::new(3);
        let field = painted_field(3, &[0], 1);
        table.sync_annotation_column(&field).unwrap();
        let mut other = VertexLabelField::new(4);
        assert!(matches!(
            table.load_annotation_column(&mut other),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_rename_column() {
        let mut table = MeasurementTable::new(1);
        table.add_column("a", vec![1.0]).unwrap();
        table.add_column("b", vec![2.0]).unwrap();
        assert!(matches!(
            table.rename_column("a", "b"),
            Err(Error::DuplicateColumn { .. })
        ));
        table.rename_column("a", "area").unwrap();
        assert!(table.contains("area"));
        assert!(!table.contains("a"));
    }

    #[test]
    fn test_row_access() {
        let mut table = MeasurementTable::new(2);
        table.add_column("a", vec![1.0, 2.0]).unwrap();
        table.add_column("b", vec![3.0, 4.0]).unwrap();
        assert_eq!(table.row(1).unwrap(), vec![2.0, 4.0]);
        assert!(matches!(table.row(2), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_csv_export_shape() {
        let mut table = MeasurementTable::new(2);
        table.add_column("vertex_index", vec![0.0, 1.0]).unwrap();
        table.add_column("skew", vec![0.5, 0.25]).unwrap();
        let csv = table.to_csv_string();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "vertex_index,skew");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0,0.5");
    }
}
