//! Annotation session
//!
//! [`AnnotationSession`] is the bridge between the spatial view (painted
//! vertex labels) and the tabular view (the measurement table). It owns the
//! label field and table for exactly one surface at a time and runs every
//! mutation synchronously on its caller's thread.
//!
//! Paint orchestration order is fixed: brush resolution, then label paint,
//! then annotation-column sync. A failing sync leaves the labels applied and
//! the table stale; because sync is a full overwrite, calling
//! [`AnnotationSession::sync_table`] again is a complete recovery.

use std::collections::BTreeSet;

use surfanno_core::{Error, PaintMode, Result, Stroke, Surface, VertexLabelField};
use surfanno_measure::{
    measurement_table, Measurement, MeasurementTable, ScalarFieldKernel, ANNOTATION_COLUMN,
};

use crate::brush;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No surface selected; no label field allocated.
    Unbound,
    /// Label field allocated; no annotation column in any table.
    Bound,
    /// A measurement table exists and carries the annotation column.
    Measured,
}

/// Annotation state for one selected surface.
#[derive(Debug, Default)]
pub struct AnnotationSession {
    field: Option<VertexLabelField>,
    table: Option<MeasurementTable>,
    paint_mode: PaintMode,
}

impl AnnotationSession {
    /// New unbound session, strict paint mode
    pub fn new() -> Self {
        Self::default()
    }

    /// New unbound session with an explicit out-of-range paint policy
    pub fn with_paint_mode(paint_mode: PaintMode) -> Self {
        Self {
            paint_mode,
            ..Self::default()
        }
    }

    /// Current lifecycle state, derived from what is allocated
    pub fn state(&self) -> SessionState {
        match (&self.field, &self.table) {
            (None, _) => SessionState::Unbound,
            (Some(_), Some(table)) if table.contains(ANNOTATION_COLUMN) => SessionState::Measured,
            (Some(_), _) => SessionState::Bound,
        }
    }

    /// Select a surface for annotation.
    ///
    /// Allocates a fresh, fully unlabeled field sized to the surface. Any
    /// previous field or table is discarded.
    pub fn bind(&mut self, surface: &Surface) {
        self.field = Some(VertexLabelField::with_mode(
            surface.vertex_count(),
            self.paint_mode,
        ));
        self.table = None;
    }

    /// Deselect the current surface, dropping field and table
    pub fn deselect(&mut self) {
        self.field = None;
        self.table = None;
    }

    /// Swap in a surface with different topology.
    ///
    /// The label field is reallocated via resize semantics: labels at vertex
    /// indices present in both surfaces survive, new vertices start
    /// unlabeled. Measured columns are stale for the new topology, so the
    /// table is discarded.
    pub fn replace_surface(&mut self, surface: &Surface) -> Result<()> {
        let field = self.field.as_mut().ok_or(Error::NotBound)?;
        field.resize(surface.vertex_count());
        self.table = None;
        Ok(())
    }

    /// The label field for overlay rendering, if a surface is bound
    pub fn label_field(&self) -> Option<&VertexLabelField> {
        self.field.as_ref()
    }

    /// The measurement table, if one has been computed or adopted
    pub fn table(&self) -> Option<&MeasurementTable> {
        self.table.as_ref()
    }

    /// Handle a finalized paint stroke.
    ///
    /// Resolves the stroke, paints the affected vertices with `value`, then
    /// syncs the annotation column if a table is present. The first failing
    /// step's error is returned; completed steps stay applied. Returns the
    /// affected vertex set.
    pub fn on_paint(
        &mut self,
        surface: &Surface,
        stroke: &Stroke,
        value: u32,
    ) -> Result<BTreeSet<usize>> {
        let field = self.field.as_mut().ok_or(Error::NotBound)?;
        if surface.vertex_count() != field.len() {
            return Err(Error::LengthMismatch {
                expected: field.len(),
                actual: surface.vertex_count(),
            });
        }

        let affected = brush::resolve(surface, stroke);
        field.paint(&affected, value)?;
        if let Some(table) = &mut self.table {
            table.sync_annotation_column(field)?;
        }
        Ok(affected)
    }

    /// Handle an erase stroke (paint with the unlabeled value)
    pub fn on_erase(&mut self, surface: &Surface, stroke: &Stroke) -> Result<BTreeSet<usize>> {
        self.on_paint(surface, stroke, 0)
    }

    /// Handle a table row selection.
    ///
    /// Row index equals vertex index by the shared-length invariant; the
    /// returned index is what the host highlights.
    pub fn on_row_select(&self, row: usize) -> Result<usize> {
        let field = self.field.as_ref().ok_or(Error::NotBound)?;
        if row >= field.len() {
            return Err(Error::IndexOutOfRange {
                index: row,
                vertex_count: field.len(),
            });
        }
        Ok(row)
    }

    /// Compute measurements into a fresh table.
    ///
    /// Builds one column per measurement (plus the vertex-index column)
    /// through the kernel, then mirrors the current labels into the
    /// annotation column. Replaces any existing table.
    pub fn measure(
        &mut self,
        surface: &Surface,
        kernel: &dyn ScalarFieldKernel,
        measurements: &[Measurement],
    ) -> Result<()> {
        let field = self.field.as_ref().ok_or(Error::NotBound)?;
        if surface.vertex_count() != field.len() {
            return Err(Error::LengthMismatch {
                expected: field.len(),
                actual: surface.vertex_count(),
            });
        }
        let mut table = measurement_table(surface, kernel, measurements)?;
        table.sync_annotation_column(field)?;
        self.table = Some(table);
        Ok(())
    }

    /// Re-run the annotation-column sync.
    ///
    /// Recovery path after a failed sync in [`Self::on_paint`]; a successful
    /// call always leaves the table fully consistent with the labels.
    pub fn sync_table(&mut self) -> Result<()> {
        let field = self.field.as_ref().ok_or(Error::NotBound)?;
        match &mut self.table {
            Some(table) => table.sync_annotation_column(field),
            None => Ok(()),
        }
    }

    /// Attach an externally produced table without validation.
    ///
    /// A table bound to the wrong vertex count surfaces as
    /// [`Error::LengthMismatch`] on the next sync.
    pub fn adopt_table(&mut self, table: MeasurementTable) {
        self.table = Some(table);
    }

    /// Resume a previous session from a saved table.
    ///
    /// Loads the table's annotation column into the label field, then adopts
    /// the table. Fails with [`Error::NotBound`], [`Error::ColumnNotFound`]
    /// or [`Error::LengthMismatch`] without changing the session.
    pub fn resume_from_table(&mut self, table: MeasurementTable) -> Result<()> {
        let field = self.field.as_mut().ok_or(Error::NotBound)?;
        table.load_annotation_column(field)?;
        self.table = Some(table);
        Ok(())
    }

    /// Remove a table column by name.
    ///
    /// Removing the annotation column drops the session back from
    /// `Measured` to `Bound`; the labels themselves are untouched.
    pub fn remove_column(&mut self, name: &str) -> Result<()> {
        match &mut self.table {
            Some(table) => table.remove_column(name).map(|_| ()),
            None => Err(Error::ColumnNotFound {
                name: name.to_string(),
            }),
        }
    }
}
