//! Per-vertex integer label storage
//!
//! A [`VertexLabelField`] holds one `u32` label per mesh vertex, default 0
//! (unlabeled). Its length always equals the vertex count of the surface it
//! was bound to; replacing the surface invalidates the field (see
//! [`VertexLabelField::resize`]).

use std::collections::BTreeSet;

use crate::{Error, Result};

/// How painting treats vertex indices outside the bound range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Reject the whole paint call if any index is out of range.
    #[default]
    Strict,
    /// Silently drop out-of-range indices and paint the rest.
    Clip,
}

/// A per-vertex label array bound to one surface's vertex ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLabelField {
    labels: Vec<u32>,
    mode: PaintMode,
}

impl VertexLabelField {
    /// Create a field of `vertex_count` unlabeled vertices, strict paint mode
    pub fn new(vertex_count: usize) -> Self {
        Self::with_mode(vertex_count, PaintMode::Strict)
    }

    /// Create a field with an explicit out-of-range policy
    pub fn with_mode(vertex_count: usize, mode: PaintMode) -> Self {
        Self {
            labels: vec![0; vertex_count],
            mode,
        }
    }

    /// Create a field from an existing label array, keeping the given policy.
    ///
    /// Used when restoring a session from a saved annotation column.
    pub fn from_labels(labels: Vec<u32>, mode: PaintMode) -> Self {
        Self { labels, mode }
    }

    /// Number of vertices this field is bound to
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the field covers zero vertices
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The out-of-range policy in effect
    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    /// Set labels for the given vertex indices.
    ///
    /// In strict mode the call fails with [`Error::IndexOutOfRange`] before
    /// any label changes if an index is out of range; in clip mode
    /// out-of-range indices are dropped. An empty index set leaves the field
    /// unchanged.
    pub fn paint(&mut self, indices: &BTreeSet<usize>, value: u32) -> Result<()> {
        if self.mode == PaintMode::Strict {
            // BTreeSet iterates in order, so the last element is the max.
            if let Some(&max) = indices.iter().next_back() {
                if max >= self.labels.len() {
                    return Err(Error::IndexOutOfRange {
                        index: max,
                        vertex_count: self.labels.len(),
                    });
                }
            }
        }
        for &i in indices {
            if let Some(label) = self.labels.get_mut(i) {
                *label = value;
            }
        }
        Ok(())
    }

    /// Reset the given vertices to unlabeled (label 0)
    pub fn erase(&mut self, indices: &BTreeSet<usize>) -> Result<()> {
        self.paint(indices, 0)
    }

    /// Reset every vertex to unlabeled
    pub fn clear(&mut self) {
        self.labels.fill(0);
    }

    /// Read-only view of the full label array.
    ///
    /// Indexed by vertex index; callers must not assume the slice stays valid
    /// across mutations.
    pub fn get(&self) -> &[u32] {
        &self.labels
    }

    /// Reallocate for a new vertex count.
    ///
    /// Labels at indices present in both the old and new range are preserved;
    /// indices beyond the old range start unlabeled. Used when the bound
    /// surface is replaced by one with different topology.
    pub fn resize(&mut self, new_count: usize) {
        self.labels.resize(new_count, 0);
    }

    /// Indices of all vertices with a nonzero label, in ascending order
    pub fn labeled_vertices(&self) -> BTreeSet<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &label)| label != 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of vertices carrying the given label
    pub fn count_of(&self, label: u32) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }
}
