//! Label index: string labels to dense node ids and back

use super::types::NodeId;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Bidirectional label <-> id mapping.
///
/// Ids are handed out in first-seen order and are exactly the positions in an
/// append-only set, so they always form the range `0..len()`.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    labels: IndexSet<String, FxBuildHasher>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LabelIndex {
            labels: IndexSet::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Id of `label`, or `None` if it was never seen
    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.labels.get_index_of(label)
    }

    /// Label for `id`. Ids come from this index, so a miss is a caller bug.
    pub fn label_of(&self, id: NodeId) -> &str {
        &self.labels[id]
    }

    /// Existing id for `label`, or the next free one.
    pub fn ensure(&mut self, label: &str) -> NodeId {
        if let Some(id) = self.labels.get_index_of(label) {
            return id;
        }
        self.labels.insert_full(label.to_string()).0
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in id order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
