//! Primary index implementation
//!
//! BTreeMap-based id → offset map.

use std::collections::BTreeMap;

use super::IndexEntry;

/// In-memory map from active record id to slot offset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryIndex {
    entries: BTreeMap<i32, u64>,
}

impl PrimaryIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the active record with `id`
    pub fn get(&self, id: i32) -> Option<u64> {
        self.entries.get(&id).copied()
    }

    /// Whether `id` has an active record
    pub fn contains(&self, id: i32) -> bool {
        self.entries.contains_key(&id)
    }

    /// Map `id` to `offset`, returning the previous offset if there was one
    pub fn insert(&mut self, id: i32, offset: u64) -> Option<u64> {
        self.entries.insert(id, offset)
    }

    /// Remove `id`, returning its offset
    pub fn remove(&mut self, id: i32) -> Option<u64> {
        self.entries.remove(&id)
    }

    /// Number of active records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        self.entries
            .iter()
            .map(|(&id, &offset)| IndexEntry { id, offset })
    }

    /// Snapshot of all entries in ascending id order
    pub fn entries(&self) -> Vec<IndexEntry> {
        self.iter().collect()
    }
}
