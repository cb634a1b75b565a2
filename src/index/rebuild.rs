//! Index rebuild
//!
//! Reconstructs the primary index from a full scan of the record store.

use crate::error::Result;
use crate::store::RecordStore;

use super::PrimaryIndex;

/// Outcome of a rebuild scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RebuildStats {
    /// Slots read from the data file
    pub slots_scanned: u64,

    /// Active records indexed
    pub active: u64,

    /// Tombstoned slots skipped
    pub tombstoned: u64,

    /// Active slots whose id was already indexed by an earlier slot
    pub duplicates: u64,
}

impl PrimaryIndex {
    /// Build a fresh index by scanning every slot in `store`
    ///
    /// Tombstoned slots are skipped. If two active slots share an id the
    /// later one wins. The first scan error aborts the build.
    pub fn build(store: &RecordStore) -> Result<(Self, RebuildStats)> {
        let mut index = PrimaryIndex::new();
        let mut stats = RebuildStats::default();

        for slot in store.scan_all()? {
            let (offset, record) = slot?;
            stats.slots_scanned += 1;

            if record.deleted {
                stats.tombstoned += 1;
                continue;
            }

            if let Some(previous) = index.insert(record.id, offset) {
                stats.duplicates += 1;
                tracing::warn!(
                    id = record.id,
                    previous,
                    offset,
                    "multiple active slots for one id; keeping the later slot"
                );
            } else {
                stats.active += 1;
            }
        }

        Ok((index, stats))
    }
}
