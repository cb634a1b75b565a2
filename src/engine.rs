//! Engine Module
//!
//! The caller-facing record store that coordinates all components.
//!
//! ## Responsibilities
//! - Own the record store and the primary index
//! - Rebuild the index from disk on open
//! - Keep index and data file consistent across add/delete
//! - Surface index/store drift instead of patching it

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{Result, SlotError};
use crate::index::{IndexEntry, PrimaryIndex, RebuildStats};
use crate::record::{Record, RecordStatus};
use crate::store::RecordStore;

/// One slot as reported by the diagnostic listing
#[derive(Debug, Clone, PartialEq)]
pub struct SlotEntry {
    /// Byte offset of the slot
    pub offset: u64,

    /// Decoded record
    pub record: Record,

    /// Active or tombstoned
    pub status: RecordStatus,
}

/// The main storage engine
///
/// ## Consistency Model
///
/// - The data file is the source of truth; the index is a cache over it
/// - Mutations take `&mut self`: one logical writer, no locking
/// - Writes go to disk first, then to the index. A failed disk write
///   leaves the index untouched
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Fixed-slot data file
    store: RecordStore,

    /// id → offset for active records
    index: PrimaryIndex,
}

impl Engine {
    /// Open or create an engine with the given config
    ///
    /// On startup:
    /// 1. Create the data directory if needed
    /// 2. Point the record store at the data file (created on first add)
    /// 3. Rebuild the index by scanning every slot
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let store = RecordStore::new(config.data_file(), config.sync_strategy);

        let mut engine = Self {
            config,
            store,
            index: PrimaryIndex::new(),
        };
        engine.rebuild()?;

        Ok(engine)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Rebuild the index from scratch by scanning the data file
    ///
    /// The new index replaces the current one only if the scan succeeds.
    pub fn rebuild(&mut self) -> Result<RebuildStats> {
        let (index, stats) = PrimaryIndex::build(&self.store)?;
        self.index = index;

        tracing::info!(
            path = %self.store.path().display(),
            slots = stats.slots_scanned,
            active = stats.active,
            tombstoned = stats.tombstoned,
            "index rebuilt"
        );
        Ok(stats)
    }

    /// Add a new record, returning the offset it was written at
    ///
    /// Steps:
    /// 1. Reject a duplicate id (no I/O)
    /// 2. Validate and append the record
    /// 3. Insert id → offset into the index
    pub fn add(&mut self, id: i32, name: &str, cgpa: f32) -> Result<u64> {
        if self.index.contains(id) {
            return Err(SlotError::DuplicateKey(id));
        }

        let record = Record::new(id, name, cgpa)?;
        let offset = self.store.append(&record)?;
        self.index.insert(id, offset);

        tracing::debug!(id, offset, "record added");
        Ok(offset)
    }

    /// Look up an active record by id
    pub fn search(&self, id: i32) -> Result<Record> {
        let offset = self.index.get(id).ok_or(SlotError::NotFound(id))?;
        self.read_indexed(id, offset)
    }

    /// Tombstone the record with `id`
    ///
    /// Steps:
    /// 1. Resolve the offset through the index
    /// 2. Read the record and set its deleted flag
    /// 3. Overwrite the slot in place
    /// 4. Remove the id from the index
    pub fn delete(&mut self, id: i32) -> Result<()> {
        let offset = self.index.get(id).ok_or(SlotError::NotFound(id))?;
        let record = self.read_indexed(id, offset)?;

        self.store.overwrite_at(offset, &record.tombstoned())?;
        self.index.remove(id);

        tracing::debug!(id, offset, "record deleted");
        Ok(())
    }

    /// Index entries in ascending id order
    pub fn list_index(&self) -> Vec<IndexEntry> {
        self.index.entries()
    }

    /// Lazily list every slot in the data file, tombstones included
    pub fn list_all_records(&self) -> Result<impl Iterator<Item = Result<SlotEntry>>> {
        let slots = self.store.scan_all()?;
        Ok(slots.map(|slot| {
            slot.map(|(offset, record)| SlotEntry {
                offset,
                status: record.status(),
                record,
            })
        }))
    }

    // =========================================================================
    // Accessors (for callers, testing and debugging)
    // =========================================================================

    /// Number of active records
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether `id` has an active record
    pub fn contains(&self, id: i32) -> bool {
        self.index.contains(id)
    }

    /// Slot offset of the active record with `id`
    pub fn offset_of(&self, id: i32) -> Option<u64> {
        self.index.get(id)
    }

    /// Number of slots in the data file, tombstones included
    pub fn slot_count(&self) -> Result<u64> {
        self.store.slot_count()
    }

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        self.store.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Read the slot the index maps `id` to, checking it still belongs to `id`
    fn read_indexed(&self, id: i32, offset: u64) -> Result<Record> {
        let record = match self.store.read_at(offset) {
            Ok(record) => record,
            Err(SlotError::CorruptRecord { reason, .. }) => {
                return Err(self.drift(id, offset, format!("slot is corrupt: {}", reason)));
            }
            Err(e) => return Err(e),
        };

        if record.deleted {
            return Err(self.drift(id, offset, "slot is tombstoned".to_string()));
        }
        if record.id != id {
            return Err(self.drift(id, offset, format!("slot holds id {}", record.id)));
        }

        Ok(record)
    }

    fn drift(&self, id: i32, offset: u64, detail: String) -> SlotError {
        tracing::warn!(id, offset, %detail, "index points at an invalid slot");
        SlotError::InconsistentState(format!(
            "index maps id {} to offset {} but {}",
            id, offset, detail
        ))
    }
}
