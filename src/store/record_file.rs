//! Record Store
//!
//! Offset-addressed reads and writes of fixed-size records in one data file.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::SyncStrategy;
use crate::error::{Result, SlotError};
use crate::record::{decode_record, encode_record, Record, RECORD_SIZE, RECORD_SIZE_U64};

use super::SlotIterator;

/// Owns the on-disk data file of fixed-size record slots
///
/// Holds only the path; each method opens the file, does its work, and
/// lets the handle drop before returning.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Path of the data file
    path: PathBuf,
    /// Whether writes are followed by fsync
    sync_strategy: SyncStrategy,
}

impl RecordStore {
    /// Create a store over `path`; the file is created lazily by the first append
    pub fn new(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Self {
        Self {
            path: path.into(),
            sync_strategy,
        }
    }

    /// Append a record at end-of-file
    ///
    /// Returns the offset the record was written at (the file length before
    /// the write).
    pub fn append(&self, record: &Record) -> Result<u64> {
        // Encode first so a bad record never touches the file
        let bytes = encode_record(record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let offset = file.metadata()?.len();
        if offset % RECORD_SIZE_U64 != 0 {
            return Err(SlotError::CorruptRecord {
                offset: offset - offset % RECORD_SIZE_U64,
                reason: format!(
                    "data file length {} is not a multiple of the slot size {}",
                    offset, RECORD_SIZE
                ),
            });
        }

        file.write_all(&bytes)?;
        self.sync_if_needed(&file)?;

        tracing::trace!(offset, id = record.id, "appended record");
        Ok(offset)
    }

    /// Read the record stored at `offset`
    pub fn read_at(&self, offset: u64) -> Result<Record> {
        let mut file = File::open(&self.path)?;
        Self::check_slot(&file, offset)?;

        file.seek(SeekFrom::Start(offset))?;
        let mut slot = [0u8; RECORD_SIZE];
        file.read_exact(&mut slot)?;

        decode_record(&slot, offset)
    }

    /// Rewrite the full record at `offset` in place
    ///
    /// Only used to flip the deleted flag; the slot must already exist.
    pub fn overwrite_at(&self, offset: u64, record: &Record) -> Result<()> {
        let bytes = encode_record(record)?;

        let mut file = OpenOptions::new().read(true).write(true).open(&self.path)?;
        Self::check_slot(&file, offset)?;

        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&bytes)?;
        self.sync_if_needed(&file)?;

        tracing::trace!(offset, id = record.id, deleted = record.deleted, "overwrote record");
        Ok(())
    }

    /// Lazily scan every slot from offset 0 to end-of-file
    ///
    /// Each call reopens the file. A missing file scans as empty.
    pub fn scan_all(&self) -> Result<SlotIterator> {
        match File::open(&self.path) {
            Ok(file) => SlotIterator::new(file),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SlotIterator::empty()),
            Err(e) => Err(SlotError::Io(e)),
        }
    }

    /// Number of complete slots in the data file
    pub fn slot_count(&self) -> Result<u64> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() / RECORD_SIZE_U64),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(SlotError::Io(e)),
        }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Reject offsets that are not the start of a complete slot
    fn check_slot(file: &File, offset: u64) -> Result<()> {
        let file_len = file.metadata()?.len();
        let in_range = offset
            .checked_add(RECORD_SIZE_U64)
            .is_some_and(|end| end <= file_len);

        if offset % RECORD_SIZE_U64 != 0 || !in_range {
            return Err(SlotError::InvalidOffset { offset, file_len });
        }
        Ok(())
    }

    fn sync_if_needed(&self, file: &File) -> Result<()> {
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_data()?;
        }
        Ok(())
    }
}
