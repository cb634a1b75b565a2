//! Slot Iterator
//!
//! Sequential iteration over all slots in the data file.

use std::fs::File;
use std::io::{BufReader, Read};

use crate::error::{Result, SlotError};
use crate::record::{decode_record, Record, RECORD_SIZE, RECORD_SIZE_U64};

/// Iterator over `(offset, Record)` in file order
///
/// Owns its file handle; the handle is closed when the iterator is dropped.
/// Iteration stops after the first error. A partial slot at end-of-file
/// ends the scan with a warning instead of an error.
pub struct SlotIterator {
    /// None for a store whose file does not exist yet
    reader: Option<BufReader<File>>,
    /// File length captured when the scan started
    file_len: u64,
    /// Offset of the next slot to read
    current_offset: u64,
    /// Set once the scan has ended early
    done: bool,
}

impl SlotIterator {
    pub(super) fn new(file: File) -> Result<Self> {
        let file_len = file.metadata()?.len();
        Ok(Self {
            reader: Some(BufReader::new(file)),
            file_len,
            current_offset: 0,
            done: false,
        })
    }

    /// Iterator over a store with no data file
    pub(super) fn empty() -> Self {
        Self {
            reader: None,
            file_len: 0,
            current_offset: 0,
            done: false,
        }
    }

    fn fail(&mut self, err: SlotError) -> Option<Result<(u64, Record)>> {
        self.done = true;
        self.reader = None;
        Some(Err(err))
    }
}

impl Iterator for SlotIterator {
    type Item = Result<(u64, Record)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.current_offset >= self.file_len {
            return None;
        }

        let offset = self.current_offset;
        let remaining = self.file_len - offset;
        if remaining < RECORD_SIZE_U64 {
            tracing::warn!(
                offset,
                trailing_bytes = remaining,
                "ignoring partial slot at end of data file"
            );
            self.done = true;
            self.reader = None;
            return None;
        }

        let reader = self.reader.as_mut()?;
        let mut slot = [0u8; RECORD_SIZE];
        if let Err(e) = reader.read_exact(&mut slot) {
            return self.fail(SlotError::Io(e));
        }

        self.current_offset += RECORD_SIZE_U64;

        match decode_record(&slot, offset) {
            Ok(record) => Some(Ok((offset, record))),
            Err(e) => self.fail(e),
        }
    }
}
