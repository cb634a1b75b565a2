//! Record Module
//!
//! The fixed-size record persisted in every slot of the data file.
//!
//! ## Slot Layout (64 bytes, native byte order)
//! ```text
//! ┌─────────┬──────────────────────┬─────────┬──────────┬─────────────┐
//! │ Id (4)  │ Name (50)            │ Pad (2) │ Cgpa (4) │ Deleted (4) │
//! │ i32     │ UTF-8, NUL-padded    │ zero    │ f32      │ i32 0 / 1   │
//! └─────────┴──────────────────────┴─────────┴──────────┴─────────────┘
//! ```
//!
//! The two padding bytes keep `cgpa` 4-byte aligned, matching the natural
//! layout of the equivalent C struct on common 64-bit targets. Encoding
//! writes the deleted flag as 0 or 1; decoding reads any non-zero flag as
//! a tombstone.

mod codec;

pub use codec::{decode_record, encode_record};

use crate::error::{Result, SlotError};

// =============================================================================
// Layout Constants
// =============================================================================

/// Bytes reserved for the name field, terminator included
pub const NAME_FIELD_SIZE: usize = 50;

/// Longest storable name in bytes (one byte is kept for the terminator)
pub const MAX_NAME_LEN: usize = NAME_FIELD_SIZE - 1;

/// Alignment padding between name and cgpa
pub(crate) const PADDING_SIZE: usize = 2;

/// Serialized size of every record: Id (4) + Name (50) + Pad (2) + Cgpa (4) + Deleted (4)
pub const RECORD_SIZE: usize = 4 + NAME_FIELD_SIZE + PADDING_SIZE + 4 + 4;

/// `RECORD_SIZE` as a file offset stride
pub const RECORD_SIZE_U64: u64 = RECORD_SIZE as u64;

// =============================================================================
// Record
// =============================================================================

/// A single student record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique key
    pub id: i32,

    /// Name, at most `MAX_NAME_LEN` bytes, no NUL
    pub name: String,

    /// Grade point average
    pub cgpa: f32,

    /// Tombstone flag
    pub deleted: bool,
}

impl Record {
    /// Create a new active record, validating the name
    pub fn new(id: i32, name: impl Into<String>, cgpa: f32) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id,
            name,
            cgpa,
            deleted: false,
        })
    }

    /// Status of this record as seen by a slot scan
    pub fn status(&self) -> RecordStatus {
        if self.deleted {
            RecordStatus::Deleted
        } else {
            RecordStatus::Active
        }
    }

    /// Return a tombstoned copy of this record
    pub fn tombstoned(&self) -> Self {
        Self {
            deleted: true,
            ..self.clone()
        }
    }
}

/// Check that a name fits the fixed-width field
pub fn validate_name(name: &str) -> Result<()> {
    if name.len() > MAX_NAME_LEN {
        return Err(SlotError::InvalidRecord(format!(
            "name is {} bytes, limit is {}",
            name.len(),
            MAX_NAME_LEN
        )));
    }
    if name.as_bytes().contains(&0) {
        return Err(SlotError::InvalidRecord(
            "name must not contain NUL bytes".to_string(),
        ));
    }
    Ok(())
}

/// Active/deleted annotation for a scanned slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Active,
    Deleted,
}

impl RecordStatus {
    /// Label used in diagnostic listings
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "ACTIVE",
            RecordStatus::Deleted => "DELETED",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
