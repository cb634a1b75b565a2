//! Record codec
//!
//! Encoding and decoding of the fixed-width slot layout.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Result, SlotError};

use super::{validate_name, Record, NAME_FIELD_SIZE, PADDING_SIZE, RECORD_SIZE};

const DELETED_FALSE: i32 = 0;
const DELETED_TRUE: i32 = 1;

/// Encode a record into exactly `RECORD_SIZE` bytes
///
/// Format: id (4) + name (50, zero-padded) + pad (2) + cgpa (4) + deleted (4)
pub fn encode_record(record: &Record) -> Result<Bytes> {
    validate_name(&record.name)?;

    let mut buf = BytesMut::with_capacity(RECORD_SIZE);
    buf.put_i32_ne(record.id);

    let name = record.name.as_bytes();
    buf.put_slice(name);
    buf.put_bytes(0, NAME_FIELD_SIZE - name.len());
    buf.put_bytes(0, PADDING_SIZE);

    buf.put_f32_ne(record.cgpa);
    buf.put_i32_ne(if record.deleted {
        DELETED_TRUE
    } else {
        DELETED_FALSE
    });

    debug_assert_eq!(buf.len(), RECORD_SIZE);
    Ok(buf.freeze())
}

/// Decode one record from a slot read at `offset`
///
/// `offset` is only used for error context.
pub fn decode_record(slot: &[u8], offset: u64) -> Result<Record> {
    if slot.len() != RECORD_SIZE {
        return Err(SlotError::CorruptRecord {
            offset,
            reason: format!("slot is {} bytes, expected {}", slot.len(), RECORD_SIZE),
        });
    }

    let mut buf = slot;
    let id = buf.get_i32_ne();

    let name_field = &buf[..NAME_FIELD_SIZE];
    let name_len = name_field
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| SlotError::CorruptRecord {
            offset,
            reason: "name field has no terminator".to_string(),
        })?;
    let name = String::from_utf8_lossy(&name_field[..name_len]).into_owned();
    buf.advance(NAME_FIELD_SIZE + PADDING_SIZE);

    let cgpa = buf.get_f32_ne();
    // Any non-zero flag reads as a tombstone
    let deleted = buf.get_i32_ne() != DELETED_FALSE;

    Ok(Record {
        id,
        name,
        cgpa,
        deleted,
    })
}
