//! Tests for the record codec
//!
//! These tests verify:
//! - Fixed slot size for every record
//! - Field placement in the slot layout
//! - Name validation
//! - Corrupt slot detection

use slotdb::record::{
    decode_record, encode_record, validate_name, Record, RecordStatus, MAX_NAME_LEN,
    NAME_FIELD_SIZE, RECORD_SIZE,
};
use slotdb::SlotError;

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_record_size_matches_c_layout() {
    // id (4) + name (50) + pad (2) + cgpa (4) + deleted (4)
    assert_eq!(RECORD_SIZE, 64);
    assert_eq!(NAME_FIELD_SIZE, 50);
    assert_eq!(MAX_NAME_LEN, 49);
}

#[test]
fn test_encoded_size_is_constant() {
    let short = Record::new(1, "", 0.0).unwrap();
    let long = Record::new(i32::MAX, "x".repeat(MAX_NAME_LEN), 10.0).unwrap();

    assert_eq!(encode_record(&short).unwrap().len(), RECORD_SIZE);
    assert_eq!(encode_record(&long).unwrap().len(), RECORD_SIZE);
    assert_eq!(encode_record(&long.tombstoned()).unwrap().len(), RECORD_SIZE);
}

#[test]
fn test_field_offsets() {
    let record = Record::new(0x01020304, "Ada", 9.1).unwrap();
    let bytes = encode_record(&record).unwrap();

    assert_eq!(&bytes[0..4], &0x01020304i32.to_ne_bytes());
    assert_eq!(&bytes[4..7], b"Ada");
    // Terminator, zero padding and alignment padding
    assert!(bytes[7..56].iter().all(|&b| b == 0));
    assert_eq!(&bytes[56..60], &9.1f32.to_ne_bytes());
    assert_eq!(&bytes[60..64], &0i32.to_ne_bytes());
}

#[test]
fn test_deleted_flag_encoding() {
    let record = Record::new(5, "Eve", 6.5).unwrap().tombstoned();
    let bytes = encode_record(&record).unwrap();

    assert_eq!(&bytes[60..64], &1i32.to_ne_bytes());
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_matches_written_fields() {
    let record = Record::new(7, "Ada", 9.1).unwrap();
    let bytes = encode_record(&record).unwrap();

    let decoded = decode_record(&bytes, 0).unwrap();

    assert_eq!(decoded, record);
    assert_eq!(decoded.status(), RecordStatus::Active);
}

#[test]
fn test_decode_negative_id_and_unicode_name() {
    let record = Record::new(-42, "Zoë Ñandú", -1.25).unwrap();
    let bytes = encode_record(&record).unwrap();

    let decoded = decode_record(&bytes, 128).unwrap();

    assert_eq!(decoded, record);
}

#[test]
fn test_decode_ignores_padding_bytes() {
    let record = Record::new(3, "C", 6.0).unwrap();
    let mut bytes = encode_record(&record).unwrap().to_vec();
    bytes[54] = 0xAB;
    bytes[55] = 0xCD;

    let decoded = decode_record(&bytes, 0).unwrap();

    assert_eq!(decoded, record);
}

#[test]
fn test_decode_rejects_wrong_length() {
    let result = decode_record(&[0u8; RECORD_SIZE - 1], 64);

    assert!(matches!(
        result,
        Err(SlotError::CorruptRecord { offset: 64, .. })
    ));
}

#[test]
fn test_decode_nonzero_deleted_flag_is_tombstone() {
    let record = Record::new(1, "A", 8.0).unwrap();
    let mut bytes = encode_record(&record).unwrap().to_vec();
    bytes[60..64].copy_from_slice(&7i32.to_ne_bytes());

    let decoded = decode_record(&bytes, 0).unwrap();

    assert!(decoded.deleted);
    assert_eq!(decoded.status(), RecordStatus::Deleted);
    // Re-encoding normalizes the flag to 1
    let reencoded = encode_record(&decoded).unwrap();
    assert_eq!(&reencoded[60..64], &1i32.to_ne_bytes());
}

#[test]
fn test_decode_rejects_unterminated_name() {
    let record = Record::new(1, "A", 8.0).unwrap();
    let mut bytes = encode_record(&record).unwrap().to_vec();
    for b in &mut bytes[4..4 + NAME_FIELD_SIZE] {
        *b = b'z';
    }

    let result = decode_record(&bytes, 0);

    assert!(matches!(result, Err(SlotError::CorruptRecord { .. })));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_name_at_limit_is_accepted() {
    assert!(validate_name(&"n".repeat(MAX_NAME_LEN)).is_ok());
}

#[test]
fn test_name_over_limit_is_rejected() {
    let result = Record::new(1, "n".repeat(MAX_NAME_LEN + 1), 5.0);

    assert!(matches!(result, Err(SlotError::InvalidRecord(_))));
}

#[test]
fn test_name_with_nul_is_rejected() {
    let result = Record::new(1, "bad\0name", 5.0);

    assert!(matches!(result, Err(SlotError::InvalidRecord(_))));
}

#[test]
fn test_encode_revalidates_mutated_name() {
    let mut record = Record::new(1, "ok", 5.0).unwrap();
    record.name = "n".repeat(MAX_NAME_LEN + 1);

    assert!(matches!(
        encode_record(&record),
        Err(SlotError::InvalidRecord(_))
    ));
}

#[test]
fn test_status_labels() {
    let record = Record::new(1, "A", 8.0).unwrap();

    assert_eq!(record.status().to_string(), "ACTIVE");
    assert_eq!(record.tombstoned().status().to_string(), "DELETED");
}
