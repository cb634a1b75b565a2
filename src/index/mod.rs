//! Index Module
//!
//! In-memory primary index over the record store.
//!
//! ## Responsibilities
//! - Map each active record id to the byte offset of its slot
//! - Rebuild from scratch by scanning every slot
//! - Stay in step with every add and delete
//!
//! ## Data Structure Choice
//! A `BTreeMap<i32, u64>`:
//! - O(log n) lookup, insert and remove, no capacity limit
//! - Ascending id iteration gives a listing order that is stable for
//!   the lifetime of the process
//!
//! The index never outlives the process; it is rebuilt on every open.

mod primary;
mod rebuild;

pub use primary::PrimaryIndex;
pub use rebuild::RebuildStats;

/// One index entry: an active record's id and slot offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Record key
    pub id: i32,

    /// Byte offset of the record's slot in the data file
    pub offset: u64,
}
