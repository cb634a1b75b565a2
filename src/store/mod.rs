//! Store Module
//!
//! Persistent single-file storage of fixed-size record slots.
//!
//! ## Responsibilities
//! - Append new records at end-of-file
//! - Read and overwrite a record by byte offset
//! - Sequential scan of every slot (for index rebuild and diagnostics)
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Slot 0  (offset 0)                     │
//! ├────────────────────────────────────────┤
//! │ Slot 1  (offset RECORD_SIZE)           │
//! ├────────────────────────────────────────┤
//! │ Slot 2  (offset 2 * RECORD_SIZE)       │
//! ├────────────────────────────────────────┤
//! │ ... no header, no footer, never resized│
//! └────────────────────────────────────────┘
//! ```
//!
//! Every operation opens its own file handle and drops it before returning,
//! so no handle state survives between calls.

mod iterator;
mod record_file;

pub use iterator::SlotIterator;
pub use record_file::RecordStore;
