//! # SlotDB
//!
//! A minimal single-file record store with:
//! - Fixed-size binary records addressed by byte offset
//! - An in-memory primary index (id → offset) rebuilt on open
//! - Soft deletes via tombstones that are never reclaimed
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Caller / CLI                           │
//! │     add · search · delete · list_index · list_all · rebuild  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │               (disk first, index second)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │PrimaryIndex │ rebuild  │ RecordStore │
//!   │ (BTreeMap)  │◄─────────│ (slot file) │
//!   └─────────────┘   scan   └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Record    │
//!                           │  (64 bytes) │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod index;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SlotError, Result};
pub use config::{Config, SyncStrategy};
pub use engine::{Engine, SlotEntry};
pub use index::IndexEntry;
pub use record::{Record, RecordStatus};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SlotDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
