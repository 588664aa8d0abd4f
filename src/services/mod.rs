//! Services module
//!
//! Business logic services that coordinate the store, the analytics
//! engine and export formatting.

pub mod journal;

pub use journal::JournalService;
