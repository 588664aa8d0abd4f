//! Journal module
//!
//! Entry models and the in-memory store that owns entry lifecycle.

pub mod models;
pub mod store;

pub use models::{CreateEntryRequest, Entry, Mood, UpdateEntryRequest};
pub use store::{EntryStore, JournalConfig};
