//! Daybook library
//!
//! Core engine of the daybook journaling application: an in-memory
//! journal store, a pure analytics & query engine and export
//! formatting, exposed through an async service layer.

pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod journal;
pub mod services;
