//! Application configuration constants
//!
//! Central location for validation limits and analytics window
//! boundaries used throughout the crate.

// ===== Entry Validation Limits =====

/// Maximum length of an entry title in characters
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length of entry content in characters
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Maximum number of tags per entry
pub const MAX_TAGS: usize = 10;

// ===== Analytics Windows =====

/// Number of trailing weeks covered by the weekly average.
/// Also its fixed divisor, regardless of how long the user has
/// actually been journaling.
pub const AVERAGE_WINDOW_WEEKS: i64 = 12;

/// Length of the weekly-average window in days
pub const AVERAGE_WINDOW_DAYS: i64 = AVERAGE_WINDOW_WEEKS * 7;

/// Default number of month buckets shown in monthly summaries
pub const RECENT_MONTHS_WINDOW: usize = 6;
