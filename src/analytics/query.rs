//! Entry filtering and sorting
//!
//! Pure query functions over entry snapshots. Inputs are never
//! mutated; every function returns a new sequence.

use crate::error::{AppError, Result};
use crate::journal::{Entry, Mood};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Predicate parameters for filtering entries.
///
/// All criteria are optional and combined with logical AND; an empty
/// criteria set matches every entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub mood: Option<Mood>,
    pub is_private: Option<bool>,
    pub search: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Sort order for entry listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Newest,
    Oldest,
    Mood,
    Edited,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Mood => "mood",
            SortKey::Edited => "edited",
        }
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "mood" => Ok(SortKey::Mood),
            "edited" => Ok(SortKey::Edited),
            other => Err(AppError::InvalidArgument(format!(
                "unknown sort key: {other}"
            ))),
        }
    }
}

/// Filter entries by the given criteria, preserving relative order.
///
/// Returns `InvalidArgument` when the date range is inconsistent
/// (`start_date` after `end_date`), before looking at any entry.
pub fn filter_entries(entries: &[Entry], criteria: &FilterCriteria) -> Result<Vec<Entry>> {
    if let (Some(start), Some(end)) = (criteria.start_date, criteria.end_date) {
        if start > end {
            return Err(AppError::InvalidArgument(
                "start date is after end date".to_string(),
            ));
        }
    }

    let search = criteria.search.as_ref().map(|s| s.to_lowercase());

    let filtered = entries
        .iter()
        .filter(|entry| {
            if let Some(mood) = criteria.mood {
                if entry.mood != mood {
                    return false;
                }
            }

            if let Some(is_private) = criteria.is_private {
                if entry.is_private != is_private {
                    return false;
                }
            }

            if let Some(needle) = &search {
                let title_match = entry.title.to_lowercase().contains(needle);
                let content_match = entry.content.to_lowercase().contains(needle);
                let tags_match = entry.tags.iter().any(|t| t.to_lowercase().contains(needle));
                if !title_match && !content_match && !tags_match {
                    return false;
                }
            }

            if let Some(start) = criteria.start_date {
                if entry.timestamp < start.timestamp() {
                    return false;
                }
            }

            if let Some(end) = criteria.end_date {
                if entry.timestamp > end.timestamp() {
                    return false;
                }
            }

            true
        })
        .cloned()
        .collect();

    Ok(filtered)
}

/// Sort entries by the given key into a new sequence.
///
/// The sort is stable: entries comparing equal on the key keep their
/// relative input order. `mood` orders by the lexicographic mood code,
/// not the canonical enumeration order; `edited` puts never-edited
/// entries last.
pub fn sort_entries(entries: &[Entry], key: SortKey) -> Vec<Entry> {
    let mut sorted = entries.to_vec();

    match key {
        SortKey::Newest => sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortKey::Oldest => sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortKey::Mood => sorted.sort_by(|a, b| a.mood.as_str().cmp(b.mood.as_str())),
        SortKey::Edited => sorted.sort_by(|a, b| b.last_edited_at.cmp(&a.last_edited_at)),
    }

    sorted
}
