//! Aggregate journal analytics
//!
//! Derives summary statistics from an entry snapshot: mood
//! distribution, monthly counts, trailing weekly average and the
//! consecutive-day writing streak. Everything here is a pure function
//! of the input and the injected evaluation instant.

use crate::config;
use crate::journal::{Entry, Mood};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate statistics over a user's entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_entries: usize,
    /// Entry count per mood, zero-filled over all moods in canonical order
    pub mood_distribution: BTreeMap<Mood, u64>,
    /// Entry count per "YYYY-MM" month key; months without entries are absent
    pub entries_per_month: BTreeMap<String, u64>,
    /// Entries in the trailing 12-week window, divided by a fixed 12
    pub average_entries_per_week: f64,
    pub most_common_mood: Mood,
    /// Entries in the unbroken run of days ending at or next to today
    pub writing_streak: u64,
}

impl AnalyticsSummary {
    /// The most recent `n` month buckets that have entries, oldest first
    pub fn recent_months(&self, n: usize) -> Vec<(String, u64)> {
        let skip = self.entries_per_month.len().saturating_sub(n);
        self.entries_per_month
            .iter()
            .skip(skip)
            .map(|(month, count)| (month.clone(), *count))
            .collect()
    }
}

/// Compute aggregate analytics for a set of entries.
///
/// `now` is the evaluation instant for the trailing weekly average and
/// the writing streak; it is captured once per call so a single
/// summary is internally consistent.
pub fn analyze(entries: &[Entry], now: DateTime<Utc>) -> AnalyticsSummary {
    let mut mood_distribution: BTreeMap<Mood, u64> =
        Mood::ALL.iter().map(|mood| (*mood, 0)).collect();
    let mut entries_per_month: BTreeMap<String, u64> = BTreeMap::new();

    for entry in entries {
        if let Some(count) = mood_distribution.get_mut(&entry.mood) {
            *count += 1;
        }

        // Timestamps that don't map to a calendar instant are skipped
        // from calendar buckets rather than rejected.
        if let Some(created) = DateTime::from_timestamp(entry.timestamp, 0) {
            let month_key = created.format("%Y-%m").to_string();
            *entries_per_month.entry(month_key).or_insert(0) += 1;
        }
    }

    // Only a strictly greater count displaces the current best, so
    // ties resolve to the earliest mood in canonical order and an
    // all-zero distribution keeps the neutral default.
    let mut most_common_mood = Mood::default();
    let mut best = 0;
    for mood in Mood::ALL {
        let count = mood_distribution.get(&mood).copied().unwrap_or(0);
        if count > best {
            most_common_mood = mood;
            best = count;
        }
    }

    let window_start = (now - Duration::days(config::AVERAGE_WINDOW_DAYS)).timestamp();
    let recent = entries
        .iter()
        .filter(|e| e.timestamp >= window_start && e.timestamp <= now.timestamp())
        .count();
    let average_entries_per_week = recent as f64 / config::AVERAGE_WINDOW_WEEKS as f64;

    AnalyticsSummary {
        total_entries: entries.len(),
        mood_distribution,
        entries_per_month,
        average_entries_per_week,
        most_common_mood,
        writing_streak: writing_streak(entries, now.date_naive()),
    }
}

/// Count entries in the unbroken run of days ending at `today` or the
/// day before it.
///
/// Several entries on the same calendar day each count toward the
/// streak: the streak counts entries, not distinct days. Any gap of a
/// full day or more ends the run, as does an entry dated after `today`.
pub fn writing_streak(entries: &[Entry], today: NaiveDate) -> u64 {
    if entries.is_empty() {
        return 0;
    }

    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut streak = 0;
    let mut cursor = today;

    for entry in sorted {
        let entry_day = match DateTime::from_timestamp(entry.timestamp, 0) {
            Some(created) => created.date_naive(),
            None => break,
        };

        match (cursor - entry_day).num_days() {
            0 => streak += 1,
            1 => {
                streak += 1;
                cursor = entry_day;
            }
            _ => break,
        }
    }

    streak
}
