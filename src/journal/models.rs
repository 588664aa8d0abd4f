//! Journal models
//!
//! Rust structs representing journal entities.
//! All models use serde for serialization to downstream consumers.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood attached to a journal entry.
///
/// Declaration order is the canonical order, used for zero-filling
/// distributions and breaking most-common-mood ties. The lexicographic
/// order of the codes differs from it (see `SortKey::Mood`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Excited,
    Grateful,
    Calm,
    Neutral,
    Sad,
    Anxious,
    Angry,
}

impl Mood {
    /// All moods in canonical order
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Excited,
        Mood::Grateful,
        Mood::Calm,
        Mood::Neutral,
        Mood::Sad,
        Mood::Anxious,
        Mood::Angry,
    ];

    /// Canonical lowercase code
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Grateful => "grateful",
            Mood::Calm => "calm",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Excited => "Excited",
            Mood::Grateful => "Grateful",
            Mood::Calm => "Calm",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Angry => "Angry",
        }
    }

    /// Emoji shown next to the mood
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Excited => "🤩",
            Mood::Grateful => "🙏",
            Mood::Calm => "😌",
            Mood::Neutral => "😐",
            Mood::Sad => "😢",
            Mood::Anxious => "😰",
            Mood::Angry => "😠",
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Neutral
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Mood::Happy),
            "excited" => Ok(Mood::Excited),
            "grateful" => Ok(Mood::Grateful),
            "calm" => Ok(Mood::Calm),
            "neutral" => Ok(Mood::Neutral),
            "sad" => Ok(Mood::Sad),
            "anxious" => Ok(Mood::Anxious),
            "angry" => Ok(Mood::Angry),
            other => Err(AppError::InvalidArgument(format!("unknown mood: {other}"))),
        }
    }
}

/// A journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: u64,
    pub owner: String,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub tags: Vec<String>,
    pub is_private: bool,
    /// Creation time in seconds since the Unix epoch
    pub timestamp: i64,
    /// Last edit time in seconds since the Unix epoch; 0 = never edited
    pub last_edited_at: i64,
    pub exists: bool,
    pub deleted: bool,
}

/// Create entry request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_private: bool,
}

/// Update entry request.
/// Edits replace title, content, mood and tags wholesale; the privacy
/// flag changes only through its own toggle operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryRequest {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    #[serde(default)]
    pub tags: Vec<String>,
}
