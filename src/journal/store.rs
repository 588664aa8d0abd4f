//! In-memory journal store
//!
//! Read-model store for journal entries. Owns the entry lifecycle
//! (creation, edits, soft deletion, privacy) and enforces validation
//! and ownership at the boundary, so the layers above only ever see
//! live, well-formed entries.

use crate::config;
use crate::error::{AppError, Result};
use crate::journal::models::{CreateEntryRequest, Entry, Mood, UpdateEntryRequest};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Validation limits enforced by the store
#[derive(Debug, Clone)]
pub struct JournalConfig {
    pub max_title_length: usize,
    pub max_content_length: usize,
    pub max_tags: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            max_title_length: config::MAX_TITLE_LENGTH,
            max_content_length: config::MAX_CONTENT_LENGTH,
            max_tags: config::MAX_TAGS,
        }
    }
}

struct StoreInner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// In-memory entry store, cheap to clone and share
#[derive(Clone)]
pub struct EntryStore {
    config: JournalConfig,
    inner: Arc<RwLock<StoreInner>>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::with_config(JournalConfig::default())
    }

    pub fn with_config(config: JournalConfig) -> Self {
        Self {
            config,
            inner: Arc::new(RwLock::new(StoreInner {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    fn validate(&self, title: &str, content: &str, tags: &[String]) -> Result<()> {
        if title.trim().is_empty() {
            return Err(AppError::Validation("title is required".to_string()));
        }
        if title.chars().count() > self.config.max_title_length {
            return Err(AppError::Validation(format!(
                "title must be {} characters or less",
                self.config.max_title_length
            )));
        }
        if content.trim().is_empty() {
            return Err(AppError::Validation("content is required".to_string()));
        }
        if content.chars().count() > self.config.max_content_length {
            return Err(AppError::Validation(format!(
                "content must be {} characters or less",
                self.config.max_content_length
            )));
        }
        if tags.len() > self.config.max_tags {
            return Err(AppError::Validation(format!(
                "at most {} tags allowed",
                self.config.max_tags
            )));
        }
        Ok(())
    }

    /// Create a new entry owned by `owner`, stamped at `now`
    pub async fn add_entry(
        &self,
        owner: &str,
        req: CreateEntryRequest,
        now: DateTime<Utc>,
    ) -> Result<Entry> {
        self.validate(&req.title, &req.content, &req.tags)?;

        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let entry = Entry {
            id,
            owner: owner.to_string(),
            title: req.title,
            content: req.content,
            mood: req.mood,
            tags: req.tags,
            is_private: req.is_private,
            timestamp: now.timestamp(),
            last_edited_at: 0,
            exists: true,
            deleted: false,
        };
        inner.entries.push(entry.clone());

        tracing::debug!("Created entry {} for {}", id, owner);
        Ok(entry)
    }

    /// Get a live entry by id. Private entries are readable only by
    /// their owner.
    pub async fn get_entry(&self, id: u64, viewer: &str) -> Result<Entry> {
        let inner = self.inner.read().await;
        let entry = inner
            .entries
            .iter()
            .find(|e| e.id == id && e.exists && !e.deleted)
            .ok_or(AppError::EntryNotFound(id))?;

        if entry.is_private && entry.owner != viewer {
            return Err(AppError::PrivateEntry(id));
        }

        Ok(entry.clone())
    }

    /// List a user's live entries in insertion order
    pub async fn user_entries(&self, owner: &str) -> Vec<Entry> {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .filter(|e| e.owner == owner && e.exists && !e.deleted)
            .cloned()
            .collect()
    }

    /// Count of a user's live entries
    pub async fn user_entry_count(&self, owner: &str) -> usize {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .filter(|e| e.owner == owner && e.exists && !e.deleted)
            .count()
    }

    /// Edit an entry, replacing title, content, mood and tags and
    /// stamping the edit time.
    pub async fn edit_entry(
        &self,
        id: u64,
        owner: &str,
        req: UpdateEntryRequest,
        now: DateTime<Utc>,
    ) -> Result<Entry> {
        self.validate(&req.title, &req.content, &req.tags)?;

        let mut inner = self.inner.write().await;
        let entry = inner
            .entries
            .iter_mut()
            .find(|e| e.id == id && e.exists && !e.deleted)
            .ok_or(AppError::EntryNotFound(id))?;

        if entry.owner != owner {
            return Err(AppError::NotEntryOwner(id));
        }

        entry.title = req.title;
        entry.content = req.content;
        entry.mood = req.mood;
        entry.tags = req.tags;
        entry.last_edited_at = now.timestamp();

        tracing::debug!("Updated entry {}", id);
        Ok(entry.clone())
    }

    /// Soft delete an entry
    pub async fn delete_entry(&self, id: u64, owner: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        let entry = inner
            .entries
            .iter_mut()
            .find(|e| e.id == id && e.exists && !e.deleted)
            .ok_or(AppError::EntryNotFound(id))?;

        if entry.owner != owner {
            return Err(AppError::NotEntryOwner(id));
        }

        entry.deleted = true;

        tracing::debug!("Soft deleted entry {}", id);
        Ok(())
    }

    /// Flip an entry's privacy flag
    pub async fn toggle_privacy(&self, id: u64, owner: &str) -> Result<Entry> {
        let mut inner = self.inner.write().await;
        let entry = inner
            .entries
            .iter_mut()
            .find(|e| e.id == id && e.exists && !e.deleted)
            .ok_or(AppError::EntryNotFound(id))?;

        if entry.owner != owner {
            return Err(AppError::NotEntryOwner(id));
        }

        entry.is_private = !entry.is_private;

        tracing::debug!("Toggled privacy for entry {}", id);
        Ok(entry.clone())
    }

    /// Per-mood counts of a user's live entries, zero-filled in
    /// canonical order. Statistics are only visible to the user
    /// themselves.
    pub async fn mood_stats(&self, owner: &str, viewer: &str) -> Result<BTreeMap<Mood, u64>> {
        if owner != viewer {
            return Err(AppError::StatsAccessDenied);
        }

        let inner = self.inner.read().await;
        let mut stats: BTreeMap<Mood, u64> = Mood::ALL.iter().map(|m| (*m, 0)).collect();
        for entry in inner
            .entries
            .iter()
            .filter(|e| e.owner == owner && e.exists && !e.deleted)
        {
            *stats.entry(entry.mood).or_insert(0) += 1;
        }

        Ok(stats)
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}
