//! Journal service
//!
//! High-level API over the entry store, the analytics engine and the
//! export formatter. This is the only layer that reads the wall
//! clock; everything below takes the evaluation instant as a
//! parameter.

use crate::analytics::{
    analyze, filter_entries, sort_entries, AnalyticsSummary, FilterCriteria, SortKey,
};
use crate::error::Result;
use crate::export::{export_entries, ExportFormat};
use crate::journal::{CreateEntryRequest, Entry, EntryStore, Mood, UpdateEntryRequest};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Service for managing journal entries
#[derive(Clone)]
pub struct JournalService {
    store: EntryStore,
}

impl JournalService {
    pub fn new(store: EntryStore) -> Self {
        Self { store }
    }

    /// Create a new entry for `owner`
    pub async fn add_entry(&self, owner: &str, req: CreateEntryRequest) -> Result<Entry> {
        tracing::info!("Creating entry for {}: {}", owner, req.title);

        let entry = self.store.add_entry(owner, req, Utc::now()).await?;

        tracing::info!("Entry created successfully: {}", entry.id);

        Ok(entry)
    }

    /// Get an entry by id as seen by `viewer`
    pub async fn entry(&self, id: u64, viewer: &str) -> Result<Entry> {
        self.store.get_entry(id, viewer).await
    }

    /// List all of a user's entries
    pub async fn entries(&self, owner: &str) -> Vec<Entry> {
        self.store.user_entries(owner).await
    }

    /// Count of a user's entries
    pub async fn entry_count(&self, owner: &str) -> usize {
        self.store.user_entry_count(owner).await
    }

    /// Edit an entry
    pub async fn edit_entry(
        &self,
        id: u64,
        owner: &str,
        req: UpdateEntryRequest,
    ) -> Result<Entry> {
        tracing::debug!("Updating entry: {}", id);

        let entry = self.store.edit_entry(id, owner, req, Utc::now()).await?;

        tracing::debug!("Entry updated successfully: {}", entry.id);

        Ok(entry)
    }

    /// Delete an entry (soft delete)
    pub async fn delete_entry(&self, id: u64, owner: &str) -> Result<()> {
        tracing::info!("Deleting entry: {}", id);

        self.store.delete_entry(id, owner).await?;

        tracing::info!("Entry deleted successfully: {}", id);

        Ok(())
    }

    /// Flip an entry's privacy flag
    pub async fn toggle_privacy(&self, id: u64, owner: &str) -> Result<Entry> {
        tracing::info!("Toggling privacy for entry: {}", id);

        self.store.toggle_privacy(id, owner).await
    }

    /// A user's entries, filtered and sorted for display
    pub async fn filtered_entries(
        &self,
        owner: &str,
        criteria: &FilterCriteria,
        sort: SortKey,
    ) -> Result<Vec<Entry>> {
        let entries = self.store.user_entries(owner).await;
        let filtered = filter_entries(&entries, criteria)?;
        Ok(sort_entries(&filtered, sort))
    }

    /// Aggregate analytics over a user's entries, evaluated now
    pub async fn analytics(&self, owner: &str) -> AnalyticsSummary {
        self.analytics_at(owner, Utc::now()).await
    }

    /// Aggregate analytics evaluated at an explicit instant
    pub async fn analytics_at(&self, owner: &str, now: DateTime<Utc>) -> AnalyticsSummary {
        let entries = self.store.user_entries(owner).await;
        analyze(&entries, now)
    }

    /// Per-mood entry counts, visible only to the owning user
    pub async fn mood_distribution(
        &self,
        owner: &str,
        viewer: &str,
    ) -> Result<BTreeMap<Mood, u64>> {
        self.store.mood_stats(owner, viewer).await
    }

    /// Render a user's entries in an export format
    pub async fn export(
        &self,
        owner: &str,
        format: ExportFormat,
        include_private: bool,
    ) -> Result<String> {
        let mut entries = self.store.user_entries(owner).await;
        if !include_private {
            entries.retain(|entry| !entry.is_private);
        }

        tracing::debug!("Exporting {} entries as {}", entries.len(), format.as_str());

        export_entries(&entries, format)
    }
}
