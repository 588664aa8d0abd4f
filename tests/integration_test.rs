//! Integration tests for daybook
//!
//! These tests verify end-to-end functionality including:
//! - Entry lifecycle (create, edit, delete, privacy)
//! - Filtering and sorting
//! - Aggregate analytics and the writing streak
//! - Export formatting

use chrono::{DateTime, Duration, TimeZone, Utc};
use daybook::analytics::{FilterCriteria, SortKey};
use daybook::error::AppError;
use daybook::export::ExportFormat;
use daybook::journal::{CreateEntryRequest, EntryStore, Mood, UpdateEntryRequest};
use daybook::services::JournalService;

/// Helper to create a service plus a handle on its backing store,
/// so tests can seed entries at controlled timestamps.
fn create_test_service() -> (JournalService, EntryStore) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let store = EntryStore::new();
    let service = JournalService::new(store.clone());
    (service, store)
}

fn request(title: &str, content: &str, mood: Mood, tags: &[&str]) -> CreateEntryRequest {
    CreateEntryRequest {
        title: title.to_string(),
        content: content.to_string(),
        mood,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_private: false,
    }
}

fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn test_entry_crud_operations() {
    let (service, _store) = create_test_service();

    // Create entry
    let entry = service
        .add_entry("alice", request("First entry", "It begins.", Mood::Excited, &["start"]))
        .await
        .unwrap();

    assert_eq!(entry.id, 0);
    assert_eq!(entry.mood, Mood::Excited);
    assert_eq!(entry.last_edited_at, 0);

    // Read entry
    let retrieved = service.entry(entry.id, "alice").await.unwrap();
    assert_eq!(retrieved.title, "First entry");

    // Update entry
    let updated = service
        .edit_entry(
            entry.id,
            "alice",
            UpdateEntryRequest {
                title: "First entry, revised".to_string(),
                content: "It continues.".to_string(),
                mood: Mood::Calm,
                tags: vec!["start".to_string(), "revised".to_string()],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "First entry, revised");
    assert_eq!(updated.mood, Mood::Calm);
    assert!(updated.last_edited_at > 0);

    // List entries
    let entries = service.entries("alice").await;
    assert_eq!(entries.len(), 1);
    assert_eq!(service.entry_count("alice").await, 1);

    // Delete entry (soft delete)
    service.delete_entry(entry.id, "alice").await.unwrap();

    assert_eq!(service.entry_count("alice").await, 0);
    let gone = service.entry(entry.id, "alice").await;
    assert!(matches!(gone, Err(AppError::EntryNotFound(_))));
}

#[tokio::test]
async fn test_validation_is_enforced_at_the_boundary() {
    let (service, _store) = create_test_service();

    let empty_title = service
        .add_entry("alice", request("", "body", Mood::Neutral, &[]))
        .await;
    assert!(matches!(empty_title, Err(AppError::Validation(_))));

    let long_content = service
        .add_entry(
            "alice",
            request("Title", &"x".repeat(10_001), Mood::Neutral, &[]),
        )
        .await;
    assert!(matches!(long_content, Err(AppError::Validation(_))));

    let tags: Vec<String> = (0..11).map(|i| format!("t{i}")).collect();
    let tag_refs: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
    let too_many_tags = service
        .add_entry("alice", request("Title", "body", Mood::Neutral, &tag_refs))
        .await;
    assert!(matches!(too_many_tags, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_ownership_and_privacy_rules() {
    let (service, _store) = create_test_service();

    let mut secret = request("Secret", "for my eyes", Mood::Anxious, &[]);
    secret.is_private = true;
    let entry = service.add_entry("alice", secret).await.unwrap();

    // Others cannot read, edit or delete
    let read = service.entry(entry.id, "bob").await;
    assert!(matches!(read, Err(AppError::PrivateEntry(_))));

    let edit = service
        .edit_entry(
            entry.id,
            "bob",
            UpdateEntryRequest {
                title: "Hacked".to_string(),
                content: "Hacked".to_string(),
                mood: Mood::Angry,
                tags: Vec::new(),
            },
        )
        .await;
    assert!(matches!(edit, Err(AppError::NotEntryOwner(_))));

    let delete = service.delete_entry(entry.id, "bob").await;
    assert!(matches!(delete, Err(AppError::NotEntryOwner(_))));

    // Statistics are gated to the owning user
    let stats = service.mood_distribution("alice", "bob").await;
    assert!(matches!(stats, Err(AppError::StatsAccessDenied)));

    let own_stats = service.mood_distribution("alice", "alice").await.unwrap();
    assert_eq!(own_stats[&Mood::Anxious], 1);

    // Toggling privacy opens the entry up
    let toggled = service.toggle_privacy(entry.id, "alice").await.unwrap();
    assert!(!toggled.is_private);
    assert!(service.entry(entry.id, "bob").await.is_ok());
}

#[tokio::test]
async fn test_filter_and_sort_workflow() {
    let (service, store) = create_test_service();
    let base = noon(2026, 3, 1);

    store
        .add_entry(
            "alice",
            request("Morning Run", "felt great", Mood::Happy, &["fitness"]),
            base,
        )
        .await
        .unwrap();
    store
        .add_entry(
            "alice",
            request("Work", "busy day", Mood::Anxious, &[]),
            base + Duration::days(1),
        )
        .await
        .unwrap();
    store
        .add_entry(
            "alice",
            request("Quiet evening", "reading", Mood::Calm, &["books"]),
            base + Duration::days(2),
        )
        .await
        .unwrap();

    // Case-insensitive search against title, content and tags
    let criteria = FilterCriteria {
        search: Some("run".to_string()),
        ..FilterCriteria::default()
    };
    let found = service
        .filtered_entries("alice", &criteria, SortKey::Newest)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Morning Run");

    // Date-bounded query
    let criteria = FilterCriteria {
        start_date: Some(base + Duration::days(1)),
        end_date: Some(base + Duration::days(2)),
        ..FilterCriteria::default()
    };
    let in_range = service
        .filtered_entries("alice", &criteria, SortKey::Oldest)
        .await
        .unwrap();
    assert_eq!(in_range.len(), 2);
    assert_eq!(in_range[0].title, "Work");

    // Inverted bounds are rejected up front
    let criteria = FilterCriteria {
        start_date: Some(base + Duration::days(2)),
        end_date: Some(base),
        ..FilterCriteria::default()
    };
    let inverted = service
        .filtered_entries("alice", &criteria, SortKey::Newest)
        .await;
    assert!(matches!(inverted, Err(AppError::InvalidArgument(_))));

    // Newest-first ordering
    let all = service
        .filtered_entries("alice", &FilterCriteria::default(), SortKey::Newest)
        .await
        .unwrap();
    assert_eq!(all[0].title, "Quiet evening");
    assert_eq!(all[2].title, "Morning Run");
}

#[tokio::test]
async fn test_analytics_workflow() {
    let (service, store) = create_test_service();
    let now = noon(2026, 3, 10);

    // Three-day streak with a double entry today; happy ties excited
    store
        .add_entry("alice", request("Two days ago", "a", Mood::Happy, &[]), now - Duration::days(2))
        .await
        .unwrap();
    store
        .add_entry("alice", request("Yesterday", "b", Mood::Excited, &[]), now - Duration::days(1))
        .await
        .unwrap();
    store
        .add_entry("alice", request("Today, early", "c", Mood::Excited, &[]), now - Duration::hours(3))
        .await
        .unwrap();
    store
        .add_entry("alice", request("Today", "d", Mood::Happy, &[]), now)
        .await
        .unwrap();
    // Far in the past, outside the weekly-average window
    store
        .add_entry("alice", request("Long ago", "e", Mood::Sad, &[]), now - Duration::days(120))
        .await
        .unwrap();

    let summary = service.analytics_at("alice", now).await;

    assert_eq!(summary.total_entries, 5);
    assert_eq!(summary.writing_streak, 4);
    assert_eq!(summary.mood_distribution[&Mood::Happy], 2);
    assert_eq!(summary.mood_distribution[&Mood::Excited], 2);
    assert_eq!(summary.mood_distribution[&Mood::Grateful], 0);
    // Canonical order breaks the happy/excited tie
    assert_eq!(summary.most_common_mood, Mood::Happy);
    // Four entries in the trailing 12 weeks, fixed divisor of 12
    assert!((summary.average_entries_per_week - 4.0 / 12.0).abs() < 1e-9);
    assert_eq!(summary.entries_per_month.get("2026-03"), Some(&4));
    assert_eq!(summary.entries_per_month.get("2025-11"), Some(&1));

    // Deleted entries drop out of every statistic
    let entries = service.entries("alice").await;
    let today_ids: Vec<u64> = entries
        .iter()
        .filter(|e| e.title.starts_with("Today"))
        .map(|e| e.id)
        .collect();
    for id in today_ids {
        service.delete_entry(id, "alice").await.unwrap();
    }

    let summary = service.analytics_at("alice", now).await;
    assert_eq!(summary.total_entries, 3);
    // Nothing today, but yesterday's run still counts
    assert_eq!(summary.writing_streak, 2);
}

#[tokio::test]
async fn test_export_workflow() {
    let (service, store) = create_test_service();
    let when = noon(2026, 3, 10);

    store
        .add_entry(
            "alice",
            request("Public note", "shared thoughts", Mood::Grateful, &["open"]),
            when,
        )
        .await
        .unwrap();
    let mut secret = request("Private note", "hidden thoughts", Mood::Sad, &[]);
    secret.is_private = true;
    store.add_entry("alice", secret, when).await.unwrap();

    // JSON round-trips through serde
    let json = service.export("alice", ExportFormat::Json, true).await.unwrap();
    let parsed: Vec<daybook::journal::Entry> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 2);

    // CSV carries the header and one row per exported entry
    let csv = service.export("alice", ExportFormat::Csv, false).await.unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ID,Title,Content,Mood,Tags,Private,Date");
    assert!(lines[1].contains("Public note"));

    // Markdown honors the include-private flag
    let markdown = service
        .export("alice", ExportFormat::Markdown, false)
        .await
        .unwrap();
    assert!(markdown.contains("# Public note"));
    assert!(!markdown.contains("# Private note"));
}
