//! Entry export formatting
//!
//! Serializes entry snapshots into the string shapes consumed by
//! downstream export collaborators. Writing those strings anywhere is
//! the caller's job; nothing here touches the filesystem.

use crate::error::{AppError, Result};
use crate::journal::Entry;
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "markdown",
        }
    }

    /// File extension conventionally used for the format
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" => Ok(ExportFormat::Markdown),
            other => Err(AppError::InvalidArgument(format!(
                "unknown export format: {other}"
            ))),
        }
    }
}

/// Render entries in the given format
pub fn export_entries(entries: &[Entry], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(entries),
        ExportFormat::Csv => Ok(to_csv(entries)),
        ExportFormat::Markdown => Ok(to_markdown(entries)),
    }
}

/// Pretty-printed JSON array of entries
pub fn to_json(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// CSV with a header row and one row per entry. Text cells are quoted
/// with embedded quotes doubled.
pub fn to_csv(entries: &[Entry]) -> String {
    let mut lines = vec!["ID,Title,Content,Mood,Tags,Private,Date".to_string()];

    for entry in entries {
        let row = [
            entry.id.to_string(),
            quote(&entry.title),
            quote(&entry.content),
            entry.mood.as_str().to_string(),
            quote(&entry.tags.join(", ")),
            yes_no(entry.is_private).to_string(),
            full_date(entry.timestamp),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// One Markdown section per entry, separated by horizontal rules
pub fn to_markdown(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(markdown_section)
        .collect::<Vec<_>>()
        .join("\n")
}

fn markdown_section(entry: &Entry) -> String {
    let mut out = format!("# {}\n\n", entry.title);
    out.push_str(&format!("**Date:** {}  \n", full_date(entry.timestamp)));
    out.push_str(&format!(
        "**Mood:** {} {}  \n",
        entry.mood.emoji(),
        entry.mood.as_str()
    ));
    out.push_str(&format!("**Private:** {}", yes_no(entry.is_private)));
    if !entry.tags.is_empty() {
        out.push_str(&format!("\n**Tags:** {}", entry.tags.join(", ")));
    }
    out.push_str("\n\n");
    out.push_str(&entry.content);
    if entry.last_edited_at > 0 {
        out.push_str(&format!("\n*Edited: {}*", full_date(entry.last_edited_at)));
    }
    out.push_str("\n\n---\n");
    out
}

/// Human-readable date for an epoch-second timestamp,
/// e.g. "Tuesday, March 10, 2026"
fn full_date(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(instant) => instant.format("%A, %B %-d, %Y").to_string(),
        None => String::new(),
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
