//! Persistent log of recent conversions.
//!
//! Entries are kept newest-first and capped at a fixed capacity; the whole
//! list is rewritten as pretty JSON after every change.

use anyhow::{Context, Result};
use encodecraft_codec::{CodecKind, Operation};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::defaults::{HISTORY_LIMIT, PREVIEW_CHARS};

/// A single recorded conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Milliseconds since the Unix epoch, unique within a history.
    pub id: u64,
    pub operation: Operation,
    pub codec: CodecKind,
    pub input_preview: String,
    pub output_preview: String,
    pub input: String,
    pub output: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

#[derive(Debug)]
pub struct History {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl History {
    /// Load the history stored at `path`. A missing or empty file is an
    /// empty history.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read history file {}", path.display()))?;
            if raw.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&raw).with_context(|| {
                    format!("History file {} is corrupt", path.display())
                })?
            }
        } else {
            Vec::new()
        };

        log::debug!(
            "loaded {} history entries from {}",
            entries.len(),
            path.display()
        );

        let mut history = Self {
            path,
            entries,
            limit: HISTORY_LIMIT,
        };
        history.entries.truncate(history.limit);
        Ok(history)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a conversion at the front, dropping the oldest entries beyond
    /// capacity.
    pub fn record(&mut self, operation: Operation, codec: CodecKind, input: &str, output: &str) {
        let now = now_millis();
        let id = match self.entries.first() {
            Some(newest) if newest.id >= now => newest.id + 1,
            _ => now,
        };

        self.entries.insert(
            0,
            HistoryEntry {
                id,
                operation,
                codec,
                input_preview: preview(input, PREVIEW_CHARS),
                output_preview: preview(output, PREVIEW_CHARS),
                input: input.to_string(),
                output: output.to_string(),
                timestamp: now,
            },
        );
        self.entries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Write the history back to its file, creating parent directories.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory {}", parent.display())
            })?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write history file {}", self.path.display()))?;
        Ok(())
    }
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
