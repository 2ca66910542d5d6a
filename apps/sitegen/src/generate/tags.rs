//! Tag index derivation.
//!
//! The index is rebuilt from the job collection on every run, never stored.
//! Tags group by their normalized (trimmed, lower-cased) form; the display
//! label keeps the first-seen original casing.

use std::collections::HashMap;

use crate::model::Job;

/// One distinct tag across the job collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Normalized form, used as the filter key in the rendered index.
    pub key: String,
    /// First-seen original casing, used for display.
    pub label: String,
    /// Number of occurrences across all qualifying jobs.
    pub count: usize,
}

/// Distinct tags sorted alphabetically by display label (case-insensitive,
/// which is exactly the order of the normalized keys).
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    pub entries: Vec<TagEntry>,
}

impl TagIndex {
    /// Derives the index from the given jobs. Callers pass only the jobs
    /// that reached output (non-empty `id`); order of derivation does not
    /// affect counts, only which casing becomes the display label.
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let mut by_key: HashMap<String, TagEntry> = HashMap::new();

        for job in jobs {
            for tag in &job.tags {
                let key = normalize_tag(tag);
                by_key
                    .entry(key.clone())
                    .and_modify(|e| e.count += 1)
                    .or_insert_with(|| TagEntry {
                        key,
                        label: tag.clone(),
                        count: 1,
                    });
            }
        }

        let mut entries: Vec<TagEntry> = by_key.into_values().collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        TagIndex { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalized (grouping) form of a tag.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}
