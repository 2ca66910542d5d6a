//! View model types parsed from the job-listing JSON document.
//!
//! Every field except `id` is optional with a documented fallback, so the
//! deserializers here are deliberately tolerant: absent strings become empty,
//! non-string tag entries are dropped, and a missing `jobs` array is treated
//! as an empty collection.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level input document: `{ "jobs": [ ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewModel {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// One job listing as parsed from the view model.
///
/// `id` determines the detail-page file name and must be non-empty for the
/// job to reach output; the generator skips (and logs) records without it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "fullDescription")]
    pub full_description: String,
    /// ISO-8601 date-time string. Kept raw: sorting is lexicographic (which
    /// is correct for ISO-8601) and display formatting parses on demand.
    #[serde(default)]
    pub timestamp: String,
    /// Trimmed, non-empty tag strings in original casing. Non-string entries
    /// in the source array are ignored rather than failing the parse.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

impl Job {
    /// Effective description text: `fullDescription`, falling back to
    /// `description`, then to the empty string.
    pub fn effective_description(&self) -> &str {
        if !self.full_description.is_empty() {
            &self.full_description
        } else {
            &self.description
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<serde_json::Value> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|v| v.as_str().map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty())
        .collect())
}
