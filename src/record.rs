//! Domain types for the dashboard wire format.
//!
//! The API speaks camelCase JSON; every struct here derives the serde
//! renames so handlers never touch field names by hand. `id` and
//! `image_path` are omitted from the output entirely when absent:
//! the live record has neither until it is archived.

use serde::{Deserialize, Serialize};

/// One interview analysis, either the live ("current") record or an
/// archived history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    /// Assigned by the store when the record enters history; the live
    /// record carries no id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub position: String,
    pub date: String,
    pub duration: String,
    pub sentiment: Sentiment,
    pub improvement_areas: Vec<String>,
    pub common_questions: Vec<String>,
    pub transcript: String,
    /// Static asset reference for seeded history entries; cleared on archive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// Sentiment split in whole percent. The three fields are not required
/// to sum to 100; the upstream analysis decides the split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Projection of an archived record for the history list. Hides the
/// heavyweight fields (sentiment, transcript, question lists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub id: String,
    pub title: String,
    pub position: String,
    pub date: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl InterviewRecord {
    /// Build the history-list projection of this record.
    ///
    /// Only archived records are summarized, so `id` is always present by
    /// the time this runs; an empty string would indicate a store bug.
    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            id: self.id.clone().unwrap_or_default(),
            title: self.title.clone(),
            position: self.position.clone(),
            date: self.date.clone(),
            duration: self.duration.clone(),
            image_path: self.image_path.clone(),
        }
    }
}
