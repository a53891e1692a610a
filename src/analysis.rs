// SPDX-License-Identifier: MIT
//! Lifecycle transition: archive the current interview and reset.

use anyhow::Result;
use chrono::Local;
use tracing::info;

use crate::record::{InterviewRecord, Sentiment};
use crate::store::RecordStore;

/// Constant response message for a completed transition. Sent even when
/// the store held nothing to archive.
pub const NEW_ANALYSIS_MESSAGE: &str =
    "Ready for new analysis. Previous data moved to history.";

/// Outcome of [`start_new_analysis`].
#[derive(Debug, Clone)]
pub struct NewAnalysis {
    /// Id assigned to the archived record, `None` if the store was empty.
    pub archived_id: Option<String>,
    /// The placeholder now installed as the current record.
    pub current: InterviewRecord,
}

/// The fresh record installed after a transition: everything zeroed or
/// pending, dated today.
pub fn placeholder_record() -> InterviewRecord {
    InterviewRecord {
        id: None,
        title: "New Interview Analysis".into(),
        position: "Pending Analysis".into(),
        date: Local::now().format("%B %-d, %Y").to_string(),
        duration: "0 minutes".into(),
        sentiment: Sentiment::default(),
        improvement_areas: Vec::new(),
        common_questions: Vec::new(),
        transcript: "Start a new interview to generate a transcript.".into(),
        image_path: None,
    }
}

/// Archive whatever is current (if anything) and install a placeholder.
/// Each call that finds a current record produces exactly one history
/// entry with a unique id.
pub async fn start_new_analysis(store: &dyn RecordStore) -> Result<NewAnalysis> {
    let placeholder = placeholder_record();
    let archived_id = store.archive_current_and_reset(placeholder.clone()).await?;

    match &archived_id {
        Some(id) => info!(id = %id, "interview moved to history"),
        None => info!("no current interview to archive; placeholder installed"),
    }

    Ok(NewAnalysis {
        archived_id,
        current: placeholder,
    })
}
