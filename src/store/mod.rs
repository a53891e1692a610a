// SPDX-License-Identifier: MIT
//! Record store: the single owner of mutable dashboard state.
//!
//! Handlers depend on the [`RecordStore`] trait, not on a concrete
//! backend, so the in-memory implementation can be swapped for file or
//! SQL persistence without touching the HTTP layer. [`MemoryStore`] is
//! the only backend today; state is lost on restart by design.

pub mod memory;

pub use memory::MemoryStore;

use anyhow::Result;
use async_trait::async_trait;

use crate::record::{HistorySummary, InterviewRecord};

/// Storage interface over the current interview and its history.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The live record, or `None` if the store started empty.
    async fn current(&self) -> Result<Option<InterviewRecord>>;

    /// History projections, most-recent-first. Empty when nothing has
    /// been archived.
    async fn history_summaries(&self) -> Result<Vec<HistorySummary>>;

    /// Full record for a history id; `Ok(None)` when the id is unknown.
    async fn history_detail(&self, id: &str) -> Result<Option<InterviewRecord>>;

    /// Replace the live record wholesale. The store never mutates
    /// individual fields.
    async fn replace_current(&self, record: InterviewRecord) -> Result<()>;

    /// Archive the live record (assigning it a fresh unique id and
    /// clearing its image reference), then install `fresh` as current.
    /// The whole step is atomic with respect to every other store call.
    ///
    /// Returns the id assigned to the archived record, or `None` when
    /// there was no live record to archive.
    async fn archive_current_and_reset(&self, fresh: InterviewRecord) -> Result<Option<String>>;
}
