// SPDX-License-Identifier: MIT
//! In-memory [`RecordStore`] backend.
//!
//! All state lives behind one `tokio::sync::RwLock`; the archive step
//! takes the write lock once, so a concurrent reader can never observe a
//! half-finished transition and two concurrent archives can never be
//! assigned the same id.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use super::RecordStore;
use crate::record::{HistorySummary, InterviewRecord};
use crate::seed;

struct StoreInner {
    current: Option<InterviewRecord>,
    /// Most-recent-first; entries are immutable once pushed.
    history: Vec<InterviewRecord>,
    /// Millisecond value of the last archive id handed out. Forced
    /// strictly monotonic so same-millisecond archives cannot collide.
    last_id_ms: i64,
}

impl StoreInner {
    /// Mint the next `interview-<millis>` id. Must run under the write
    /// lock; monotonicity is guaranteed by `last_id_ms`, not the clock.
    fn next_archive_id(&mut self) -> String {
        let ms = Utc::now().timestamp_millis().max(self.last_id_ms + 1);
        self.last_id_ms = ms;
        format!("interview-{ms}")
    }
}

pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl MemoryStore {
    /// An empty store: no current record, no history.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                current: None,
                history: Vec::new(),
                last_id_ms: 0,
            }),
        }
    }

    /// A store preloaded with the demo dataset.
    pub fn seeded() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                current: Some(seed::demo_current()),
                history: seed::demo_history(),
                last_id_ms: 0,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn current(&self) -> Result<Option<InterviewRecord>> {
        Ok(self.inner.read().await.current.clone())
    }

    async fn history_summaries(&self) -> Result<Vec<HistorySummary>> {
        let inner = self.inner.read().await;
        Ok(inner.history.iter().map(InterviewRecord::summary).collect())
    }

    async fn history_detail(&self, id: &str) -> Result<Option<InterviewRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .history
            .iter()
            .find(|rec| rec.id.as_deref() == Some(id))
            .cloned())
    }

    async fn replace_current(&self, record: InterviewRecord) -> Result<()> {
        self.inner.write().await.current = Some(record);
        Ok(())
    }

    async fn archive_current_and_reset(&self, fresh: InterviewRecord) -> Result<Option<String>> {
        let mut inner = self.inner.write().await;

        let archived_id = match inner.current.take() {
            Some(mut record) => {
                let id = inner.next_archive_id();
                record.id = Some(id.clone());
                record.image_path = None;
                inner.history.insert(0, record);
                info!(id = %id, history_len = inner.history.len(), "current interview archived");
                Some(id)
            }
            None => None,
        };

        inner.current = Some(fresh);
        Ok(archived_id)
    }
}
