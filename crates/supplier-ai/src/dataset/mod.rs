//! Supplier record providers and the single-flight dataset cache.

mod context;
mod csv_source;
mod memory;
mod record;

pub use context::{
    ContextSource, ContractSnapshot, DisruptionEvent, EventSeverity, SupplierContext,
};
pub use csv_source::CsvRecordSource;
pub use memory::{InMemoryContextSource, InMemoryRecordSource};
pub use record::SupplierRecord;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read supplier dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed supplier dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("record source failure: {0}")]
    Source(String),
}

/// Abstraction over the supplier dataset origin (CSV file, relational
/// store, fixture). Implementations perform the actual fetch; callers go
/// through [`SupplierDataset`] so the fetch happens at most once.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<SupplierRecord>, DatasetError>;
}

/// Caller-owned, load-once view of a record source.
///
/// The first `ensure_loaded` performs the fetch; concurrent first callers
/// collapse into that single fetch and every later call is a cheap read.
/// A failed load is not cached, so a transient source failure can be
/// retried by the next caller.
pub struct SupplierDataset {
    source: Arc<dyn RecordSource>,
    records: OnceCell<Arc<Vec<SupplierRecord>>>,
}

impl SupplierDataset {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            records: OnceCell::new(),
        }
    }

    pub async fn ensure_loaded(&self) -> Result<Arc<Vec<SupplierRecord>>, DatasetError> {
        let records = self
            .records
            .get_or_try_init(|| async {
                let records = self.source.fetch_all().await?;
                info!(count = records.len(), "supplier dataset loaded");
                Ok::<_, DatasetError>(Arc::new(records))
            })
            .await?;
        Ok(Arc::clone(records))
    }
}
