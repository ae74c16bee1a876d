use super::context::{ContextSource, SupplierContext};
use super::record::SupplierRecord;
use super::{DatasetError, RecordSource};
use async_trait::async_trait;
use std::collections::HashMap;

/// Fixture-backed record source for tests and CLI demos. Records are
/// served in insertion order, which the retrieval fallback and stable
/// tie-breaks depend on.
#[derive(Default, Clone)]
pub struct InMemoryRecordSource {
    records: Vec<SupplierRecord>,
}

impl InMemoryRecordSource {
    pub fn new(records: Vec<SupplierRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn fetch_all(&self) -> Result<Vec<SupplierRecord>, DatasetError> {
        Ok(self.records.clone())
    }
}

/// Context source keyed by exact supplier name. Unknown suppliers get an
/// empty context, not an error: missing history is a valid state.
#[derive(Default, Clone)]
pub struct InMemoryContextSource {
    histories: HashMap<String, SupplierContext>,
}

impl InMemoryContextSource {
    pub fn new(histories: HashMap<String, SupplierContext>) -> Self {
        Self { histories }
    }

    pub fn with_history(mut self, supplier: impl Into<String>, context: SupplierContext) -> Self {
        self.histories.insert(supplier.into(), context);
        self
    }
}

#[async_trait]
impl ContextSource for InMemoryContextSource {
    async fn history(&self, supplier_name: &str) -> Result<SupplierContext, DatasetError> {
        Ok(self
            .histories
            .get(supplier_name)
            .cloned()
            .unwrap_or_default())
    }
}
