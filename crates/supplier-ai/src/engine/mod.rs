//! The supplier intelligence engine: retrieval, scoring, comparison, and
//! trend prediction over a single-flight-loaded supplier dataset.

mod analysis;
mod comparison;
mod intent;
mod prediction;
mod retrieval;
pub mod router;
mod scoring;

#[cfg(test)]
pub(crate) mod tests;

pub use analysis::{
    AnalysisRecommendation, CostReliability, DeliveryConsistency, FinancialStrength,
    KeyPerformance, OperationalRisk, SupplierAnalysis, SupplierOverview, TrafficRisk,
    ANALYSIS_CONFIDENCE,
};
pub use comparison::{ComparisonDeltas, ComparisonResult, CLOSE_CALL_THRESHOLD};
pub use prediction::{
    ConfidencePolicy, PredictionResult, TrendLabel, DATASET_PREDICTION_CONFIDENCE,
};
pub use retrieval::NameMatching;
pub use scoring::{
    business_strength, composite_score, logistics_score, ScoreWeights, COMPOSITE_WEIGHTS,
    NEUTRAL_BUSINESS_STRENGTH,
};

use crate::dataset::{ContextSource, DatasetError, SupplierDataset, SupplierRecord};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The record provider failed to load; no verified data exists for
    /// this request. Never answered with stale or synthetic records.
    #[error("no verified supplier data available: {0}")]
    DataUnavailable(#[from] DatasetError),
    #[error("no verified supplier found matching '{name}'")]
    NotFound { name: String },
    #[error("supplier name '{name}' is ambiguous: {candidates} records match")]
    Ambiguous { name: String, candidates: usize },
    /// A required numeric field is absent on an otherwise-found record.
    /// Defaulting it to zero would invert scoring comparisons.
    #[error("supplier '{supplier}' has no verified value for {field}")]
    InsufficientData {
        supplier: String,
        field: &'static str,
    },
}

/// Tuning knobs declared per deployment rather than baked into the code:
/// the name-lookup ambiguity policy and the prediction confidence formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    pub name_matching: NameMatching,
    pub confidence: ConfidencePolicy,
}

/// Read-only façade over one loaded dataset, plus optional historical
/// context. Every entry point recomputes its derived values from the
/// current records; nothing derived is cached.
pub struct SupplierIntelligence {
    dataset: Arc<SupplierDataset>,
    context: Option<Arc<dyn ContextSource>>,
    options: EngineOptions,
}

impl SupplierIntelligence {
    pub fn new(dataset: Arc<SupplierDataset>, options: EngineOptions) -> Self {
        Self {
            dataset,
            context: None,
            options,
        }
    }

    pub fn with_context(mut self, context: Arc<dyn ContextSource>) -> Self {
        self.context = Some(context);
        self
    }

    /// Rank suppliers against a free-text query. An empty query returns
    /// the first `top_k` records in provider order.
    pub async fn retrieve(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SupplierRecord>, EngineError> {
        let records = self.dataset.ensure_loaded().await?;
        let hits = retrieval::retrieve(&records, query, top_k);
        debug!(query, top_k, hits = hits.len(), "supplier retrieval");
        Ok(hits)
    }

    /// Resolve one supplier by name under the configured match policy.
    pub async fn find_supplier(&self, name: &str) -> Result<SupplierRecord, EngineError> {
        let records = self.dataset.ensure_loaded().await?;
        retrieval::find_by_name(&records, name, self.options.name_matching).cloned()
    }

    /// Composite score for a named supplier.
    pub async fn score_supplier(&self, name: &str) -> Result<f64, EngineError> {
        let record = self.find_supplier(name).await?;
        scoring::composite_score(&record)
    }

    /// Pairwise comparison with per-dimension winners and a verdict.
    pub async fn compare(
        &self,
        name_a: &str,
        name_b: &str,
    ) -> Result<ComparisonResult, EngineError> {
        let records = self.dataset.ensure_loaded().await?;
        let record_a = retrieval::find_by_name(&records, name_a, self.options.name_matching)?;
        let record_b = retrieval::find_by_name(&records, name_b, self.options.name_matching)?;
        comparison::compare(record_a, record_b)
    }

    /// Six-month risk and trend estimate for a named supplier. When a
    /// context source is configured its history always informs the risk
    /// factors; the confidence policy decides the confidence formula
    /// alone.
    pub async fn predict(&self, name: &str) -> Result<PredictionResult, EngineError> {
        let record = self.find_supplier(name).await?;
        let context = match &self.context {
            Some(source) => Some(source.history(&record.name).await?),
            None => None,
        };
        prediction::predict(&record, context.as_ref(), self.options.confidence)
    }

    /// Single best supplier for a criteria string; `NotFound` when no
    /// record carries the relevant verified field.
    pub async fn best_supplier(&self, criteria: &str) -> Result<SupplierRecord, EngineError> {
        let records = self.dataset.ensure_loaded().await?;
        retrieval::best_supplier(&records, criteria)
            .cloned()
            .ok_or_else(|| EngineError::NotFound {
                name: criteria.to_string(),
            })
    }

    /// Full seven-section analysis for a named supplier.
    pub async fn analyze(&self, name: &str) -> Result<SupplierAnalysis, EngineError> {
        let record = self.find_supplier(name).await?;
        analysis::analyze(&record)
    }

    /// Deterministic, data-grounded chat answer.
    pub async fn chat_response(&self, query: &str) -> Result<String, EngineError> {
        if query.trim().len() < 3 {
            return Ok(analysis::NO_DATA_REPLY.to_string());
        }
        let retrieved = self.retrieve(query, 5).await?;
        Ok(analysis::chat_reply(query, &retrieved))
    }
}
