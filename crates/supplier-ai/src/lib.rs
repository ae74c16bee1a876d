//! Supplier intelligence engine: verified-data retrieval, deterministic
//! composite scoring, pairwise comparison, and heuristic trend prediction.
//!
//! Every number the engine reports is either computed from fields the
//! dataset actually carries or flagged as absent. No numeric field is ever
//! substituted with a default or an average.

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use dataset::{
    CsvRecordSource, DatasetError, InMemoryRecordSource, RecordSource, SupplierDataset,
    SupplierRecord,
};
pub use engine::router::supplier_router;
pub use engine::{
    ComparisonResult, ConfidencePolicy, EngineError, EngineOptions, NameMatching,
    PredictionResult, SupplierAnalysis, SupplierIntelligence, TrendLabel,
};
