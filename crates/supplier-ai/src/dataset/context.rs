use super::DatasetError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical contract with a supplier, as scored at the time by the
/// engine and by a human reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractSnapshot {
    pub contract_date: NaiveDate,
    pub ai_score: f64,
    pub human_score: f64,
}

/// A recorded disruption affecting one or more supplier locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionEvent {
    pub description: String,
    pub affected_locations: Vec<String>,
    pub severity: EventSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSeverity {
    Low,
    Moderate,
    High,
    Critical,
}

/// Historical context for one supplier. Empty vectors are valid: a
/// supplier without contract history simply has no context-derived
/// confidence signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierContext {
    pub contracts: Vec<ContractSnapshot>,
    pub events: Vec<DisruptionEvent>,
}

impl SupplierContext {
    /// Mean absolute divergence between engine and human contract scores.
    pub fn conflict_index(&self) -> Option<f64> {
        if self.contracts.is_empty() {
            return None;
        }
        let ai: f64 =
            self.contracts.iter().map(|c| c.ai_score).sum::<f64>() / self.contracts.len() as f64;
        let human: f64 =
            self.contracts.iter().map(|c| c.human_score).sum::<f64>() / self.contracts.len() as f64;
        Some((ai - human).abs())
    }

    /// Severity-weighted exposure to recorded disruptions at one
    /// location, capped at 100. Critical events weigh 25, High events
    /// 15; lower severities carry no weight.
    pub fn disruption_exposure(&self, location: &str) -> f64 {
        let mut critical = 0u32;
        let mut high = 0u32;
        for event in self.events.iter().filter(|event| {
            event
                .affected_locations
                .iter()
                .any(|affected| affected.eq_ignore_ascii_case(location))
        }) {
            match event.severity {
                EventSeverity::Critical => critical += 1,
                EventSeverity::High => high += 1,
                EventSeverity::Low | EventSeverity::Moderate => {}
            }
        }
        f64::from(critical * 25 + high * 15).min(100.0)
    }
}

/// Supplies historical contracts and disruption events for a supplier.
/// The relational-store deployment implements this against its contract
/// and event tables; tests use the in-memory variant.
#[async_trait]
pub trait ContextSource: Send + Sync {
    async fn history(&self, supplier_name: &str) -> Result<SupplierContext, DatasetError>;
}
