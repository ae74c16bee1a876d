use super::scoring::{composite_score, require, require_delivery_days, round2};
use super::EngineError;
use crate::dataset::{SupplierContext, SupplierRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed confidence for dataset-only predictions. The trend heuristic is
/// explainable but unverified, so the engine never reports it as more
/// certain than this.
pub const DATASET_PREDICTION_CONFIDENCE: f64 = 82.0;

/// Which confidence formula is in effect. The two deployments differ and
/// must never be mixed silently: dataset-only installs report the fixed
/// constant, context-backed installs derive confidence from contract
/// volume and AI/human score agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidencePolicy {
    #[default]
    Fixed,
    ContextDerived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TrendLabel {
    Improving,
    Stable,
    Declining,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendLabel::Improving => write!(f, "Improving"),
            TrendLabel::Stable => write!(f, "Stable"),
            TrendLabel::Declining => write!(f, "Declining"),
        }
    }
}

/// Forward-looking six-month estimate for one supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub supplier: String,
    pub current_performance: f64,
    pub predicted_trend: TrendLabel,
    pub risk_factors: Vec<String>,
    pub confidence: f64,
    pub confidence_policy: ConfidencePolicy,
    pub recommendation: String,
}

/// Every applicable risk rule fires; the rules are independent, not a
/// first-match chain. Recorded disruption events at the supplier's
/// location add a factor on top of the dataset rules.
fn risk_factors(
    record: &SupplierRecord,
    context: Option<&SupplierContext>,
) -> Result<Vec<String>, EngineError> {
    let name = record.name.as_str();
    let delivery_days = require_delivery_days(record)?;
    let financial = require(record.financial_condition, name, "financial_condition")?;
    let assets = require(record.asset_condition, name, "supplier_asset_condition")?;

    let mut factors = Vec::new();
    if delivery_days > 20 {
        factors.push("Extended delivery times may impact reliability".to_string());
    }
    if financial < 75.0 {
        factors.push("Financial stability concerns".to_string());
    }
    if assets < 70.0 {
        factors.push("Asset condition requires monitoring".to_string());
    }
    if record.traffic_connections.contains("Moderate") {
        factors.push("Traffic connectivity constraints".to_string());
    }
    if let Some(context) = context {
        if context.disruption_exposure(&record.location) > 0.0 {
            factors.push("Active disruption events in the supplier's region".to_string());
        }
    }

    if factors.is_empty() {
        factors.push("No significant risks identified".to_string());
    }
    Ok(factors)
}

fn trend(score: f64, financial: f64) -> TrendLabel {
    if score > 85.0 && financial > 85.0 {
        TrendLabel::Improving
    } else if score < 70.0 || financial < 70.0 {
        TrendLabel::Declining
    } else {
        TrendLabel::Stable
    }
}

/// Context-derived confidence: contract volume (5 points per contract,
/// capped at 100) averaged with score consistency (100 minus twice the
/// AI/human divergence, floored at zero).
pub(crate) fn context_confidence(context: &SupplierContext) -> f64 {
    let data_volume = (context.contracts.len() as f64 * 5.0).min(100.0);
    let consistency = (100.0 - 2.0 * context.conflict_index().unwrap_or(0.0)).max(0.0);
    round2((data_volume + consistency) / 2.0)
}

fn recommendation(score: f64, trend: TrendLabel, risk_count: usize) -> String {
    if score > 85.0 && trend == TrendLabel::Improving {
        return "Strong candidate for long-term partnership. Consider increasing order volume."
            .to_string();
    }
    if score > 75.0 && risk_count <= 1 {
        return "Reliable supplier with stable performance. Suitable for ongoing procurement."
            .to_string();
    }
    if trend == TrendLabel::Declining || risk_count > 2 {
        return "Exercise caution. Consider alternative suppliers or implement closer monitoring."
            .to_string();
    }
    "Acceptable performance. Regular monitoring recommended for sustained quality.".to_string()
}

pub(crate) fn predict(
    record: &SupplierRecord,
    context: Option<&SupplierContext>,
    policy: ConfidencePolicy,
) -> Result<PredictionResult, EngineError> {
    let score = composite_score(record)?;
    let financial = require(
        record.financial_condition,
        record.name.as_str(),
        "financial_condition",
    )?;
    let factors = risk_factors(record, context)?;
    let trend = trend(score, financial);

    // A factor list consisting solely of the no-risk marker counts as
    // zero risks for the recommendation tiering.
    let risk_count = if factors.first().map(String::as_str) == Some("No significant risks identified")
    {
        0
    } else {
        factors.len()
    };

    let confidence = match (policy, context) {
        (ConfidencePolicy::Fixed, _) => DATASET_PREDICTION_CONFIDENCE,
        (ConfidencePolicy::ContextDerived, Some(context)) => context_confidence(context),
        (ConfidencePolicy::ContextDerived, None) => {
            context_confidence(&SupplierContext::default())
        }
    };

    Ok(PredictionResult {
        supplier: record.name.clone(),
        current_performance: score,
        predicted_trend: trend,
        risk_factors: factors,
        confidence,
        confidence_policy: policy,
        recommendation: recommendation(score, trend, risk_count),
    })
}
