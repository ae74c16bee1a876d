use super::EngineError;
use crate::dataset::SupplierRecord;
use regex::Regex;
use std::sync::OnceLock;

/// Fixed weighting of the composite quality/value score. The weights are
/// part of the engine's published contract and must sum to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub quality: f64,
    pub reputation: f64,
    pub financial: f64,
    pub delivery: f64,
    pub serviceability: f64,
    pub flexibility: f64,
    pub assets: f64,
}

pub const COMPOSITE_WEIGHTS: ScoreWeights = ScoreWeights {
    quality: 0.25,
    reputation: 0.20,
    financial: 0.15,
    delivery: 0.15,
    serviceability: 0.10,
    flexibility: 0.10,
    assets: 0.05,
};

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.quality
            + self.reputation
            + self.financial
            + self.delivery
            + self.serviceability
            + self.flexibility
            + self.assets
    }
}

/// Fallback strength when the free-text revenue statement cannot be
/// parsed. Text-derived estimates may degrade gracefully; direct numeric
/// fields never may.
pub const NEUTRAL_BUSINESS_STRENGTH: f64 = 50.0;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn require(
    value: Option<f64>,
    supplier: &str,
    field: &'static str,
) -> Result<f64, EngineError> {
    value.ok_or_else(|| EngineError::InsufficientData {
        supplier: supplier.to_string(),
        field,
    })
}

pub(crate) fn require_delivery_days(record: &SupplierRecord) -> Result<u32, EngineError> {
    record
        .delivery_time_days
        .ok_or_else(|| EngineError::InsufficientData {
            supplier: record.name.clone(),
            field: "delivery_time_days",
        })
}

/// Delivery contribution on the 0-100 scale. The factor of 2 caps the
/// penalty: lead times past 50 days bottom out at zero instead of driving
/// the composite negative.
pub(crate) fn normalized_delivery(delivery_days: u32) -> f64 {
    (100.0 - 2.0 * f64::from(delivery_days)).max(0.0)
}

/// Composite quality/value score in [0, 100], rounded to two decimals.
///
/// Deterministic: identical input always yields identical output. Any
/// absent weighted field is an `InsufficientData` error, never a zero.
pub fn composite_score(record: &SupplierRecord) -> Result<f64, EngineError> {
    let name = record.name.as_str();
    let quality = require(record.quality_score, name, "quality_score")?;
    let reputation = require(record.reputation, name, "reputation_and_competence")?;
    let financial = require(record.financial_condition, name, "financial_condition")?;
    let serviceability = require(
        record.serviceability,
        name,
        "serviceability_and_communicativeness",
    )?;
    let flexibility = require(record.flexibility, name, "flexibility")?;
    let assets = require(record.asset_condition, name, "supplier_asset_condition")?;
    let delivery = normalized_delivery(require_delivery_days(record)?);

    let weights = COMPOSITE_WEIGHTS;
    let score = quality * weights.quality
        + reputation * weights.reputation
        + financial * weights.financial
        + delivery * weights.delivery
        + serviceability * weights.serviceability
        + flexibility * weights.flexibility
        + assets * weights.assets;

    Ok(round2(score))
}

/// Logistics sub-score used by the risk estimator (not part of the
/// composite): a base drawn from the connectivity descriptor, reduced by
/// lead time, clamped to [0, 100].
pub fn logistics_score(record: &SupplierRecord) -> Result<f64, EngineError> {
    let delivery_days = require_delivery_days(record)?;
    let descriptor = record.traffic_connections.as_str();

    let base = if descriptor.contains("Excellent") {
        95.0
    } else if descriptor.contains("Good") {
        85.0
    } else if descriptor.contains("Near") {
        75.0
    } else {
        65.0
    };

    Ok((base - 1.5 * f64::from(delivery_days)).clamp(0.0, 100.0))
}

fn crore_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"₹\s*([0-9]+(?:\.[0-9]+)?)\s*[Cc]rore").expect("crore pattern compiles")
    })
}

/// Normalized business strength parsed from a free-text revenue
/// statement. Unparseable text falls back to the neutral default.
pub fn business_strength(business_results: &str) -> f64 {
    match crore_pattern()
        .captures(business_results)
        .and_then(|captures| captures.get(1))
        .and_then(|amount| amount.as_str().parse::<f64>().ok())
    {
        Some(crores) => ((crores / 50.0) * 10.0).min(100.0),
        None => NEUTRAL_BUSINESS_STRENGTH,
    }
}
