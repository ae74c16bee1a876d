use super::scoring::{
    business_strength, composite_score, logistics_score, require, require_delivery_days, round2,
};
use super::EngineError;
use crate::dataset::SupplierRecord;
use serde::{Deserialize, Serialize};

/// Confidence attached to a single-supplier analysis: every figure in it
/// is read or computed directly from verified fields.
pub const ANALYSIS_CONFIDENCE: f64 = 95.0;

/// Full seven-section analysis of one supplier, shaped for the decision
/// dashboard and chat surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierAnalysis {
    pub overview: SupplierOverview,
    pub key_performance: KeyPerformance,
    pub cost_reliability: CostReliability,
    pub operational_risk: OperationalRisk,
    pub financial_strength: FinancialStrength,
    pub recommendation: AnalysisRecommendation,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOverview {
    pub name: String,
    pub location: String,
    /// Left absent when the dataset carries no verified headcount.
    pub employees: Option<u32>,
    pub business_results: String,
    pub traffic_connectivity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPerformance {
    pub quality_score: f64,
    pub quantity_capacity: f64,
    pub serviceability: f64,
    pub reputation: f64,
    pub flexibility: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReliability {
    pub price_per_unit: f64,
    pub delivery_time_days: u32,
    pub payment_terms: String,
    pub cost_reliability_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficRisk {
    Low,
    #[serde(rename = "Low-Moderate")]
    LowModerate,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryConsistency {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalRisk {
    pub traffic_risk: TrafficRisk,
    pub delivery_consistency: DeliveryConsistency,
    pub logistics_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialStrength {
    pub financial_condition: f64,
    pub asset_condition: f64,
    pub business_strength: f64,
    pub overall_stability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecommendation {
    pub overall_score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub best_use_case: String,
}

fn traffic_risk(descriptor: &str) -> TrafficRisk {
    if descriptor.contains("Excellent") {
        TrafficRisk::Low
    } else if descriptor.contains("Good") {
        TrafficRisk::LowModerate
    } else if descriptor.contains("Near") {
        TrafficRisk::Moderate
    } else {
        TrafficRisk::High
    }
}

fn delivery_consistency(delivery_days: u32) -> DeliveryConsistency {
    if delivery_days <= 7 {
        DeliveryConsistency::High
    } else if delivery_days <= 15 {
        DeliveryConsistency::Moderate
    } else {
        DeliveryConsistency::Low
    }
}

fn strengths(record: &SupplierRecord) -> Vec<String> {
    let mut strengths = Vec::new();
    if record.quality_score.unwrap_or(0.0) > 80.0 {
        strengths.push("Exceptional quality standards".to_string());
    }
    if record.delivery_time_days.map_or(false, |days| days <= 5) {
        strengths.push("Fast delivery capability".to_string());
    }
    if record.financial_condition.unwrap_or(0.0) > 85.0 {
        strengths.push("Strong financial position".to_string());
    }
    if record.reputation.unwrap_or(0.0) > 80.0 {
        strengths.push("Excellent market reputation".to_string());
    }
    if record.quantity_capacity.unwrap_or(0.0) > 100_000.0 {
        strengths.push("High volume capacity".to_string());
    }
    if strengths.is_empty() {
        strengths.push("Balanced performance across metrics".to_string());
    }
    strengths
}

fn weaknesses(record: &SupplierRecord) -> Vec<String> {
    let mut weaknesses = Vec::new();
    if record.quality_score.map_or(false, |quality| quality < 70.0) {
        weaknesses.push("Quality concerns".to_string());
    }
    if record.delivery_time_days.map_or(false, |days| days > 20) {
        weaknesses.push("Slow delivery times".to_string());
    }
    if record
        .financial_condition
        .map_or(false, |financial| financial < 70.0)
    {
        weaknesses.push("Financial stability risk".to_string());
    }
    if record.price_per_unit.map_or(false, |price| price > 15_000.0) {
        weaknesses.push("Premium pricing".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("No significant weaknesses identified".to_string());
    }
    weaknesses
}

fn best_use_case(record: &SupplierRecord) -> String {
    let quality = record.quality_score.unwrap_or(0.0);
    let price = record.price_per_unit.unwrap_or(0.0);
    let delivery = record.delivery_time_days.unwrap_or(u32::MAX);
    let capacity = record.quantity_capacity.unwrap_or(0.0);
    let financial = record.financial_condition.unwrap_or(0.0);
    let reputation = record.reputation.unwrap_or(0.0);

    if quality > 90.0 && price > 10_000.0 {
        "Premium quality requirements with budget flexibility".to_string()
    } else if delivery <= 5 && quality > 80.0 {
        "Urgent procurement with quality assurance".to_string()
    } else if capacity > 150_000.0 {
        "Large-scale bulk procurement".to_string()
    } else if price < 5_000.0 && record.price_per_unit.is_some() && quality > 70.0 {
        "Cost-effective procurement with acceptable quality".to_string()
    } else if financial > 90.0 && reputation > 85.0 {
        "Long-term strategic partnerships".to_string()
    } else {
        "General procurement requirements".to_string()
    }
}

pub(crate) fn analyze(record: &SupplierRecord) -> Result<SupplierAnalysis, EngineError> {
    let name = record.name.as_str();
    let overall_score = composite_score(record)?;
    let quality = require(record.quality_score, name, "quality_score")?;
    let capacity = require(record.quantity_capacity, name, "quantity_capacity")?;
    let serviceability = require(
        record.serviceability,
        name,
        "serviceability_and_communicativeness",
    )?;
    let reputation = require(record.reputation, name, "reputation_and_competence")?;
    let flexibility = require(record.flexibility, name, "flexibility")?;
    let financial = require(record.financial_condition, name, "financial_condition")?;
    let assets = require(record.asset_condition, name, "supplier_asset_condition")?;
    let price = require(record.price_per_unit, name, "price_per_unit_inr")?;
    let delivery_days = require_delivery_days(record)?;

    if quality == 0.0 {
        // cost/quality ratio is undefined; a zero quality rating cannot
        // anchor a verified ratio
        return Err(EngineError::InsufficientData {
            supplier: name.to_string(),
            field: "quality_score",
        });
    }

    Ok(SupplierAnalysis {
        overview: SupplierOverview {
            name: record.name.clone(),
            location: record.location.clone(),
            employees: record.employees,
            business_results: record.business_results.clone(),
            traffic_connectivity: record.traffic_connections.clone(),
        },
        key_performance: KeyPerformance {
            quality_score: quality,
            quantity_capacity: capacity,
            serviceability,
            reputation,
            flexibility,
        },
        cost_reliability: CostReliability {
            price_per_unit: price,
            delivery_time_days: delivery_days,
            payment_terms: record.payment_terms.clone(),
            cost_reliability_ratio: round2(price / quality),
        },
        operational_risk: OperationalRisk {
            traffic_risk: traffic_risk(&record.traffic_connections),
            delivery_consistency: delivery_consistency(delivery_days),
            logistics_score: logistics_score(record)?,
        },
        financial_strength: FinancialStrength {
            financial_condition: financial,
            asset_condition: assets,
            business_strength: business_strength(&record.business_results),
            overall_stability: round2((financial + assets) / 2.0),
        },
        recommendation: AnalysisRecommendation {
            overall_score,
            strengths: strengths(record),
            weaknesses: weaknesses(record),
            best_use_case: best_use_case(record),
        },
        confidence_score: ANALYSIS_CONFIDENCE,
    })
}

pub(crate) const NO_DATA_REPLY: &str = "No verified supplier data found for this request.";

/// Deterministic chat answer grounded in retrieval and scoring. The
/// response never cites a number that was not read or computed from the
/// loaded records.
pub(crate) fn chat_reply(query: &str, retrieved: &[SupplierRecord]) -> String {
    let query_lower = query.trim().to_lowercase();
    if query_lower.len() < 3 || retrieved.is_empty() {
        return NO_DATA_REPLY.to_string();
    }

    if query_lower.contains("best") || query_lower.contains("recommend") {
        let best = &retrieved[0];
        if let (Ok(score), Some(quality), Some(days), Some(price)) = (
            composite_score(best),
            best.quality_score,
            best.delivery_time_days,
            best.price_per_unit,
        ) {
            return format!(
                "Based on retrieved data, {} is recommended with an overall score of \
                 {score}/100. Quality: {quality}, Delivery: {days} days, Price: ₹{price}/unit.",
                best.name
            );
        }
        return NO_DATA_REPLY.to_string();
    }

    if query_lower.contains("compare") && retrieved.len() >= 2 {
        let (first, second) = (&retrieved[0], &retrieved[1]);
        if let (Ok(score_a), Ok(score_b)) = (composite_score(first), composite_score(second)) {
            let quality_gap = match (first.quality_score, second.quality_score) {
                (Some(a), Some(b)) => format!("{:.2}", (a - b).abs()),
                _ => "unavailable".to_string(),
            };
            return format!(
                "Comparison: {} (Score: {score_a}) vs {} (Score: {score_b}). \
                 Quality difference: {quality_gap}.",
                first.name, second.name
            );
        }
        return NO_DATA_REPLY.to_string();
    }

    let top = &retrieved[0];
    let mut reply = format!("Top match: {}.", top.name);
    if let Some(quality) = top.quality_score {
        reply.push_str(&format!(" Quality: {quality}/100,"));
    }
    if let Some(days) = top.delivery_time_days {
        reply.push_str(&format!(" Delivery: {days} days,"));
    }
    if let Some(price) = top.price_per_unit {
        reply.push_str(&format!(" Price: ₹{price}/unit,"));
    }
    reply.push_str(&format!(
        " Location: {}. Found {} relevant suppliers.",
        top.location,
        retrieved.len()
    ));
    reply
}
