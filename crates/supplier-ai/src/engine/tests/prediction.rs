use std::sync::Arc;

use super::common::{engine_over, engine_with_options, full_record, scenario_records};
use crate::dataset::{
    ContractSnapshot, DisruptionEvent, EventSeverity, InMemoryContextSource, SupplierContext,
};
use crate::engine::prediction::{context_confidence, predict};
use crate::engine::{
    ConfidencePolicy, EngineError, EngineOptions, TrendLabel, DATASET_PREDICTION_CONFIDENCE,
};
use chrono::NaiveDate;

fn contract(ai: f64, human: f64) -> ContractSnapshot {
    ContractSnapshot {
        contract_date: NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"),
        ai_score: ai,
        human_score: human,
    }
}

fn disruption(severity: EventSeverity, location: &str) -> DisruptionEvent {
    DisruptionEvent {
        description: "Port strike".to_string(),
        affected_locations: vec![location.to_string()],
        severity,
    }
}

#[test]
fn every_applicable_risk_rule_fires() {
    let mut risky = full_record("Risky Ventures");
    risky.delivery_time_days = Some(25);
    risky.financial_condition = Some(70.0);
    risky.asset_condition = Some(65.0);
    risky.traffic_connections = "Moderate congestion near port".to_string();
    risky.quality_score = Some(60.0);
    risky.reputation = Some(60.0);
    risky.serviceability = Some(55.0);
    risky.flexibility = Some(55.0);

    let result = predict(&risky, None, ConfidencePolicy::Fixed).expect("predicts");

    assert_eq!(result.risk_factors.len(), 4);
    assert!(result
        .risk_factors
        .iter()
        .any(|factor| factor.contains("Extended delivery")));
    assert!(result
        .risk_factors
        .iter()
        .any(|factor| factor.contains("Financial stability")));
    assert!(result
        .risk_factors
        .iter()
        .any(|factor| factor.contains("Asset condition")));
    assert!(result
        .risk_factors
        .iter()
        .any(|factor| factor.contains("Traffic connectivity")));

    assert_eq!(result.predicted_trend, TrendLabel::Declining);
    assert!(result.recommendation.contains("Exercise caution"));
}

#[test]
fn clean_record_reports_the_single_no_risk_marker() {
    let result = predict(&full_record("Steady Supply"), None, ConfidencePolicy::Fixed)
        .expect("predicts");

    assert_eq!(
        result.risk_factors,
        vec!["No significant risks identified".to_string()]
    );
    assert_eq!(result.predicted_trend, TrendLabel::Stable);
    // score 77.05 with zero risks lands in the "reliable" tier
    assert!(result.recommendation.contains("Reliable supplier"));
    assert_eq!(result.confidence, DATASET_PREDICTION_CONFIDENCE);
    assert_eq!(result.confidence_policy, ConfidencePolicy::Fixed);
}

#[test]
fn strong_record_trends_improving_with_growth_recommendation() {
    let records = scenario_records();
    let result = predict(&records[0], None, ConfidencePolicy::Fixed).expect("predicts");

    assert_eq!(result.current_performance, 87.35);
    assert_eq!(result.predicted_trend, TrendLabel::Improving);
    assert!(result.recommendation.contains("long-term partnership"));
}

#[test]
fn context_confidence_blends_volume_and_consistency() {
    let context = SupplierContext {
        contracts: (0..10).map(|_| contract(80.0, 70.0)).collect(),
        events: Vec::new(),
    };
    // volume: 10 contracts * 5 = 50; consistency: 100 - 2*10 = 80
    assert_eq!(context_confidence(&context), 65.0);
}

#[test]
fn context_confidence_caps_volume_at_one_hundred() {
    let context = SupplierContext {
        contracts: (0..40).map(|_| contract(75.0, 75.0)).collect(),
        events: Vec::new(),
    };
    assert_eq!(context_confidence(&context), 100.0);
}

#[test]
fn empty_history_yields_the_floor_confidence() {
    // volume 0, consistency 100 (no divergence signal)
    assert_eq!(context_confidence(&SupplierContext::default()), 50.0);
}

#[test]
fn missing_asset_condition_blocks_prediction() {
    let mut partial = full_record("Partial Data Co");
    partial.asset_condition = None;
    let err = predict(&partial, None, ConfidencePolicy::Fixed).expect_err("must fail");
    assert!(matches!(
        err,
        EngineError::InsufficientData {
            field: "supplier_asset_condition",
            ..
        }
    ));
}

#[tokio::test]
async fn engine_uses_context_confidence_when_configured() {
    let context = SupplierContext {
        contracts: (0..10).map(|_| contract(80.0, 70.0)).collect(),
        events: Vec::new(),
    };
    let source = InMemoryContextSource::default().with_history("Steady Supply", context);

    let engine = engine_with_options(
        vec![full_record("Steady Supply")],
        EngineOptions {
            confidence: ConfidencePolicy::ContextDerived,
            ..EngineOptions::default()
        },
    )
    .with_context(Arc::new(source));

    let result = engine.predict("Steady Supply").await.expect("predicts");
    assert_eq!(result.confidence, 65.0);
    assert_eq!(result.confidence_policy, ConfidencePolicy::ContextDerived);
}

#[tokio::test]
async fn engine_without_context_reports_dataset_confidence() {
    let engine = engine_over(vec![full_record("Steady Supply")]);
    let result = engine.predict("Steady Supply").await.expect("predicts");
    assert_eq!(result.confidence, DATASET_PREDICTION_CONFIDENCE);
}

#[test]
fn regional_disruption_events_add_a_risk_factor() {
    // Clean dataset record, so the only risk is the recorded event
    let context = SupplierContext {
        contracts: Vec::new(),
        events: vec![disruption(EventSeverity::Critical, "Bangalore")],
    };
    let result = predict(
        &full_record("Steady Supply"),
        Some(&context),
        ConfidencePolicy::Fixed,
    )
    .expect("predicts");

    assert_eq!(
        result.risk_factors,
        vec!["Active disruption events in the supplier's region".to_string()]
    );
}

#[test]
fn events_elsewhere_and_low_severity_events_are_ignored() {
    let context = SupplierContext {
        contracts: Vec::new(),
        events: vec![
            disruption(EventSeverity::Critical, "Chennai"),
            disruption(EventSeverity::Low, "Bangalore"),
        ],
    };
    let result = predict(
        &full_record("Steady Supply"),
        Some(&context),
        ConfidencePolicy::Fixed,
    )
    .expect("predicts");

    assert_eq!(
        result.risk_factors,
        vec!["No significant risks identified".to_string()]
    );
}

#[tokio::test]
async fn engine_event_risks_apply_even_with_fixed_confidence() {
    let context = SupplierContext {
        contracts: Vec::new(),
        events: vec![disruption(EventSeverity::High, "Bangalore")],
    };
    let source = InMemoryContextSource::default().with_history("Steady Supply", context);
    let engine = engine_over(vec![full_record("Steady Supply")]).with_context(Arc::new(source));

    let result = engine.predict("Steady Supply").await.expect("predicts");
    assert!(result
        .risk_factors
        .iter()
        .any(|factor| factor.contains("disruption events")));
    assert_eq!(result.confidence, DATASET_PREDICTION_CONFIDENCE);
}

#[tokio::test]
async fn engine_predict_unknown_supplier_is_not_found() {
    let engine = engine_over(scenario_records());
    assert!(matches!(
        engine.predict("Ghost Supplier").await,
        Err(EngineError::NotFound { .. })
    ));
}
