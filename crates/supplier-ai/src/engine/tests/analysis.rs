use super::common::{engine_over, full_record, scenario_records};
use crate::engine::analysis::{analyze, chat_reply, NO_DATA_REPLY};
use crate::engine::{DeliveryConsistency, EngineError, TrafficRisk, ANALYSIS_CONFIDENCE};

#[test]
fn analysis_sections_are_computed_from_verified_fields() {
    let analysis = analyze(&full_record("Apex Metals")).expect("analyzes");

    assert_eq!(analysis.overview.name, "Apex Metals");
    assert_eq!(analysis.overview.employees, Some(150));
    assert_eq!(analysis.key_performance.quality_score, 78.0);
    // 8000 / 78 rounded to two decimals
    assert_eq!(analysis.cost_reliability.cost_reliability_ratio, 102.56);
    assert_eq!(
        analysis.operational_risk.traffic_risk,
        TrafficRisk::LowModerate
    );
    assert_eq!(
        analysis.operational_risk.delivery_consistency,
        DeliveryConsistency::Moderate
    );
    // Good descriptor base 85 minus 1.5 * 10 days
    assert_eq!(analysis.operational_risk.logistics_score, 70.0);
    assert_eq!(analysis.financial_strength.overall_stability, 77.5);
    // ₹20 Crore -> (20/50)*10
    assert_eq!(analysis.financial_strength.business_strength, 4.0);
    assert_eq!(analysis.recommendation.overall_score, 77.05);
    assert_eq!(analysis.confidence_score, ANALYSIS_CONFIDENCE);
}

#[test]
fn strength_and_weakness_rules_trigger_on_thresholds() {
    let records = scenario_records();
    let strong = analyze(&records[0]).expect("analyzes");
    assert!(strong
        .recommendation
        .strengths
        .iter()
        .any(|s| s.contains("quality standards")));
    assert!(strong
        .recommendation
        .strengths
        .iter()
        .any(|s| s.contains("Fast delivery")));
    assert_eq!(
        strong.recommendation.weaknesses,
        vec!["No significant weaknesses identified".to_string()]
    );

    let weak = analyze(&records[1]).expect("analyzes");
    assert!(weak
        .recommendation
        .weaknesses
        .iter()
        .any(|w| w.contains("Quality concerns")));
    assert!(weak
        .recommendation
        .weaknesses
        .iter()
        .any(|w| w.contains("Slow delivery")));
}

#[test]
fn balanced_record_gets_the_default_strength_marker() {
    let mut plain = full_record("Plain Works");
    plain.quality_score = Some(75.0);
    plain.financial_condition = Some(75.0);
    plain.reputation = Some(75.0);

    let analysis = analyze(&plain).expect("analyzes");
    assert_eq!(
        analysis.recommendation.strengths,
        vec!["Balanced performance across metrics".to_string()]
    );
}

#[test]
fn missing_capacity_blocks_the_analysis() {
    let mut partial = full_record("Partial Data Co");
    partial.quantity_capacity = None;
    assert!(matches!(
        analyze(&partial),
        Err(EngineError::InsufficientData {
            field: "quantity_capacity",
            ..
        })
    ));
}

#[test]
fn chat_reply_recommends_the_top_retrieved_supplier() {
    let records = scenario_records();
    let reply = chat_reply("best quality supplier", &records);
    assert!(reply.contains("Apex Metals"));
    assert!(reply.contains("/100"));
}

#[test]
fn chat_reply_compares_the_top_two_matches() {
    let records = scenario_records();
    let reply = chat_reply("compare these suppliers", &records);
    assert!(reply.contains("Comparison:"));
    assert!(reply.contains("Apex Metals"));
    assert!(reply.contains("Budget Castings"));
}

#[test]
fn chat_reply_with_no_matches_reports_no_verified_data() {
    assert_eq!(chat_reply("best supplier", &[]), NO_DATA_REPLY);
    assert_eq!(chat_reply("ab", &scenario_records()), NO_DATA_REPLY);
}

#[tokio::test]
async fn engine_chat_response_defaults_to_top_match_summary() {
    let engine = engine_over(scenario_records());
    let reply = engine.chat_response("apex").await.expect("responds");
    assert!(reply.starts_with("Top match: Apex Metals."));
    assert!(reply.contains("relevant suppliers"));
}

#[tokio::test]
async fn engine_chat_response_rejects_tiny_queries() {
    let engine = engine_over(scenario_records());
    let reply = engine.chat_response(" a ").await.expect("responds");
    assert_eq!(reply, NO_DATA_REPLY);
}
