use std::sync::Arc;

use crate::dataset::{InMemoryRecordSource, SupplierDataset, SupplierRecord};
use crate::engine::{EngineOptions, SupplierIntelligence};

/// A mid-table supplier with every field verified. Composite score:
/// 78*.25 + 76*.20 + 80*.15 + 80*.15 + 74*.10 + 72*.10 + 75*.05 = 77.05
pub(crate) fn full_record(name: &str) -> SupplierRecord {
    SupplierRecord {
        name: name.to_string(),
        location: "Bangalore".to_string(),
        payment_terms: "30 days credit".to_string(),
        business_results: "Annual turnover ₹20 Crore".to_string(),
        traffic_connections: "Good connectivity to ring road".to_string(),
        quality_score: Some(78.0),
        quantity_capacity: Some(50_000.0),
        serviceability: Some(74.0),
        reputation: Some(76.0),
        flexibility: Some(72.0),
        financial_condition: Some(80.0),
        asset_condition: Some(75.0),
        employees: Some(150),
        price_per_unit: Some(8_000.0),
        delivery_time_days: Some(10),
    }
}

/// The three-record scenario from the scoring contract: R1 strong with
/// fast delivery, R2 weak, R3 = R1 but with a 40-day lead time.
pub(crate) fn scenario_records() -> Vec<SupplierRecord> {
    let mut r1 = full_record("Apex Metals");
    r1.quality_score = Some(90.0);
    r1.reputation = Some(85.0);
    r1.financial_condition = Some(90.0);
    r1.serviceability = Some(80.0);
    r1.flexibility = Some(80.0);
    r1.asset_condition = Some(85.0);
    r1.delivery_time_days = Some(3);

    let mut r2 = full_record("Budget Castings");
    r2.quality_score = Some(60.0);
    r2.reputation = Some(55.0);
    r2.financial_condition = Some(60.0);
    r2.serviceability = Some(50.0);
    r2.flexibility = Some(50.0);
    r2.asset_condition = Some(55.0);
    r2.delivery_time_days = Some(25);

    let mut r3 = r1.clone();
    r3.name = "Apex Overseas".to_string();
    r3.delivery_time_days = Some(40);

    vec![r1, r2, r3]
}

pub(crate) fn engine_over(records: Vec<SupplierRecord>) -> SupplierIntelligence {
    engine_with_options(records, EngineOptions::default())
}

pub(crate) fn engine_with_options(
    records: Vec<SupplierRecord>,
    options: EngineOptions,
) -> SupplierIntelligence {
    let dataset = Arc::new(SupplierDataset::new(Arc::new(InMemoryRecordSource::new(
        records,
    ))));
    SupplierIntelligence::new(dataset, options)
}
