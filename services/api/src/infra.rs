use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use supplier_ai::SupplierRecord;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Built-in sample dataset for the demo command and router tests. Kept
/// deliberately small and fully verified so every engine entry point
/// works against it.
pub(crate) fn sample_records() -> Vec<SupplierRecord> {
    vec![
        sample(
            "Apex Metals",
            "Peenya Industrial Area",
            92.0,
            120_000.0,
            85.0,
            88.0,
            80.0,
            90.0,
            85.0,
            240,
            11_000.0,
            4,
            "Annual turnover ₹42.5 Crore",
            "Excellent highway access",
        ),
        sample(
            "Budget Castings",
            "Hosur Road",
            64.0,
            40_000.0,
            55.0,
            58.0,
            52.0,
            62.0,
            58.0,
            60,
            3_800.0,
            24,
            "Annual turnover ₹6 Crore",
            "Moderate congestion on approach roads",
        ),
        sample(
            "Lakshmi Precision",
            "Whitefield",
            84.0,
            80_000.0,
            78.0,
            82.0,
            76.0,
            86.0,
            79.0,
            150,
            7_500.0,
            8,
            "Annual turnover ₹18 Crore",
            "Good connectivity to ring road",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    name: &str,
    location: &str,
    quality: f64,
    capacity: f64,
    serviceability: f64,
    reputation: f64,
    flexibility: f64,
    financial: f64,
    assets: f64,
    employees: u32,
    price: f64,
    delivery: u32,
    business: &str,
    traffic: &str,
) -> SupplierRecord {
    SupplierRecord {
        name: name.to_string(),
        location: location.to_string(),
        payment_terms: "30 days credit".to_string(),
        business_results: business.to_string(),
        traffic_connections: traffic.to_string(),
        quality_score: Some(quality),
        quantity_capacity: Some(capacity),
        serviceability: Some(serviceability),
        reputation: Some(reputation),
        flexibility: Some(flexibility),
        financial_condition: Some(financial),
        asset_condition: Some(assets),
        employees: Some(employees),
        price_per_unit: Some(price),
        delivery_time_days: Some(delivery),
    }
}
