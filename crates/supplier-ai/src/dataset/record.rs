use serde::{Deserialize, Serialize};

/// One verified supplier entry.
///
/// Numeric fields are optional on purpose: `None` means the provider did
/// not carry a verified value. Downstream scoring must surface that as
/// `InsufficientData` rather than substituting zero, which would invert
/// every comparison built on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub name: String,
    pub location: String,
    /// Free-text payment terms, e.g. "30 days credit, NEFT".
    pub payment_terms: String,
    /// Free-text revenue statement, e.g. "Annual turnover ₹42.5 Crore".
    pub business_results: String,
    /// Free-text logistics descriptor, e.g. "Excellent highway access".
    pub traffic_connections: String,
    pub quality_score: Option<f64>,
    pub quantity_capacity: Option<f64>,
    pub serviceability: Option<f64>,
    pub reputation: Option<f64>,
    pub flexibility: Option<f64>,
    pub financial_condition: Option<f64>,
    pub asset_condition: Option<f64>,
    pub employees: Option<u32>,
    pub price_per_unit: Option<f64>,
    pub delivery_time_days: Option<u32>,
}

impl SupplierRecord {
    /// Case-insensitive exact name match.
    pub fn name_is(&self, candidate: &str) -> bool {
        self.name.eq_ignore_ascii_case(candidate.trim())
    }

    /// Case-insensitive substring name match.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&fragment.trim().to_lowercase())
    }
}
