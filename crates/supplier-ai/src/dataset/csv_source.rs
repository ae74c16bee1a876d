use super::record::SupplierRecord;
use super::{DatasetError, RecordSource};
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::PathBuf;

/// CSV-backed record source using the verified supplier dataset layout
/// (one header row, comma-grouped price figures allowed).
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse<R: Read>(reader: R) -> Result<Vec<SupplierRecord>, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<SupplierRow>() {
            records.push(row?.into_record());
        }
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for CsvRecordSource {
    async fn fetch_all(&self) -> Result<Vec<SupplierRecord>, DatasetError> {
        let path = self.path.clone();
        let bytes = tokio::fs::read(path).await?;
        Self::parse(bytes.as_slice())
    }
}

#[derive(Debug, Deserialize)]
struct SupplierRow {
    #[serde(rename = "supplier")]
    supplier: String,
    #[serde(rename = "supplier_location", default)]
    supplier_location: String,
    #[serde(rename = "conditions_and_method_of_payment", default)]
    payment_terms: String,
    #[serde(rename = "business_results", default)]
    business_results: String,
    #[serde(rename = "traffic_connections", default)]
    traffic_connections: String,
    #[serde(rename = "quality_score", default, deserialize_with = "blank_as_none")]
    quality_score: Option<f64>,
    #[serde(
        rename = "quantity_capacity",
        default,
        deserialize_with = "blank_as_none"
    )]
    quantity_capacity: Option<f64>,
    #[serde(
        rename = "serviceability_and_communicativeness",
        default,
        deserialize_with = "blank_as_none"
    )]
    serviceability: Option<f64>,
    #[serde(
        rename = "reputation_and_competence",
        default,
        deserialize_with = "blank_as_none"
    )]
    reputation: Option<f64>,
    #[serde(rename = "flexibility", default, deserialize_with = "blank_as_none")]
    flexibility: Option<f64>,
    #[serde(
        rename = "financial_condition",
        default,
        deserialize_with = "blank_as_none"
    )]
    financial_condition: Option<f64>,
    #[serde(
        rename = "supplier_asset_condition",
        default,
        deserialize_with = "blank_as_none"
    )]
    asset_condition: Option<f64>,
    #[serde(
        rename = "number_of_employees",
        default,
        deserialize_with = "blank_as_none_u32"
    )]
    employees: Option<u32>,
    #[serde(
        rename = "price_per_unit_inr",
        default,
        deserialize_with = "grouped_number_as_none"
    )]
    price_per_unit: Option<f64>,
    #[serde(
        rename = "delivery_time_days",
        default,
        deserialize_with = "blank_as_none_u32"
    )]
    delivery_time_days: Option<u32>,
}

impl SupplierRow {
    fn into_record(self) -> SupplierRecord {
        SupplierRecord {
            name: self.supplier,
            location: self.supplier_location,
            payment_terms: self.payment_terms,
            business_results: self.business_results,
            traffic_connections: self.traffic_connections,
            quality_score: self.quality_score,
            quantity_capacity: self.quantity_capacity,
            serviceability: self.serviceability,
            reputation: self.reputation,
            flexibility: self.flexibility,
            financial_condition: self.financial_condition,
            asset_condition: self.asset_condition,
            employees: self.employees,
            price_per_unit: self.price_per_unit,
            delivery_time_days: self.delivery_time_days,
        }
    }
}

/// Blank cells become `None`, never zero. A cell that is present but not
/// numeric is also treated as absent: the dataset carries no verified
/// value for that field.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite()))
}

fn blank_as_none_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<u32>().ok()))
}

/// Price figures in the source data may carry digit grouping ("12,500").
fn grouped_number_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.replace(',', ""))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "supplier,quality_score,quantity_capacity,conditions_and_method_of_payment,serviceability_and_communicativeness,reputation_and_competence,flexibility,financial_condition,supplier_asset_condition,business_results,number_of_employees,price_per_unit_inr,delivery_time_days,supplier_location,traffic_connections";

    #[test]
    fn parses_fully_populated_row() {
        let csv = format!(
            "{HEADER}\n\
             Apex Metals,88,120000,30 days credit,82,85,78,90,80,Annual turnover ₹42.5 Crore,240,\"12,500\",6,Bangalore,Excellent highway access"
        );
        let records = CsvRecordSource::parse(csv.as_bytes()).expect("csv parses");
        assert_eq!(records.len(), 1);

        let apex = &records[0];
        assert_eq!(apex.name, "Apex Metals");
        assert_eq!(apex.quality_score, Some(88.0));
        assert_eq!(apex.price_per_unit, Some(12_500.0));
        assert_eq!(apex.delivery_time_days, Some(6));
        assert_eq!(apex.traffic_connections, "Excellent highway access");
    }

    #[test]
    fn blank_numeric_cells_stay_absent() {
        let csv = format!(
            "{HEADER}\n\
             Sparse Works,75,,Advance payment,70,,65,,60,,,,9,Bangalore,Good connectivity"
        );
        let records = CsvRecordSource::parse(csv.as_bytes()).expect("csv parses");
        let sparse = &records[0];

        assert_eq!(sparse.quality_score, Some(75.0));
        assert_eq!(sparse.quantity_capacity, None);
        assert_eq!(sparse.reputation, None);
        assert_eq!(sparse.financial_condition, None);
        assert_eq!(sparse.price_per_unit, None);
        assert_eq!(sparse.delivery_time_days, Some(9));
    }

    #[test]
    fn non_numeric_cells_are_treated_as_absent() {
        let csv = format!(
            "{HEADER}\n\
             Odd Row,n/a,1000,COD,60,60,60,60,60,none,10,unknown,4,Bangalore,Near industrial belt"
        );
        let records = CsvRecordSource::parse(csv.as_bytes()).expect("csv parses");
        assert_eq!(records[0].quality_score, None);
        assert_eq!(records[0].price_per_unit, None);
    }

    #[test]
    fn non_finite_cells_are_treated_as_absent() {
        // "NaN" and "inf" satisfy str::parse::<f64> but are not
        // verified values
        let csv = format!(
            "{HEADER}\n\
             Edge Case,NaN,1000,COD,60,60,60,inf,60,none,10,-inf,4,Bangalore,Good connectivity"
        );
        let records = CsvRecordSource::parse(csv.as_bytes()).expect("csv parses");
        assert_eq!(records[0].quality_score, None);
        assert_eq!(records[0].financial_condition, None);
        assert_eq!(records[0].price_per_unit, None);
    }
}
