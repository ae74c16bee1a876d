use super::scoring::{composite_score, require, require_delivery_days, round2};
use super::EngineError;
use crate::dataset::SupplierRecord;
use serde::{Deserialize, Serialize};

/// Two suppliers scoring within this band of each other are reported as
/// comparable rather than naming a winner.
pub const CLOSE_CALL_THRESHOLD: f64 = 5.0;

/// Pairwise verdict: a winner per dimension, an overall winner by
/// composite score, and numeric deltas (supplier A minus supplier B).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub supplier_a: String,
    pub supplier_b: String,
    pub winner: String,
    pub quality_winner: String,
    pub price_winner: String,
    pub delivery_winner: String,
    pub financial_winner: String,
    pub score_a: f64,
    pub score_b: f64,
    pub deltas: ComparisonDeltas,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDeltas {
    pub quality: f64,
    pub price: f64,
    pub delivery: i64,
    pub financial: f64,
}

struct Dimensions {
    quality: f64,
    price: f64,
    delivery: u32,
    financial: f64,
    composite: f64,
}

fn dimensions(record: &SupplierRecord) -> Result<Dimensions, EngineError> {
    let name = record.name.as_str();
    Ok(Dimensions {
        quality: require(record.quality_score, name, "quality_score")?,
        price: require(record.price_per_unit, name, "price_per_unit_inr")?,
        delivery: require_delivery_days(record)?,
        financial: require(record.financial_condition, name, "financial_condition")?,
        composite: composite_score(record)?,
    })
}

/// A per-dimension winner. Exact ties fall back to the higher composite
/// score, then to name order, so the verdict does not depend on which
/// supplier was passed first.
fn dimension_winner<'a>(
    a: (&'a str, f64),
    b: (&'a str, f64),
    higher_wins: bool,
    composite: (&'a str, f64, f64),
) -> &'a str {
    if a.1 != b.1 {
        let a_wins = if higher_wins { a.1 > b.1 } else { a.1 < b.1 };
        return if a_wins { a.0 } else { b.0 };
    }

    let (_, composite_a, composite_b) = composite;
    if composite_a != composite_b {
        if composite_a > composite_b {
            a.0
        } else {
            b.0
        }
    } else if a.0 <= b.0 {
        a.0
    } else {
        b.0
    }
}

pub(crate) fn compare(
    record_a: &SupplierRecord,
    record_b: &SupplierRecord,
) -> Result<ComparisonResult, EngineError> {
    let a = dimensions(record_a)?;
    let b = dimensions(record_b)?;
    let name_a = record_a.name.as_str();
    let name_b = record_b.name.as_str();
    let composite = ("", a.composite, b.composite);

    let winner = dimension_winner(
        (name_a, a.composite),
        (name_b, b.composite),
        true,
        composite,
    );

    let recommendation = recommendation(
        name_a, &a, name_b, &b,
    );

    Ok(ComparisonResult {
        supplier_a: name_a.to_string(),
        supplier_b: name_b.to_string(),
        winner: winner.to_string(),
        quality_winner: dimension_winner(
            (name_a, a.quality),
            (name_b, b.quality),
            true,
            composite,
        )
        .to_string(),
        price_winner: dimension_winner((name_a, a.price), (name_b, b.price), false, composite)
            .to_string(),
        delivery_winner: dimension_winner(
            (name_a, f64::from(a.delivery)),
            (name_b, f64::from(b.delivery)),
            false,
            composite,
        )
        .to_string(),
        financial_winner: dimension_winner(
            (name_a, a.financial),
            (name_b, b.financial),
            true,
            composite,
        )
        .to_string(),
        score_a: a.composite,
        score_b: b.composite,
        deltas: ComparisonDeltas {
            quality: round2(a.quality - b.quality),
            price: round2(a.price - b.price),
            delivery: i64::from(a.delivery) - i64::from(b.delivery),
            financial: round2(a.financial - b.financial),
        },
        recommendation,
    })
}

fn recommendation(name_a: &str, a: &Dimensions, name_b: &str, b: &Dimensions) -> String {
    if (a.composite - b.composite).abs() < CLOSE_CALL_THRESHOLD {
        return "Both suppliers show comparable performance. Decision should be based on \
                specific project requirements."
            .to_string();
    }

    let a_wins = a.composite > b.composite;
    let (winner_name, winner, loser) = if a_wins {
        (name_a, a, b)
    } else {
        (name_b, b, a)
    };

    let mut advantages = Vec::new();
    if winner.quality > loser.quality {
        advantages.push("quality");
    }
    if winner.price < loser.price {
        advantages.push("price");
    }
    if winner.delivery < loser.delivery {
        advantages.push("delivery");
    }
    if winner.financial > loser.financial {
        advantages.push("financial stability");
    }

    if advantages.is_empty() {
        format!(
            "{winner_name} demonstrates superior overall performance with better balanced \
             metrics across the weighted dimensions."
        )
    } else {
        format!(
            "{winner_name} demonstrates superior overall performance, leading on {}.",
            advantages.join(", ")
        )
    }
}
