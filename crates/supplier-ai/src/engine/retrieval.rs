use super::intent::{criteria_key, intent_boost, CriteriaKey};
use super::scoring::composite_score;
use super::EngineError;
use crate::dataset::SupplierRecord;
use std::cmp::Ordering;

const NAME_MATCH_BONUS: f64 = 50.0;
const TRAFFIC_MATCH_BONUS: f64 = 20.0;
const PAYMENT_MATCH_BONUS: f64 = 15.0;

/// How ambiguous substring name lookups are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatching {
    /// First substring match in provider order wins. This mirrors the
    /// historical behavior; with overlapping names ("Steel Co" vs "Steel
    /// Corp Ltd") it can silently pick the wrong supplier.
    #[default]
    FirstMatch,
    /// Multiple substring candidates are an error the caller must
    /// disambiguate.
    Strict,
}

/// Relevance of one record against an already-lowercased query.
pub(crate) fn relevance(record: &SupplierRecord, query_lower: &str) -> f64 {
    let mut score = 0.0;

    if record.name.to_lowercase().contains(query_lower) {
        score += NAME_MATCH_BONUS;
    }
    if record.traffic_connections.to_lowercase().contains(query_lower) {
        score += TRAFFIC_MATCH_BONUS;
    }
    if record.payment_terms.to_lowercase().contains(query_lower) {
        score += PAYMENT_MATCH_BONUS;
    }

    score + intent_boost(query_lower, record)
}

/// Rank records against a free-text query and keep the top `top_k`.
///
/// A blank query is a defined fallback, not an error: the first `top_k`
/// records in provider order come back unscored. Ties in the scored path
/// preserve provider order (`sort_by` is stable).
pub(crate) fn retrieve(
    records: &[SupplierRecord],
    query: &str,
    top_k: usize,
) -> Vec<SupplierRecord> {
    if query.trim().is_empty() {
        return records.iter().take(top_k).cloned().collect();
    }

    let query_lower = query.trim().to_lowercase();
    let mut scored: Vec<(&SupplierRecord, f64)> = records
        .iter()
        .map(|record| (record, relevance(record, &query_lower)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(top_k)
        .map(|(record, _)| record.clone())
        .collect()
}

/// Resolve a supplier by name: case-insensitive exact match first, then
/// substring match subject to the configured ambiguity policy.
pub(crate) fn find_by_name<'a>(
    records: &'a [SupplierRecord],
    name: &str,
    matching: NameMatching,
) -> Result<&'a SupplierRecord, EngineError> {
    if let Some(exact) = records.iter().find(|record| record.name_is(name)) {
        return Ok(exact);
    }

    let mut candidates = records.iter().filter(|record| record.name_contains(name));
    let first = candidates.next().ok_or_else(|| EngineError::NotFound {
        name: name.to_string(),
    })?;

    if matching == NameMatching::Strict {
        let extra = candidates.count();
        if extra > 0 {
            return Err(EngineError::Ambiguous {
                name: name.to_string(),
                candidates: extra + 1,
            });
        }
    }

    Ok(first)
}

/// Top-ranked record for a criteria string, drawn from the ordered
/// keyword-group table. Records missing the sort key are never ranked: a
/// supplier without a verified price cannot win "cheapest".
pub(crate) fn best_supplier<'a>(
    records: &'a [SupplierRecord],
    criteria: &str,
) -> Option<&'a SupplierRecord> {
    match criteria_key(criteria) {
        CriteriaKey::Price => pick(records, |r| r.price_per_unit, Direction::Lowest),
        CriteriaKey::Quality => pick(records, |r| r.quality_score, Direction::Highest),
        CriteriaKey::Delivery => pick(
            records,
            |r| r.delivery_time_days.map(f64::from),
            Direction::Lowest,
        ),
        CriteriaKey::Financial => pick(records, |r| r.financial_condition, Direction::Highest),
        CriteriaKey::Capacity => pick(records, |r| r.quantity_capacity, Direction::Highest),
        CriteriaKey::Reputation => pick(records, |r| r.reputation, Direction::Highest),
        CriteriaKey::Composite => pick(
            records,
            |r| composite_score(r).ok(),
            Direction::Highest,
        ),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Lowest,
    Highest,
}

/// Strictly-better comparison keeps the earliest record on ties,
/// preserving provider order the same way retrieval does.
fn pick<'a, F>(
    records: &'a [SupplierRecord],
    key: F,
    direction: Direction,
) -> Option<&'a SupplierRecord>
where
    F: Fn(&SupplierRecord) -> Option<f64>,
{
    records
        .iter()
        .filter_map(|record| key(record).map(|value| (record, value)))
        .reduce(|best, candidate| {
            let better = match direction {
                Direction::Lowest => candidate.1 < best.1,
                Direction::Highest => candidate.1 > best.1,
            };
            if better {
                candidate
            } else {
                best
            }
        })
        .map(|(record, _)| record)
}
