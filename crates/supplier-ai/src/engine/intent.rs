use crate::dataset::SupplierRecord;

/// One query-intent signal and the relevance effect it contributes.
///
/// Rules are evaluated independently and cumulatively: "cheap and fast"
/// triggers both the price and urgency effects. A rule whose backing
/// numeric field is absent contributes nothing; the engine never invents
/// a value to satisfy a boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntentSignal {
    PriceSensitive,
    Urgency,
    Quality,
    Trust,
    Stability,
    Volume,
}

pub(crate) struct IntentRule {
    pub keywords: &'static [&'static str],
    pub signal: IntentSignal,
}

pub(crate) const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["cheap", "low price", "affordable"],
        signal: IntentSignal::PriceSensitive,
    },
    IntentRule {
        keywords: &["fast", "quick delivery", "urgent"],
        signal: IntentSignal::Urgency,
    },
    IntentRule {
        keywords: &["quality", "best"],
        signal: IntentSignal::Quality,
    },
    IntentRule {
        keywords: &["reliable", "reputation"],
        signal: IntentSignal::Trust,
    },
    IntentRule {
        keywords: &["financial", "stable"],
        signal: IntentSignal::Stability,
    },
    IntentRule {
        keywords: &["large", "high quantity", "volume"],
        signal: IntentSignal::Volume,
    },
];

impl IntentSignal {
    fn effect(self, record: &SupplierRecord) -> f64 {
        match self {
            IntentSignal::PriceSensitive => record
                .price_per_unit
                .map(|price| (20_000.0 - price) / 200.0)
                .unwrap_or(0.0),
            IntentSignal::Urgency => record
                .delivery_time_days
                .map(|days| (30.0 - f64::from(days)) * 3.0)
                .unwrap_or(0.0),
            IntentSignal::Quality => record.quality_score.unwrap_or(0.0),
            IntentSignal::Trust => record.reputation.unwrap_or(0.0),
            IntentSignal::Stability => record.financial_condition.unwrap_or(0.0),
            IntentSignal::Volume => record
                .quantity_capacity
                .map(|capacity| (capacity / 1000.0).min(100.0))
                .unwrap_or(0.0),
        }
    }
}

/// Sum of all intent effects triggered by an already-lowercased query.
pub(crate) fn intent_boost(query_lower: &str, record: &SupplierRecord) -> f64 {
    INTENT_RULES
        .iter()
        .filter(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| query_lower.contains(keyword))
        })
        .map(|rule| rule.signal.effect(record))
        .sum()
}

/// Sort key for best-supplier selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CriteriaKey {
    Price,
    Quality,
    Delivery,
    Financial,
    Capacity,
    Reputation,
    Composite,
}

struct CriteriaRule {
    keywords: &'static [&'static str],
    key: CriteriaKey,
}

/// Ordered: the first group with a keyword hit decides the sort key, so
/// "reliable delivery" resolves to delivery, not reputation.
const CRITERIA_RULES: &[CriteriaRule] = &[
    CriteriaRule {
        keywords: &["price", "cheap", "affordable"],
        key: CriteriaKey::Price,
    },
    CriteriaRule {
        keywords: &["quality"],
        key: CriteriaKey::Quality,
    },
    CriteriaRule {
        keywords: &["delivery", "fast"],
        key: CriteriaKey::Delivery,
    },
    CriteriaRule {
        keywords: &["financial", "stable"],
        key: CriteriaKey::Financial,
    },
    CriteriaRule {
        keywords: &["quantity", "volume", "capacity"],
        key: CriteriaKey::Capacity,
    },
    CriteriaRule {
        keywords: &["reputation", "reliable"],
        key: CriteriaKey::Reputation,
    },
];

pub(crate) fn criteria_key(criteria: &str) -> CriteriaKey {
    let criteria_lower = criteria.to_lowercase();
    CRITERIA_RULES
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| criteria_lower.contains(keyword))
        })
        .map(|rule| rule.key)
        .unwrap_or(CriteriaKey::Composite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::common::full_record;

    #[test]
    fn multiple_intents_accumulate() {
        let mut record = full_record("Budget Express");
        record.price_per_unit = Some(1_000.0);
        record.delivery_time_days = Some(2);

        let boost = intent_boost("cheap fast", &record);
        // (20000-1000)/200 + (30-2)*3
        assert_eq!(boost, 95.0 + 84.0);
    }

    #[test]
    fn absent_fields_contribute_nothing() {
        let mut record = full_record("No Price Listed");
        record.price_per_unit = None;
        assert_eq!(intent_boost("cheap", &record), 0.0);
    }

    #[test]
    fn first_criteria_group_wins() {
        assert_eq!(criteria_key("cheap but reliable"), CriteriaKey::Price);
        assert_eq!(criteria_key("reliable delivery"), CriteriaKey::Delivery);
        assert_eq!(criteria_key("RELIABLE"), CriteriaKey::Reputation);
        assert_eq!(criteria_key("overall"), CriteriaKey::Composite);
    }
}
