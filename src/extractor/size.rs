use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::extractor::model::{NOT_AVAILABLE, RawProductRecord};

/// Unit patterns in priority order. Group 1 is the amount, group 2 the unit
/// exactly as written.
static SIZE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("millilitres", r"(?i)(\d+(?:\.\d+)?)\s*(ml|mL|ML)"),
        ("grams", r"(?i)(\d+(?:\.\d+)?)\s*(g|gm|GM|gram|grams)"),
        ("ounces", r"(?i)(\d+(?:\.\d+)?)\s*(oz|OZ|fl\.?\s*oz)"),
        ("litres", r"(?i)(\d+(?:\.\d+)?)\s*(l|L|liter|litre)"),
        ("tablets", r"(?i)(\d+)\s*(tablet|tablets|caps|capsule|capsules)"),
        ("count", r"(?i)(\d+)\s*(count|ct|pieces|pcs)"),
        ("kilograms", r"(?i)(\d+(?:\.\d+)?)\s*(kg|KG|kilogram)"),
    ]
    .into_iter()
    .map(|(unit, pattern)| (unit, Regex::new(pattern).unwrap()))
    .collect()
});

/// Find a size or volume such as `50ml` in the record.
///
/// Sources are searched in order: name, the raw content of every detail,
/// description, then the attributes rendered as JSON. Each source is tried
/// against every unit pattern before moving on, and the first hit wins.
pub fn extract_size(record: &RawProductRecord) -> String {
    size_sources(record)
        .iter()
        .find_map(|source| match_size(source))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// The number and unit of the first matching pattern, with no space between.
pub fn match_size(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    SIZE_PATTERNS.iter().find_map(|(unit, pattern)| {
        let caps = pattern.captures(text)?;
        trace!(unit, matched = &caps[0], "size pattern matched");
        Some(format!("{}{}", &caps[1], &caps[2]))
    })
}

fn size_sources(record: &RawProductRecord) -> [String; 4] {
    let details = record
        .details
        .iter()
        .map(|detail| detail.content())
        .collect::<Vec<_>>()
        .join(" ");

    let attributes = record
        .attributes
        .as_ref()
        .map(|attrs| attrs.to_string())
        .unwrap_or_default();

    [
        record.name().to_string(),
        details,
        record.description.clone().unwrap_or_default(),
        attributes,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::model::Detail;
    use serde_json::json;

    fn named(name: &str) -> RawProductRecord {
        RawProductRecord {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_size_from_name() {
        assert_eq!(extract_size(&named("Moisturizing Cream 50ml")), "50ml");
    }

    #[test]
    fn test_unit_spelling_kept_and_space_dropped() {
        assert_eq!(extract_size(&named("Body Wash 1.5 L")), "1.5L");
        assert_eq!(extract_size(&named("Sunscreen 100 mL")), "100mL");
        // Alternatives are tried in order, so "caps" claims "Capsules".
        assert_eq!(extract_size(&named("Fish Oil 200 Capsules")), "200Caps");
    }

    #[test]
    fn test_pattern_order_within_source() {
        // Grams outranks litres even though the litre token comes first.
        assert_eq!(extract_size(&named("2L bottle with 30g sachet")), "30g");
        assert_eq!(extract_size(&named("Shampoo 2kg")), "2kg");
    }

    #[test]
    fn test_name_exhausted_before_details() {
        let record = RawProductRecord {
            name: Some("Vitamin C 60 tablets".to_string()),
            details: vec![Detail::new("Size", "<p>250ml</p>")],
            ..Default::default()
        };
        assert_eq!(extract_size(&record), "60tablet");
    }

    #[test]
    fn test_fallback_chain() {
        let record = RawProductRecord {
            name: Some("Daily Cleanser".to_string()),
            details: vec![Detail::new("Directions", "Use twice daily")],
            description: Some("Contains 75 pcs".to_string()),
            ..Default::default()
        };
        assert_eq!(extract_size(&record), "75pcs");

        let record = RawProductRecord {
            name: Some("Daily Cleanser".to_string()),
            attributes: Some(json!({ "pack_size": "3 count" })),
            ..Default::default()
        };
        assert_eq!(extract_size(&record), "3count");
    }

    #[test]
    fn test_not_available() {
        assert_eq!(extract_size(&named("Daily Cleanser")), NOT_AVAILABLE);
        assert_eq!(extract_size(&RawProductRecord::default()), NOT_AVAILABLE);
    }
}
