use crate::extractor::model::{NOT_AVAILABLE, RawProductRecord};
use crate::extractor::text::sanitize;

const LINE_LABEL_KEYWORDS: [&str; 4] = ["line", "collection", "series", "range"];
const MAX_LINE_LABEL_CHARS: usize = 100;
const MAX_LINE_WORDS: usize = 3;
const GENERIC_TERMS: [&str; 9] = [
    "cream",
    "lotion",
    "serum",
    "oil",
    "gel",
    "cleanser",
    "moisturiser",
    "spf",
    "wash",
];

/// Infer the product line (e.g. "Hydro Boost") from a record.
///
/// An explicit line/collection/series/range detail wins. Otherwise the
/// leading capitalised words of the name, once the brand is removed, are
/// used unless they just name a product type.
pub fn infer_line_name(record: &RawProductRecord) -> String {
    line_from_details(record)
        .or_else(|| line_from_name(record))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn line_from_details(record: &RawProductRecord) -> Option<String> {
    record
        .details
        .iter()
        .filter(|detail| {
            let label = detail.label().to_lowercase();
            LINE_LABEL_KEYWORDS.iter().any(|kw| label.contains(kw))
        })
        .map(|detail| sanitize(detail.content()))
        .find(|line| !line.is_empty() && line.chars().count() < MAX_LINE_LABEL_CHARS)
}

fn line_from_name(record: &RawProductRecord) -> Option<String> {
    let brand = record.brand_name().filter(|b| !b.is_empty())?;
    let name = record.name();
    if !name.contains(brand) {
        return None;
    }

    let remaining = name.replace(brand, "");
    let words: Vec<&str> = remaining.split_whitespace().collect();
    // A lone word after the brand is the product itself, not a line.
    if words.len() < 2 {
        return None;
    }

    let line_words: Vec<&str> = words
        .iter()
        .take(MAX_LINE_WORDS)
        .take_while(|word| is_line_word(word))
        .copied()
        .collect();
    if line_words.is_empty() {
        return None;
    }

    let line = line_words.join(" ");
    let lowered = line.to_lowercase();
    if GENERIC_TERMS.iter().any(|term| lowered.contains(term)) {
        return None;
    }
    Some(line)
}

fn is_line_word(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase) && word.chars().count() > 2
}
