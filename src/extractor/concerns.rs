use regex::Regex;
use std::sync::LazyLock;

/// Concern categories in output order, each with its keyword patterns.
const CONCERN_TABLE: [(&str, &[&str]); 11] = [
    ("acne", &["acne", "pimple", "breakout", "blemish"]),
    ("dry skin", &[r"dry\s*skin", "dehydrat", "moisturiz", "hydrat"]),
    ("oily skin", &[r"oily\s*skin", r"excess\s*oil", "sebum"]),
    ("sensitive skin", &[r"sensitive\s*skin", "gentle", "sooth", "calm"]),
    ("anti-aging", &[r"anti.?aging", "wrinkle", r"fine\s*line", "firm"]),
    ("hyperpigmentation", &["hyperpigment", r"dark\s*spot", "discolor"]),
    ("sun protection", &["spf", r"sun\s*protection", "sunscreen"]),
    ("rosacea", &["rosacea", "redness"]),
    ("eczema", &["eczema", "dermatitis"]),
    ("mature skin", &[r"mature\s*skin", r"aging\s*skin"]),
    ("dullness", &["dull", "brighten", "radiance", "glow"]),
];

static CONCERN_PATTERNS: LazyLock<Vec<(&'static str, Vec<Regex>)>> = LazyLock::new(|| {
    CONCERN_TABLE
        .iter()
        .map(|(concern, patterns)| {
            let compiled = patterns.iter().map(|p| Regex::new(p).unwrap()).collect();
            (*concern, compiled)
        })
        .collect()
});

/// Skin concerns mentioned in `text`, in category order, each at most once.
pub fn classify_concerns(text: &str) -> Vec<&'static str> {
    if text.is_empty() {
        return Vec::new();
    }

    let text = text.to_lowercase();
    CONCERN_PATTERNS
        .iter()
        .filter(|(_, patterns)| patterns.iter().any(|p| p.is_match(&text)))
        .map(|(concern, _)| *concern)
        .collect()
}
