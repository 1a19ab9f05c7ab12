use regex::Regex;
use std::sync::LazyLock;

use crate::extractor::model::NOT_AVAILABLE;
use crate::extractor::text::{normalize_whitespace, sanitize};

static FUNCTION_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:And|Or|Of|In|The|With|From|To|As|By|For|On|At|Is|A|An)\b").unwrap()
});

// A comma together with any commas and whitespace around it.
static COMMA_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,[\s,]*").unwrap());

/// Reformat a raw ingredient list into a comma-delimited, title-cased string.
///
/// `"AQUA, GLYCERIN. FRAGRANCE."` becomes `"Aqua, Glycerin, Fragrance"`.
/// Periods inside decimals such as `1.5%` are kept. Empty input and the
/// sentinel are returned unchanged; input that is empty once markup is
/// stripped becomes the sentinel. Applying the formatter to its own output
/// changes nothing.
pub fn format_ingredients(raw: &str) -> String {
    if raw.is_empty() || raw == NOT_AVAILABLE {
        return raw.to_string();
    }

    let cleaned = sanitize(raw);
    if cleaned.trim().is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    let text = periods_to_commas(&cleaned);
    let text = title_case(&text);
    let text = FUNCTION_WORDS.replace_all(&text, |caps: &regex::Captures| caps[0].to_lowercase());
    let text = COMMA_RUN.replace_all(&text, ", ");
    let text = normalize_whitespace(&text);

    text.trim_end_matches([',', ' ']).to_string()
}

/// Replace every period that is not directly followed by a digit.
fn periods_to_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '.' && !chars.peek().is_some_and(|next| next.is_numeric()) {
            out.push(',');
        } else {
            out.push(c);
        }
    }
    out
}

/// Uppercase the first letter of each run of letters and lowercase the rest.
///
/// A letter starts a new word whenever the character before it is not a
/// letter, so `SODIUM-LAURYL` becomes `Sodium-Lauryl` and `WATER,SALT`
/// becomes `Water,Salt`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if !cased {
            out.push(c);
            in_word = false;
            continue;
        }

        if in_word {
            out.extend(c.to_lowercase());
        } else {
            // Multi-char uppercase forms (e.g. 'ß' -> "SS") keep only their
            // first char upper so a second pass sees the same word.
            let mut upper = c.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
            }
            for rest in upper {
                out.extend(rest.to_lowercase());
            }
        }
        in_word = true;
    }
    out
}
