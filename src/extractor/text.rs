use scraper::Html;

/// Strip markup from an HTML fragment and collapse whitespace.
///
/// Text nodes are joined with a single space so adjacent blocks never run
/// together. Script and style bodies are dropped. Parsing is lenient: broken
/// markup still yields its text.
pub fn sanitize(markup: &str) -> String {
    if markup.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(markup);
    let mut parts: Vec<&str> = Vec::new();

    for node in fragment.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|el| matches!(el.name(), "script" | "style" | "noscript" | "template"));
        if !hidden {
            parts.push(&**text);
        }
    }

    normalize_whitespace(&parts.join(" "))
}

/// Same as [`sanitize`] for an optional input; `None` yields an empty string.
pub fn sanitize_opt(markup: Option<&str>) -> String {
    markup.map(sanitize).unwrap_or_default()
}

/// Collapse every whitespace run (newlines and tabs included) to one space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n\t"), "");
        assert_eq!(sanitize_opt(None), "");
    }

    #[test]
    fn test_strips_tags_and_separates_blocks() {
        let html = "<p>Gentle   formula</p><ul><li>Soothing</li><li>Calming</li></ul>";
        assert_eq!(sanitize(html), "Gentle formula Soothing Calming");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize("  AQUA,\n GLYCERIN  "), "AQUA, GLYCERIN");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(sanitize("Fragrance&nbsp;free &amp; mild"), "Fragrance free & mild");
    }

    #[test]
    fn test_drops_script_and_style() {
        let html = "<style>p{color:red}</style><p>Visible</p><script>alert(1)</script>";
        assert_eq!(sanitize(html), "Visible");
    }

    #[test]
    fn test_malformed_markup() {
        assert_eq!(sanitize("<p>Unclosed <b>bold<div>More"), "Unclosed bold More");
        assert_eq!(sanitize("a < b"), "a < b");
    }
}
