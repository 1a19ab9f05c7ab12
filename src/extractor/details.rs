use crate::extractor::model::Detail;
use crate::extractor::text::sanitize_opt;

pub const GENERAL_INFORMATION: &str = "General Information";
pub const INGREDIENTS: &str = "Ingredients";

/// Sanitized content of the first detail whose label equals `label` exactly.
///
/// Returns an empty string when nothing matches.
pub fn find_detail(details: &[Detail], label: &str) -> String {
    details
        .iter()
        .find(|detail| detail.content_label.as_deref() == Some(label))
        .map(|detail| sanitize_opt(detail.content.as_deref()))
        .unwrap_or_default()
}
