pub mod concerns;
pub mod details;
pub mod ingredients;
pub mod line_name;
pub mod model;
pub mod reject;
pub mod size;
pub mod text;

#[cfg(test)]
mod tests;

pub use model::{CanonicalRow, Column, Detail, NOT_AVAILABLE, RawProductRecord};
pub use reject::accepts;

use crate::extractor::model::or_not_available;

/// Build the canonical row for one catalog record.
///
/// `source_url` is the storefront page the record was fetched for. Never
/// fails: anything missing from the record comes out as [`NOT_AVAILABLE`].
pub fn normalize(record: &RawProductRecord, source_url: &str) -> CanonicalRow {
    // 1. Labelled blocks
    let description = details::find_detail(&record.details, details::GENERAL_INFORMATION);
    let raw_ingredients = details::find_detail(&record.details, details::INGREDIENTS);
    let ingredients = ingredients::format_ingredients(&raw_ingredients);

    // 2. Concerns from description plus name
    let concern_text = format!("{} {}", description, record.name());
    let skin_concern = concerns::classify_concerns(&concern_text).join(", ");

    // 3. Pattern extractors over the whole record
    let size_volume = size::extract_size(record);
    let product_line_name = line_name::infer_line_name(record);

    let not_available = || NOT_AVAILABLE.to_string();

    CanonicalRow {
        product_id: record.product_id().unwrap_or_else(not_available),
        product_name: record.name.clone().unwrap_or_else(not_available),
        product_line_name,
        brand_name: record
            .brand_name()
            .map(str::to_string)
            .unwrap_or_else(not_available),
        description: or_not_available(description),
        images: or_not_available(record.image_urls().join("|")),
        barcode: record.upc().unwrap_or_else(not_available),
        price: record.price().unwrap_or_else(not_available),
        size_volume,
        ingredients: or_not_available(ingredients),
        skin_concern: or_not_available(skin_concern),
        source_url: source_url.to_string(),
    }
}
