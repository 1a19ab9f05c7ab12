use crate::extractor::model::{CanonicalRow, Column, NOT_AVAILABLE};

/// Columns that must be populated. Product line is allowed to stay unknown.
pub const REQUIRED_COLUMNS: [Column; 11] = [
    Column::ProductId,
    Column::ProductName,
    Column::BrandName,
    Column::ProductDescription,
    Column::ProductImages,
    Column::Barcode,
    Column::Price,
    Column::SizeVolume,
    Column::Ingredients,
    Column::SkinConcern,
    Column::SourceUrl,
];

/// Whether `row` is complete, and if not the first required column that is missing.
pub fn accepts(row: &CanonicalRow) -> (bool, Option<Column>) {
    match first_missing(row) {
        Some(column) => (false, Some(column)),
        None => (true, None),
    }
}

pub fn first_missing(row: &CanonicalRow) -> Option<Column> {
    REQUIRED_COLUMNS
        .into_iter()
        .find(|column| is_missing(row.get(*column)))
}

fn is_missing(value: &str) -> bool {
    value.is_empty() || value == NOT_AVAILABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_row() -> CanonicalRow {
        CanonicalRow {
            product_id: "101".into(),
            product_name: "Cetaphil Gentle Skin Cleanser 500ml".into(),
            product_line_name: NOT_AVAILABLE.into(),
            brand_name: "Cetaphil".into(),
            description: "A gentle cleanser".into(),
            images: "https://img/1.jpg".into(),
            barcode: "9318637043156".into(),
            price: "19.99".into(),
            size_volume: "500ml".into(),
            ingredients: "Aqua, Glycerin".into(),
            skin_concern: "sensitive skin".into(),
            source_url: "https://shop/product/cleanser".into(),
        }
    }

    #[test]
    fn test_accept_with_only_line_missing() {
        assert_eq!(accepts(&complete_row()), (true, None));
    }

    #[test]
    fn test_reject_missing_barcode() {
        let row = CanonicalRow {
            barcode: NOT_AVAILABLE.into(),
            ..complete_row()
        };
        let (ok, missing) = accepts(&row);
        assert!(!ok);
        assert_eq!(missing, Some(Column::Barcode));
        assert_eq!(missing.unwrap().header(), "Barcode (EAN/UPC)");
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let row = CanonicalRow {
            price: String::new(),
            ..complete_row()
        };
        assert_eq!(accepts(&row), (false, Some(Column::Price)));
    }

    #[test]
    fn test_reports_first_missing_in_column_order() {
        let row = CanonicalRow {
            skin_concern: NOT_AVAILABLE.into(),
            brand_name: NOT_AVAILABLE.into(),
            ingredients: NOT_AVAILABLE.into(),
            ..complete_row()
        };
        assert_eq!(accepts(&row), (false, Some(Column::BrandName)));
    }
}
