use serde::Deserialize;
use std::fs;

use crate::extractor::{Column, NOT_AVAILABLE, RawProductRecord, accepts, normalize};

#[derive(Deserialize)]
struct Envelope {
    product: RawProductRecord,
}

fn load_fixture(name: &str) -> RawProductRecord {
    let json = fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture");
    serde_json::from_str::<Envelope>(&json)
        .expect("Failed to parse test fixture")
        .product
}

#[test]
fn test_normalize_complete_product() {
    let record = load_fixture("cleanser.json");
    let row = normalize(&record, "https://shop.example.com/shop/product/cleanser");

    assert_eq!(row.product_id, "48213");
    assert_eq!(row.product_name, "Cetaphil Gentle Skin Cleanser 500ml");
    assert_eq!(row.brand_name, "Cetaphil");
    assert_eq!(row.price, "21.99");
    assert_eq!(row.barcode, "9318637043156");
    assert_eq!(row.size_volume, "500ml");
    assert_eq!(row.skin_concern, "sensitive skin");
    assert_eq!(
        row.images,
        "https://cdn.example.com/p/48213-large.jpg|https://cdn.example.com/p/48213-medium.jpg"
    );
    assert_eq!(
        row.ingredients,
        "Aqua, Cetyl Alcohol, Propylene Glycol, Sodium Lauryl Sulfate (0.5%), Stearyl Alcohol"
    );
    assert!(row.description.starts_with("A gentle , soap-free cleanser."));
    assert!(!row.description.contains('<'));
    // "Gentle Skin Cleanser" names a product type, not a line.
    assert_eq!(row.product_line_name, NOT_AVAILABLE);
    assert_eq!(row.source_url, "https://shop.example.com/shop/product/cleanser");

    assert_eq!(accepts(&row), (true, None));
}

#[test]
fn test_normalize_uses_range_detail_and_detail_size() {
    let record = load_fixture("hydro_boost.json");
    let row = normalize(&record, "https://shop.example.com/shop/product/hydro-boost");

    assert_eq!(row.product_id, "NTG-1102");
    assert_eq!(row.barcode, "70501110140");
    assert_eq!(row.product_line_name, "Hydro Boost");
    assert_eq!(row.size_volume, "50g");
    assert_eq!(row.skin_concern, "dry skin");
    assert_eq!(
        row.ingredients,
        "Water, Dimethicone, Glycerin, Sodium Hyaluronate and Phenoxyethanol"
    );
    assert!(accepts(&row).0);
}

#[test]
fn test_incomplete_product_rejected() {
    let record = load_fixture("fish_oil.json");
    let row = normalize(&record, "https://shop.example.com/shop/product/fish-oil");

    assert_eq!(row.images, NOT_AVAILABLE);
    assert_eq!(row.ingredients, NOT_AVAILABLE);
    assert_eq!(row.skin_concern, NOT_AVAILABLE);
    assert_eq!(row.size_volume, NOT_AVAILABLE);
    assert_eq!(accepts(&row), (false, Some(Column::ProductImages)));
}

#[test]
fn test_empty_record_is_all_sentinels() {
    let row = normalize(&RawProductRecord::default(), "");

    for column in Column::ALL {
        if column == Column::SourceUrl {
            assert_eq!(row.get(column), "");
        } else {
            assert_eq!(row.get(column), NOT_AVAILABLE, "column {column}");
        }
    }
    assert_eq!(accepts(&row), (false, Some(Column::ProductId)));
}

#[test]
fn test_normalize_is_repeatable() {
    let record = load_fixture("hydro_boost.json");
    let first = normalize(&record, "u");
    let second = normalize(&record, "u");
    assert_eq!(first, second);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::extractor::Detail;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_normalize_never_panics(
            name in ".*",
            brand in ".*",
            label in ".*",
            content in ".*",
        ) {
            let record = RawProductRecord {
                name: Some(name),
                brand: Some(crate::extractor::model::Brand { brand_name: Some(brand) }),
                details: vec![Detail::new(label, content)],
                ..Default::default()
            };
            let row = normalize(&record, "https://example.com");
            for column in [
                Column::ProductLineName,
                Column::ProductDescription,
                Column::SizeVolume,
                Column::Ingredients,
                Column::SkinConcern,
            ] {
                prop_assert!(!row.get(column).is_empty());
            }
        }
    }
}
