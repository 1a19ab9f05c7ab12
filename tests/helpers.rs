#![allow(dead_code)]

use catalog_harvest::config::Config;
use catalog_harvest::extractor::RawProductRecord;
use serde_json::{Value, json};
use std::time::Duration;

pub const BASE_URL: &str = "http://catalog.test";

/// Detail-endpoint JSON for a product that passes the completeness check.
pub fn complete_product_json(id: u64) -> Value {
    json!({
        "product_id": id,
        "name": format!("Cetaphil Gentle Skin Cleanser {id}ml"),
        "brand": { "brand_name": "Cetaphil" },
        "price": 14.99,
        "upc": format!("93186370{id:05}"),
        "images": { "large": format!("https://cdn.test/{id}.jpg") },
        "details": [
            { "content_label": "General Information", "content": "<p>Gentle on sensitive skin.</p>" },
            { "content_label": "Ingredients", "content": "AQUA, GLYCERIN. CETYL ALCOHOL." }
        ]
    })
}

pub fn complete_record(id: u64) -> RawProductRecord {
    serde_json::from_value(complete_product_json(id)).unwrap()
}

/// Same as [`complete_record`] but without a barcode.
pub fn record_without_barcode(id: u64) -> RawProductRecord {
    let mut json = complete_product_json(id);
    json.as_object_mut().unwrap().remove("upc");
    serde_json::from_value(json).unwrap()
}

pub fn test_config(target: usize, attempts_multiplier: usize) -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        target,
        categories: vec!["skin-care".to_string()],
        delay: Duration::ZERO,
        attempts_multiplier,
        ..Config::default()
    }
}

pub fn slugs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
