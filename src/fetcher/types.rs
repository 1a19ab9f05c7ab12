use serde::{Deserialize, Serialize};

use crate::extractor::RawProductRecord;

pub const APP_IDENTIFIER: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36";
pub const DEVICE_IDENTIFIER: &str = "YmTmalS1e8tKERfvJL8DxElPWlAd24_L5OkwBpF_xek";

/// Body of a `get-product-list` request.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListRequest<'a> {
    pub app_identifier: &'a str,
    pub device_identifier: &'a str,
    pub parameters: ListParameters<'a>,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListParameters<'a> {
    pub brands: Option<Vec<String>>,
    pub categories: [&'a str; 1],
    pub conditions: Option<serde_json::Value>,
    pub use_semantic: bool,
}

impl<'a> ProductListRequest<'a> {
    pub fn new(category: &'a str, page: u32, page_size: u32) -> Self {
        Self {
            app_identifier: APP_IDENTIFIER,
            device_identifier: DEVICE_IDENTIFIER,
            parameters: ListParameters {
                brands: None,
                categories: [category],
                conditions: None,
                use_semantic: true,
            },
            page,
            page_size,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductListResponse {
    pub results: Vec<ProductSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductSummary {
    pub slug: Option<String>,
}

/// Body of a `get-product` request.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailRequest<'a> {
    pub product_slug: &'a str,
    pub extensions: serde_json::Map<String, serde_json::Value>,
}

impl<'a> ProductDetailRequest<'a> {
    pub fn new(product_slug: &'a str) -> Self {
        Self {
            product_slug,
            extensions: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductDetailResponse {
    pub product: Option<RawProductRecord>,
}
