use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Marker written into any column whose value could not be determined.
pub const NOT_AVAILABLE: &str = "N/A";

/// Product record as returned by the catalog's product-detail endpoint.
///
/// Every field is optional: the catalog omits keys freely, and the normalizer
/// substitutes [`NOT_AVAILABLE`] rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProductRecord {
    pub product_id: Option<Value>,
    pub name: Option<String>,
    pub brand: Option<Brand>,
    pub price: Option<Value>,
    pub upc: Option<Value>,
    pub images: Option<serde_json::Map<String, Value>>,
    pub description: Option<String>,
    pub attributes: Option<Value>,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub brand_name: Option<String>,
}

/// One labelled block from the record's detail list. Content may carry markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Detail {
    pub content_label: Option<String>,
    pub content: Option<String>,
}

impl Detail {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content_label: Some(label.into()),
            content: Some(content.into()),
        }
    }

    pub fn label(&self) -> &str {
        self.content_label.as_deref().unwrap_or_default()
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

impl RawProductRecord {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Brand name, or `None` when either the brand block or its name is missing.
    pub fn brand_name(&self) -> Option<&str> {
        self.brand.as_ref().and_then(|b| b.brand_name.as_deref())
    }

    pub fn product_id(&self) -> Option<String> {
        self.product_id.as_ref().and_then(scalar_to_string)
    }

    pub fn price(&self) -> Option<String> {
        self.price.as_ref().and_then(scalar_to_string)
    }

    pub fn upc(&self) -> Option<String> {
        self.upc.as_ref().and_then(scalar_to_string)
    }

    /// Image URLs in the order the catalog listed them. Non-string entries are skipped.
    pub fn image_urls(&self) -> Vec<&str> {
        self.images
            .as_ref()
            .map(|images| images.values().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Output columns, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ProductId,
    ProductName,
    ProductLineName,
    BrandName,
    ProductDescription,
    ProductImages,
    Barcode,
    Price,
    SizeVolume,
    Ingredients,
    SkinConcern,
    SourceUrl,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::ProductId,
        Column::ProductName,
        Column::ProductLineName,
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

    /// Header text used in the CSV export and in rejection messages.
    pub fn header(self) -> &'static str {
        match self {
            Column::ProductId => "Product ID",
            Column::ProductName => "Product Name",
            Column::ProductLineName => "Product Line Name",
            Column::BrandName => "Brand Name",
            Column::ProductDescription => "Product Description",
            Column::ProductImages => "Product Images",
            Column::Barcode => "Barcode (EAN/UPC)",
            Column::Price => "Price",
            Column::SizeVolume => "Size/Volume",
            Column::Ingredients => "Ingredients",
            Column::SkinConcern => "Skin Concern",
            Column::SourceUrl => "Source URL",
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// One normalized product. Every column holds either a value or [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRow {
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Product Line Name")]
    pub product_line_name: String,
    #[serde(rename = "Brand Name")]
    pub brand_name: String,
    #[serde(rename = "Product Description")]
    pub description: String,
    #[serde(rename = "Product Images")]
    pub images: String,
    #[serde(rename = "Barcode (EAN/UPC)")]
    pub barcode: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Size/Volume")]
    pub size_volume: String,
    #[serde(rename = "Ingredients")]
    pub ingredients: String,
    #[serde(rename = "Skin Concern")]
    pub skin_concern: String,
    #[serde(rename = "Source URL")]
    pub source_url: String,
}

impl CanonicalRow {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::ProductId => &self.product_id,
            Column::ProductName => &self.product_name,
            Column::ProductLineName => &self.product_line_name,
            Column::BrandName => &self.brand_name,
            Column::ProductDescription => &self.description,
            Column::ProductImages => &self.images,
            Column::Barcode => &self.barcode,
            Column::Price => &self.price,
            Column::SizeVolume => &self.size_volume,
            Column::Ingredients => &self.ingredients,
            Column::SkinConcern => &self.skin_concern,
            Column::SourceUrl => &self.source_url,
        }
    }
}

/// Returns `value` unless it is empty, in which case the sentinel.
pub fn or_not_available(value: impl Into<String>) -> String {
    let value = value.into();
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value
    }
}
