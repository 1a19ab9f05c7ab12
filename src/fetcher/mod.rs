pub mod client;
pub mod errors;
pub mod types;

pub use client::{CatalogClient, CatalogSource, product_url};
pub use errors::FetchError;
