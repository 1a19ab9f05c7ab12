use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::extractor::RawProductRecord;
use crate::fetcher::errors::FetchError;
use crate::fetcher::types::{
    APP_IDENTIFIER, ProductDetailRequest, ProductDetailResponse, ProductListRequest,
    ProductListResponse,
};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub const PRODUCT_LIST_PATH: &str = "/shopping-api/v2/get-product-list";
pub const PRODUCT_DETAIL_PATH: &str = "/shopping-api/v2/get-product";

/// What the harvester needs from a product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Slugs on one page of a category listing. An empty page means the end.
    async fn list_slugs(
        &self,
        category: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<String>, FetchError>;

    /// Full record for a slug, or `None` when the catalog has no product for it.
    async fn get_record(&self, slug: &str) -> Result<Option<RawProductRecord>, FetchError>;
}

/// JSON client for the storefront's shopping API.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        let http = ClientBuilder::new()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .user_agent(APP_IDENTIFIER)
            .default_headers(headers)
            .build()
            .map_err(FetchError::from_reqwest_error)?;

        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(&config.base_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, FetchError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status,
                retriable: status.is_server_error(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?;

        // Check body size after download (in case Content-Length was missing)
        if body.len() as u64 > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(body.len() as u64));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    #[instrument(skip(self))]
    async fn list_slugs(
        &self,
        category: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<String>, FetchError> {
        let request = ProductListRequest::new(category, page, page_size);
        let response: ProductListResponse = self.post_json(PRODUCT_LIST_PATH, &request).await?;

        let slugs: Vec<String> = response
            .results
            .into_iter()
            .filter_map(|summary| summary.slug)
            .filter(|slug| !slug.is_empty())
            .collect();
        debug!(count = slugs.len(), "listed slugs");
        Ok(slugs)
    }

    #[instrument(skip(self))]
    async fn get_record(&self, slug: &str) -> Result<Option<RawProductRecord>, FetchError> {
        let request = ProductDetailRequest::new(slug);
        let response: ProductDetailResponse =
            self.post_json(PRODUCT_DETAIL_PATH, &request).await?;
        Ok(response.product)
    }
}

/// Storefront page for a product slug.
pub fn product_url(base_url: &Url, slug: &str) -> String {
    format!(
        "{}/shop/product/{}",
        base_url.as_str().trim_end_matches('/'),
        slug
    )
}
