use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::{Config, ConfigError};
use crate::extractor::{CanonicalRow, accepts, normalize};
use crate::fetcher::{CatalogSource, product_url};
use crate::harvest::queue::CandidateQueue;
use crate::harvest::sampler::collect_random_slugs;

/// Largest number of slugs requested in one refill.
const MAX_REFILL: usize = 50;
/// Refills ask for a few more slugs than attempts remain.
const REFILL_SLACK: usize = 10;

/// Result of one harvest run.
#[derive(Debug)]
pub struct HarvestOutcome {
    /// Accepted rows, in acceptance order.
    pub rows: Vec<CanonicalRow>,
    pub attempts: usize,
    /// Records fetched but rejected by the completeness check.
    pub rejected: usize,
    /// Slugs whose fetch failed or returned no product.
    pub failed: usize,
    pub cancelled: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Fetches candidate products until enough complete rows are found or the
/// attempt budget runs out.
pub struct Harvester<C> {
    catalog: C,
    config: Config,
    storefront: Url,
    rng: StdRng,
    shutdown: CancellationToken,
}

impl<C: CatalogSource> Harvester<C> {
    pub fn new(catalog: C, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let storefront = Url::parse(&config.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;

        Ok(Self {
            catalog,
            config,
            storefront,
            rng: StdRng::from_entropy(),
            shutdown: CancellationToken::new(),
        })
    }

    /// Use a fixed RNG, e.g. a seeded one for reproducible sampling.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Stop between attempts once `token` is cancelled.
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn run(&mut self) -> HarvestOutcome {
        let started_at = Utc::now();
        let target = self.config.target;
        let max_attempts = self.config.max_attempts();

        info!(
            wanted = target,
            categories = self.config.categories.len(),
            max_attempts,
            "starting harvest"
        );

        let mut queue = CandidateQueue::new();
        let mut rows = Vec::new();
        let mut attempts = 0;
        let mut rejected = 0;
        let mut failed = 0;

        while rows.len() < target && attempts < max_attempts {
            if self.shutdown.is_cancelled() {
                break;
            }

            if queue.is_empty() {
                let batch_size = MAX_REFILL.min(max_attempts - attempts + REFILL_SLACK);
                let slugs = collect_random_slugs(
                    &self.catalog,
                    &self.config.categories,
                    batch_size,
                    self.config.page_size,
                    self.config.delay,
                    &mut self.rng,
                )
                .await;
                let added = queue.refill(slugs);
                debug!(added, batch_size, "refilled candidate queue");
            }

            let Some(slug) = queue.pop() else {
                info!("no untested candidates left");
                break;
            };
            attempts += 1;
            debug!(attempt = attempts, %slug, found = rows.len(), wanted = target, "testing");

            let record = match self.catalog.get_record(&slug).await {
                Ok(Some(record)) => record,
                Ok(None) => {
                    debug!(%slug, "no product for slug");
                    failed += 1;
                    continue;
                }
                Err(e) => {
                    warn!(%slug, error = %e, retriable = e.should_retry(), "failed to fetch product");
                    failed += 1;
                    continue;
                }
            };

            let row = normalize(&record, &product_url(&self.storefront, &slug));
            match accepts(&row) {
                (true, _) => {
                    debug!(name = %row.product_name, "complete");
                    rows.push(row);
                }
                (false, missing) => {
                    rejected += 1;
                    if let Some(column) = missing {
                        debug!(%slug, missing = %column, "incomplete");
                    }
                }
            }

            self.pause(self.config.delay).await;
        }

        let cancelled = self.shutdown.is_cancelled();
        if cancelled {
            warn!("harvest cancelled");
        }
        info!(
            rejected,
            failed,
            "found {} complete products after {} attempts",
            rows.len(),
            attempts
        );

        HarvestOutcome {
            rows,
            attempts,
            rejected,
            failed,
            cancelled,
            started_at,
            finished_at: Utc::now(),
        }
    }

    async fn pause(&self, delay: Duration) {
        tokio::select! {
            _ = sleep(delay) => {}
            _ = self.shutdown.cancelled() => {}
        }
    }
}
