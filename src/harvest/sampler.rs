use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::fetcher::CatalogSource;

/// Extra slugs requested per category beyond its even share of the total.
const PER_CATEGORY_OVERFETCH: usize = 5;

/// Walk a category's listing pages collecting up to `max` unique slugs.
///
/// Stops at the first empty page, at a page that adds nothing new, or on a
/// listing error (logged; whatever was collected so far is kept).
pub async fn category_slugs<C>(
    catalog: &C,
    category: &str,
    max: usize,
    page_size: u32,
    delay: Duration,
) -> Vec<String>
where
    C: CatalogSource + ?Sized,
{
    let mut slugs = Vec::new();
    let mut seen = HashSet::new();
    let mut page = 1;

    while slugs.len() < max {
        let batch = match catalog.list_slugs(category, page, page_size).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(category, page, error = %e, "failed to list category page");
                break;
            }
        };
        if batch.is_empty() {
            break;
        }

        let before = slugs.len();
        for slug in batch {
            if seen.insert(slug.clone()) {
                slugs.push(slug);
                if slugs.len() >= max {
                    break;
                }
            }
        }

        page += 1;
        sleep(delay).await;

        if slugs.len() == before {
            break;
        }
    }

    debug!(category, count = slugs.len(), "collected category slugs");
    slugs
}

/// Up to `total` unique slugs drawn from all `categories`.
///
/// Each category contributes its even share plus a small overfetch. When more
/// than `total` come back the pool is shuffled before truncating, so repeated
/// batches sample different products.
pub async fn collect_random_slugs<C, R>(
    catalog: &C,
    categories: &[String],
    total: usize,
    page_size: u32,
    delay: Duration,
    rng: &mut R,
) -> Vec<String>
where
    C: CatalogSource + ?Sized,
    R: Rng + ?Sized,
{
    if categories.is_empty() {
        return Vec::new();
    }
    let per_category = (total / categories.len()).max(1) + PER_CATEGORY_OVERFETCH;

    let mut pool = Vec::new();
    let mut seen = HashSet::new();
    for category in categories {
        for slug in category_slugs(catalog, category, per_category, page_size, delay).await {
            if seen.insert(slug.clone()) {
                pool.push(slug);
            }
        }
    }

    if pool.len() > total {
        pool.shuffle(rng);
        pool.truncate(total);
    }
    pool
}
