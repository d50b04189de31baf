//! Product feed generation pipeline.
//!
//! Pulls paginated catalog data, derives per-variant availability and
//! pricing, and serializes the result into one Google-namespace RSS
//! document. Collaborators are injected explicitly; the pipeline holds no
//! ambient state and every run starts with a fresh cursor and a fresh item
//! collection.
//!
//! # Example
//!
//! ```no_run
//! use feedwerk::core::FeedRequest;
//! use feedwerk::feed::{FeedConfig, FeedGenerator};
//! # use std::collections::HashMap;
//! # use feedwerk::catalog::*;
//! # use feedwerk::core::FeedError;
//! # struct Backend;
//! # #[async_trait::async_trait]
//! # impl CatalogSource for Backend {
//! #     async fn fetch_products(&self, _: &ProductQuery) -> Result<ProductPage, FeedError> {
//! #         Ok(ProductPage { data: Vec::new(), metadata: PageMetadata { count: 0 } })
//! #     }
//! # }
//! # #[async_trait::async_trait]
//! # impl AvailabilityProvider for Backend {
//! #     async fn variant_availability(
//! #         &self,
//! #         _: &AvailabilityRequest,
//! #     ) -> Result<HashMap<String, VariantAvailability>, FeedError> {
//! #         Ok(HashMap::new())
//! #     }
//! # }
//! # async fn run() -> Result<(), FeedError> {
//! let config = FeedConfig::new("https://shop.example.com");
//! let generator = FeedGenerator::new(Backend, Backend, config);
//! let xml = generator.generate(&FeedRequest::new("USD", "US")).await?;
//! # Ok(())
//! # }
//! ```

mod paginate;
mod rss;
mod transform;

use std::collections::HashMap;

use futures::{TryStreamExt, future};

use crate::catalog::{
    AvailabilityProvider, AvailabilityRequest, CatalogSource, Product, VariantAvailability,
};
use crate::core::{FeedError, FeedItem, FeedRequest, validate_request};

pub use rss::to_rss_xml;

/// Fixed page size of the catalog traversal (a backend contract).
pub const PAGE_SIZE: usize = 100;

/// Google Merchant feed namespace bound to the `g:` prefix.
pub const GOOGLE_FEED_NS: &str = "http://base.google.com/ns/1.0";

/// Fixed channel title of the generated feed.
pub const FEED_TITLE: &str = "Product Feed";

/// Fixed channel description of the generated feed.
pub const FEED_DESCRIPTION: &str = "Product Feed for Social Platforms";

const STOREFRONT_URL_VAR: &str = "STOREFRONT_URL";

/// Storefront configuration for link building.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the storefront, with or without a trailing slash.
    pub storefront_base_url: String,
}

impl FeedConfig {
    /// Configuration with an explicit storefront base URL.
    pub fn new(storefront_base_url: impl Into<String>) -> Self {
        Self {
            storefront_base_url: storefront_base_url.into(),
        }
    }

    /// Read the storefront base URL from the `STOREFRONT_URL` environment
    /// variable.
    pub fn from_env() -> Result<Self, FeedError> {
        match std::env::var(STOREFRONT_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => Err(FeedError::Config(format!(
                "{STOREFRONT_URL_VAR} is not set"
            ))),
        }
    }

    /// Storefront URL of a product page: `{base}/{country_code}/{handle}`.
    pub fn product_link(&self, country_code: &str, handle: &str) -> String {
        format!(
            "{}/{}/{}",
            self.storefront_base_url.trim_end_matches('/'),
            country_code,
            handle
        )
    }
}

/// Generates complete product feeds from injected collaborators.
///
/// One generator can serve sequential runs: no state crosses invocations, so
/// an abandoned run publishes nothing and leaves nothing behind.
pub struct FeedGenerator<C, A> {
    catalog: C,
    availability: A,
    config: FeedConfig,
}

impl<C, A> FeedGenerator<C, A>
where
    C: CatalogSource,
    A: AvailabilityProvider,
{
    /// Build a generator from explicit collaborators.
    pub fn new(catalog: C, availability: A, config: FeedConfig) -> Self {
        Self {
            catalog,
            availability,
            config,
        }
    }

    /// Run the full pipeline: paginate, derive, serialize.
    ///
    /// Returns the complete XML document, or the first error. There is no
    /// partial output and no internal retry.
    pub async fn generate(&self, request: &FeedRequest) -> Result<String, FeedError> {
        let items = self.collect_items(request).await?;
        rss::to_rss_xml(&items)
    }

    /// Paginate the catalog and derive the flat feed records without
    /// serializing them.
    pub async fn collect_items(&self, request: &FeedRequest) -> Result<Vec<FeedItem>, FeedError> {
        let errors = validate_request(request);
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FeedError::Validation(joined));
        }

        let mut items: Vec<FeedItem> = Vec::new();
        let mut skipped = 0usize;

        let pages = paginate::product_pages(&self.catalog, &request.currency_code);
        futures::pin_mut!(pages);
        while let Some(products) = pages.try_next().await? {
            // Availability lookups within a page are independent; fan them
            // out and reassemble by product position.
            let lookups = products
                .iter()
                .map(|product| self.product_availability(product, &request.country_code));
            let availability_by_product = future::try_join_all(lookups).await?;

            for (product, availability) in products.iter().zip(&availability_by_product) {
                let records = transform::product_records(
                    product,
                    availability.as_ref(),
                    request,
                    &self.config,
                );
                items.extend(records.items);
                skipped += records.skipped;
            }
        }

        tracing::info!(
            items = items.len(),
            skipped,
            currency = %request.currency_code,
            country = %request.country_code,
            "collected feed items"
        );
        Ok(items)
    }

    /// One availability lookup per product, carrying all variant ids and the
    /// matched channel id. `None` when the product has no variants or no
    /// channel serves the country (no lookup is made).
    async fn product_availability(
        &self,
        product: &Product,
        country_code: &str,
    ) -> Result<Option<HashMap<String, VariantAvailability>>, FeedError> {
        if product.variants.is_empty() {
            return Ok(None);
        }
        let Some(channel) = product.channel_serving(country_code) else {
            return Ok(None);
        };
        let request = AvailabilityRequest {
            variant_ids: product
                .variants
                .iter()
                .map(|variant| variant.id.clone())
                .collect(),
            sales_channel_id: channel.id.clone(),
        };
        let map = self.availability.variant_availability(&request).await?;
        Ok(Some(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_link_trims_trailing_slash() {
        let config = FeedConfig::new("https://shop.example.com/");
        assert_eq!(
            config.product_link("US", "shirt"),
            "https://shop.example.com/US/shirt"
        );
    }

    #[test]
    fn product_link_without_trailing_slash() {
        let config = FeedConfig::new("https://shop.example.com");
        assert_eq!(
            config.product_link("DE", "hose"),
            "https://shop.example.com/DE/hose"
        );
    }
}
