use async_trait::async_trait;
use serde::Serialize;

use super::types::{ProductPage, ProductStatus};
use crate::core::FeedError;

/// Projection the feed pipeline requests for every product page.
///
/// Relations are pulled eagerly so one page query carries everything the
/// transformer needs: variants with calculated prices, and sales channels
/// with their stock locations.
pub const PRODUCT_FEED_FIELDS: &[&str] = &[
    "id",
    "title",
    "description",
    "handle",
    "thumbnail",
    "images.*",
    "status",
    "variants.*",
    "variants.calculated_price.*",
    "sales_channels.*",
    "sales_channels.stock_locations.*",
];

/// One page request against the catalog backend.
#[derive(Debug, Clone, Serialize)]
pub struct ProductQuery {
    /// Queried entity, always `"product"`.
    pub entity: &'static str,
    /// Eager field projection, always [`PRODUCT_FEED_FIELDS`].
    pub fields: &'static [&'static str],
    /// Status filter; the feed only ever exports published products.
    pub filters: StatusFilter,
    /// Price resolution context.
    pub context: QueryContext,
    /// Page window.
    pub pagination: Pagination,
}

impl ProductQuery {
    /// Page request for published products with prices in `currency_code`.
    pub fn published(currency_code: &str, offset: usize, limit: usize) -> Self {
        Self {
            entity: "product",
            fields: PRODUCT_FEED_FIELDS,
            filters: StatusFilter {
                status: ProductStatus::Published,
            },
            context: QueryContext {
                variants: VariantContext {
                    calculated_price: PriceContext {
                        currency_code: currency_code.to_string(),
                    },
                },
            },
            pagination: Pagination { offset, limit },
        }
    }
}

/// `filters` object of a [`ProductQuery`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusFilter {
    pub status: ProductStatus,
}

/// `context` object of a [`ProductQuery`]; nests the way the backend expects
/// price-resolution context under `variants.calculated_price`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryContext {
    pub variants: VariantContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantContext {
    pub calculated_price: PriceContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceContext {
    pub currency_code: String,
}

/// `pagination` object of a [`ProductQuery`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

/// Catalog backend collaborator.
///
/// Implementations bring their own transport and storage; failures surface as
/// [`FeedError::Backend`] and fail the whole run without internal retries.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of products. The reported `metadata.count` must be the
    /// filter-wide total so the paginator can decide when the set is
    /// exhausted.
    async fn fetch_products(&self, query: &ProductQuery) -> Result<ProductPage, FeedError>;
}
