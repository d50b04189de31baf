use std::collections::HashMap;

use super::FeedConfig;
use crate::catalog::{Product, ProductImage, VariantAvailability};
use crate::core::{Condition, FeedItem, FeedRequest, format_price};

/// Per-variant records flattened from one product, plus the number of
/// malformed records (product or variant) that were skipped.
pub(crate) struct ProductRecords {
    pub(crate) items: Vec<FeedItem>,
    pub(crate) skipped: usize,
}

impl ProductRecords {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
        }
    }

    fn skipped_product() -> Self {
        Self {
            items: Vec::new(),
            skipped: 1,
        }
    }
}

/// Flatten one product into feed records, one per variant.
///
/// `availability` is the product's per-variant mapping, or `None` when no
/// sales channel served the requested country and no lookup was made.
/// Malformed data never aborts the run: a product missing its title or
/// handle is skipped whole, a variant missing its id or calculated price is
/// skipped alone, and both are logged.
pub(crate) fn product_records(
    product: &Product,
    availability: Option<&HashMap<String, VariantAvailability>>,
    request: &FeedRequest,
    config: &FeedConfig,
) -> ProductRecords {
    if product.variants.is_empty() {
        tracing::debug!(product = %product.id, "product has no variants, contributes no items");
        return ProductRecords::empty();
    }
    let Some(title) = product.title.as_deref().filter(|t| !t.trim().is_empty()) else {
        tracing::warn!(product = %product.id, "product missing title, skipping");
        return ProductRecords::skipped_product();
    };
    let Some(handle) = product.handle.as_deref().filter(|h| !h.trim().is_empty()) else {
        tracing::warn!(product = %product.id, "product missing handle, skipping");
        return ProductRecords::skipped_product();
    };

    let mut records = ProductRecords::empty();
    records.items.reserve(product.variants.len());

    for variant in &product.variants {
        if variant.id.trim().is_empty() {
            tracing::warn!(product = %product.id, "variant missing id, skipping");
            records.skipped += 1;
            continue;
        }
        let Some(price) = variant.calculated_price else {
            tracing::warn!(
                product = %product.id,
                variant = %variant.id,
                "variant missing calculated price, skipping"
            );
            records.skipped += 1;
            continue;
        };

        let (price_amount, sale_amount) = price.price_split();
        records.items.push(FeedItem {
            id: variant.id.clone(),
            title: title.to_string(),
            description: product.description.clone().unwrap_or_default(),
            link: config.product_link(&request.country_code, handle),
            image_link: product.thumbnail.clone().filter(|url| !url.is_empty()),
            additional_image_link: join_image_links(&product.images),
            availability: variant.stock_status(availability),
            price: format_price(price_amount),
            sale_price: sale_amount.map(format_price),
            condition: Condition::default(),
            brand: None,
        });
    }
    records
}

fn join_image_links(images: &[ProductImage]) -> Option<String> {
    let urls: Vec<&str> = images
        .iter()
        .map(|image| image.url.as_str())
        .filter(|url| !url.is_empty())
        .collect();
    if urls.is_empty() {
        None
    } else {
        Some(urls.join(","))
    }
}
