use futures::stream::{self, Stream};

use super::PAGE_SIZE;
use crate::catalog::{CatalogSource, Product, ProductQuery};
use crate::core::FeedError;

/// Cursor over the backend's paginated product set.
///
/// Fresh per run. The total is unknown until the first response reports it,
/// so `exhausted` stays false until then and the loop always issues at least
/// one request (an empty catalog costs exactly one).
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageCursor {
    offset: usize,
    total: Option<usize>,
}

impl PageCursor {
    pub(crate) fn new() -> Self {
        Self {
            offset: 0,
            total: None,
        }
    }

    /// Offset for the next page request.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// True once the offset has reached the reported total.
    pub(crate) fn exhausted(&self) -> bool {
        self.total.is_some_and(|total| self.offset >= total)
    }

    /// Record the latest reported total and advance by the full page size.
    /// The page size is a backend contract, not an item count: pages that
    /// yield fewer usable products still advance the cursor fully.
    pub(crate) fn advance(&mut self, reported_total: usize) {
        self.total = Some(reported_total);
        self.offset += PAGE_SIZE;
    }
}

/// Lazy, finite sequence of product pages.
///
/// Requests are strictly sequential because each offset depends on the
/// previous response. Every call starts a fresh cursor at offset 0, so the
/// sequence is restartable. A backend error ends the stream and fails the
/// run.
pub(crate) fn product_pages<'a, C>(
    catalog: &'a C,
    currency_code: &'a str,
) -> impl Stream<Item = Result<Vec<Product>, FeedError>> + 'a
where
    C: CatalogSource + ?Sized,
{
    stream::try_unfold(PageCursor::new(), move |mut cursor| async move {
        if cursor.exhausted() {
            return Ok(None);
        }
        let query = ProductQuery::published(currency_code, cursor.offset(), PAGE_SIZE);
        let page = catalog.fetch_products(&query).await?;
        tracing::debug!(
            offset = cursor.offset(),
            total = page.metadata.count,
            products = page.data.len(),
            "fetched catalog page"
        );
        cursor.advance(page.metadata.count);
        Ok(Some((page.data, cursor)))
    })
}
