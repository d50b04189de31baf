//! # feedwerk
//!
//! Shopping-feed export library: paginated catalog extraction, per-variant
//! availability and sale-price derivation, and Google-namespace RSS 2.0
//! serialization.
//!
//! All monetary amounts use [`rust_decimal::Decimal`] — never floating
//! point. Prices are formatted exactly once, at the feed boundary.
//!
//! ## Quick Start
//!
//! ```rust
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
//! use feedwerk::core::FeedRequest;
//! use feedwerk::feed::{FeedConfig, FeedGenerator};
//!
//! let config = FeedConfig::new("https://shop.example.com");
//! let generator = FeedGenerator::new(Backend, Backend, config);
//! let xml = futures::executor::block_on(
//!     generator.generate(&FeedRequest::new("USD", "US")),
//! ).unwrap();
//!
//! assert!(xml.contains("<rss version=\"2.0\""));
//! assert!(xml.contains("<title>Product Feed</title>"));
//! ```

pub mod catalog;
pub mod core;
pub mod feed;

// Re-export core types at crate root for convenience
pub use crate::core::*;
