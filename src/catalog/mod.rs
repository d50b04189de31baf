//! Catalog and inventory collaborator contracts.
//!
//! The feed pipeline never talks to a concrete backend; it is handed
//! implementations of [`CatalogSource`] and [`AvailabilityProvider`] and
//! speaks to them through the wire-shaped types in this module. The query
//! side serializes ([`ProductQuery`]), the response side deserializes
//! ([`ProductPage`] and the product graph below it), so an HTTP or in-process
//! adapter only maps transport errors into [`crate::core::FeedError`].

mod availability;
mod query;
mod types;

pub use availability::*;
pub use query::*;
pub use types::*;
