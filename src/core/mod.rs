//! Core feed types, money formatting, and input validation.
//!
//! This module provides the foundational types for product feed generation:
//! the flattened [`FeedItem`] record, the run input, the error taxonomy, and
//! the price formatter the transformer renders amounts with.

mod currencies;
mod error;
mod money;
mod types;
mod validation;

pub use currencies::is_known_currency_code;
pub use error::*;
pub use money::format_price;
pub use types::*;
pub use validation::*;
