use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::FeedError;

/// Request for one product's variant availability within one sales channel.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityRequest {
    /// All variant ids of the product, in one call.
    pub variant_ids: Vec<String>,
    /// The sales channel matched for the requested country.
    pub sales_channel_id: String,
}

/// Availability entry for one variant.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VariantAvailability {
    pub availability: AvailabilityFlag,
}

impl VariantAvailability {
    /// Entry reporting the variant as in stock.
    pub fn available() -> Self {
        Self {
            availability: AvailabilityFlag::Available(true),
        }
    }

    /// Entry reporting the variant as out of stock.
    pub fn unavailable() -> Self {
        Self {
            availability: AvailabilityFlag::Available(false),
        }
    }

    /// Entry reporting an available-unit count.
    pub fn in_units(units: i64) -> Self {
        Self {
            availability: AvailabilityFlag::Units(units),
        }
    }
}

/// Raw availability flag as reported by the inventory service.
///
/// Some backends report a boolean, others an available-unit count; zero or
/// negative units mean unavailable.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum AvailabilityFlag {
    Available(bool),
    Units(i64),
}

impl AvailabilityFlag {
    /// Whether the flag denotes sellable stock.
    pub fn is_in_stock(self) -> bool {
        match self {
            Self::Available(available) => available,
            Self::Units(units) => units > 0,
        }
    }
}

/// Inventory availability collaborator.
///
/// Called once per product with all of that product's variant ids and the
/// matched channel id. Implementations bring their own transport; failures
/// surface as [`FeedError::Backend`] and fail the whole run.
#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    /// Resolve per-variant availability. The returned map may omit variants;
    /// a missing entry counts as unavailable.
    async fn variant_availability(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<HashMap<String, VariantAvailability>, FeedError>;
}
