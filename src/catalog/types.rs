use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::availability::VariantAvailability;
use crate::core::Availability;

/// One page of catalog results.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
    /// Products in this page, at most `pagination.limit` of them.
    pub data: Vec<Product>,
    /// Filter-wide metadata reported with every page.
    pub metadata: PageMetadata,
}

/// Pagination metadata attached to each page.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageMetadata {
    /// Total number of products matching the filter, independent of pagination.
    pub count: usize,
}

/// Product status as stored by the catalog backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Proposed,
    Published,
    Rejected,
}

/// A catalog product in the projection the feed consumes.
///
/// Text fields the backend may omit are structurally optional; the
/// transformer in [`crate::feed`] decides which holes make a record
/// malformed and which merely default.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Backend product identifier.
    pub id: String,
    /// Product title; a product without one is skipped as malformed.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-text description; empty when absent.
    #[serde(default)]
    pub description: Option<String>,
    /// URL slug; required for link building, skipped as malformed when missing.
    #[serde(default)]
    pub handle: Option<String>,
    /// Primary image URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Secondary images.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Publication status; the feed query filters on `published`.
    pub status: ProductStatus,
    /// Purchasable variants; a product with none contributes no feed items.
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Sales channels with their stock locations, used for country matching.
    #[serde(default)]
    pub sales_channels: Vec<SalesChannel>,
}

impl Product {
    /// First sales channel with a stock location in `country_code`
    /// (ASCII case-insensitive). First match wins; channels are not ranked.
    pub fn channel_serving(&self, country_code: &str) -> Option<&SalesChannel> {
        self.sales_channels
            .iter()
            .find(|channel| channel.serves_country(country_code))
    }
}

/// Secondary product image.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

/// One purchasable variant with its resolved price.
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    /// Variant identifier; becomes `g:id` in the feed.
    pub id: String,
    /// Whether the backend tracks inventory for this variant. Untracked
    /// variants are always in stock.
    pub manage_inventory: bool,
    /// Price-list resolution result for the requested currency; a variant
    /// without one is skipped as malformed.
    #[serde(default)]
    pub calculated_price: Option<CalculatedPrice>,
}

impl Variant {
    /// Stock status for this variant given the product's availability
    /// mapping, or `None` when no sales channel served the country (no
    /// lookup was made and the variant counts as in stock).
    pub fn stock_status(
        &self,
        availability: Option<&HashMap<String, VariantAvailability>>,
    ) -> Availability {
        if !self.manage_inventory {
            return Availability::InStock;
        }
        match availability {
            None => Availability::InStock,
            Some(map) => {
                if map
                    .get(&self.id)
                    .is_some_and(|entry| entry.availability.is_in_stock())
                {
                    Availability::InStock
                } else {
                    Availability::OutOfStock
                }
            }
        }
    }
}

/// Calculated price for one variant in one currency context.
///
/// Amounts arrive as JSON numbers, hence the float serde modules; inside the
/// crate they are always `Decimal`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CalculatedPrice {
    /// Final amount after promotions.
    #[serde(with = "rust_decimal::serde::float")]
    pub calculated_amount: Decimal,
    /// List amount before promotions, when the backend distinguishes one.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub original_amount: Option<Decimal>,
}

impl CalculatedPrice {
    /// Split into listing price and optional sale price.
    ///
    /// A present, non-zero original amount is the canonical listing price;
    /// the calculated amount becomes the sale price only when strictly lower
    /// than it. A zero original amount counts as absent.
    pub fn price_split(&self) -> (Decimal, Option<Decimal>) {
        match self.original_amount {
            Some(original) if !original.is_zero() => {
                let sale = (self.calculated_amount < original).then_some(self.calculated_amount);
                (original, sale)
            }
            _ => (self.calculated_amount, None),
        }
    }
}

/// A distribution context (storefront) with its stock locations.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesChannel {
    pub id: String,
    #[serde(default)]
    pub stock_locations: Vec<StockLocation>,
}

impl SalesChannel {
    /// Whether any stock location of this channel sits in `country_code`.
    pub fn serves_country(&self, country_code: &str) -> bool {
        self.stock_locations.iter().any(|location| {
            location
                .address
                .as_ref()
                .and_then(|address| address.country_code.as_deref())
                .is_some_and(|code| code.eq_ignore_ascii_case(country_code))
        })
    }
}

/// A warehouse or store the channel ships from.
#[derive(Debug, Clone, Deserialize)]
pub struct StockLocation {
    #[serde(default)]
    pub address: Option<LocationAddress>,
}

/// Address of a stock location; only the country matters to the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAddress {
    #[serde(default)]
    pub country_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Availability;
    use rust_decimal_macros::dec;

    fn variant(id: &str, manage_inventory: bool) -> Variant {
        Variant {
            id: id.into(),
            manage_inventory,
            calculated_price: Some(CalculatedPrice {
                calculated_amount: dec!(25),
                original_amount: None,
            }),
        }
    }

    fn channel(id: &str, countries: &[&str]) -> SalesChannel {
        SalesChannel {
            id: id.into(),
            stock_locations: countries
                .iter()
                .map(|code| StockLocation {
                    address: Some(LocationAddress {
                        country_code: Some((*code).into()),
                    }),
                })
                .collect(),
        }
    }

    fn product_with_channels(channels: Vec<SalesChannel>) -> Product {
        Product {
            id: "prod_1".into(),
            title: Some("Shirt".into()),
            description: None,
            handle: Some("shirt".into()),
            thumbnail: None,
            images: Vec::new(),
            status: ProductStatus::Published,
            variants: vec![variant("var_1", true)],
            sales_channels: channels,
        }
    }

    // --------- price derivation ---------

    #[test]
    fn price_split_discount() {
        let price = CalculatedPrice {
            calculated_amount: dec!(800),
            original_amount: Some(dec!(1000)),
        };
        assert_eq!(price.price_split(), (dec!(1000), Some(dec!(800))));
    }

    #[test]
    fn price_split_no_original() {
        let price = CalculatedPrice {
            calculated_amount: dec!(500),
            original_amount: None,
        };
        assert_eq!(price.price_split(), (dec!(500), None));
    }

    #[test]
    fn price_split_zero_original_counts_as_absent() {
        let price = CalculatedPrice {
            calculated_amount: dec!(500),
            original_amount: Some(dec!(0)),
        };
        assert_eq!(price.price_split(), (dec!(500), None));
    }

    #[test]
    fn price_split_equal_amounts_suppress_sale() {
        let price = CalculatedPrice {
            calculated_amount: dec!(500),
            original_amount: Some(dec!(500)),
        };
        assert_eq!(price.price_split(), (dec!(500), None));
    }

    #[test]
    fn price_split_inverted_amounts_suppress_sale() {
        let price = CalculatedPrice {
            calculated_amount: dec!(600),
            original_amount: Some(dec!(500)),
        };
        assert_eq!(price.price_split(), (dec!(500), None));
    }

    // --------- availability derivation ---------

    #[test]
    fn unmanaged_inventory_is_always_in_stock() {
        let v = variant("var_1", false);
        assert_eq!(v.stock_status(None), Availability::InStock);

        let mut map = HashMap::new();
        map.insert("var_1".to_string(), VariantAvailability::unavailable());
        assert_eq!(v.stock_status(Some(&map)), Availability::InStock);
    }

    #[test]
    fn managed_without_mapping_is_in_stock() {
        let v = variant("var_1", true);
        assert_eq!(v.stock_status(None), Availability::InStock);
    }

    #[test]
    fn managed_with_missing_entry_is_out_of_stock() {
        let v = variant("var_1", true);
        let map = HashMap::new();
        assert_eq!(v.stock_status(Some(&map)), Availability::OutOfStock);
    }

    #[test]
    fn managed_with_false_flag_is_out_of_stock() {
        let v = variant("var_1", true);
        let mut map = HashMap::new();
        map.insert("var_1".to_string(), VariantAvailability::unavailable());
        assert_eq!(v.stock_status(Some(&map)), Availability::OutOfStock);
    }

    #[test]
    fn managed_with_true_flag_is_in_stock() {
        let v = variant("var_1", true);
        let mut map = HashMap::new();
        map.insert("var_1".to_string(), VariantAvailability::available());
        assert_eq!(v.stock_status(Some(&map)), Availability::InStock);
    }

    // --------- channel matching ---------

    #[test]
    fn first_matching_channel_wins() {
        let product = product_with_channels(vec![
            channel("ch_eu", &["DE", "FR"]),
            channel("ch_us_1", &["US"]),
            channel("ch_us_2", &["US"]),
        ]);
        let matched = product.channel_serving("US").unwrap();
        assert_eq!(matched.id, "ch_us_1");
    }

    #[test]
    fn channel_matching_is_case_insensitive() {
        let product = product_with_channels(vec![channel("ch_us", &["us"])]);
        assert!(product.channel_serving("US").is_some());
    }

    #[test]
    fn no_channel_for_country() {
        let product = product_with_channels(vec![channel("ch_eu", &["DE"])]);
        assert!(product.channel_serving("US").is_none());
    }

    #[test]
    fn location_without_address_does_not_match() {
        let product = product_with_channels(vec![SalesChannel {
            id: "ch_bare".into(),
            stock_locations: vec![StockLocation { address: None }],
        }]);
        assert!(product.channel_serving("US").is_none());
    }

    // --------- wire format ---------

    #[test]
    fn product_page_deserialization() {
        let json = r#"{
            "data": [{
                "id": "prod_1",
                "title": "Shirt",
                "description": "Soft cotton",
                "handle": "shirt",
                "thumbnail": "https://cdn.example.com/shirt.jpg",
                "images": [{"url": "https://cdn.example.com/shirt-back.jpg"}],
                "status": "published",
                "variants": [{
                    "id": "var_1",
                    "manage_inventory": true,
                    "calculated_price": {"calculated_amount": 800, "original_amount": 1000}
                }],
                "sales_channels": [{
                    "id": "ch_us",
                    "stock_locations": [{"address": {"country_code": "us"}}]
                }]
            }],
            "metadata": {"count": 1}
        }"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.metadata.count, 1);
        let product = &page.data[0];
        assert_eq!(product.status, ProductStatus::Published);
        let price = product.variants[0].calculated_price.unwrap();
        assert_eq!(price.calculated_amount, dec!(800));
        assert_eq!(price.original_amount, Some(dec!(1000)));
        assert!(product.channel_serving("US").is_some());
    }

    #[test]
    fn sparse_product_deserialization() {
        // Backend rows with projection holes must still deserialize; the
        // transformer decides what is malformed.
        let json = r#"{
            "id": "prod_2",
            "status": "published",
            "variants": [{"id": "var_9", "manage_inventory": false}],
            "sales_channels": [{"id": "ch_1", "stock_locations": [{"address": null}]}]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.handle.is_none());
        assert!(product.variants[0].calculated_price.is_none());
        assert!(product.channel_serving("US").is_none());
    }
}
