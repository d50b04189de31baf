use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use feedwerk::catalog::*;
use feedwerk::core::{FeedError, FeedRequest};
use feedwerk::feed::{FeedConfig, FeedGenerator};

/// In-memory stand-in for a catalog backend.
struct DemoBackend {
    products: Vec<Product>,
}

#[async_trait]
impl CatalogSource for DemoBackend {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<ProductPage, FeedError> {
        let data = self
            .products
            .iter()
            .skip(query.pagination.offset)
            .take(query.pagination.limit)
            .cloned()
            .collect();
        Ok(ProductPage {
            data,
            metadata: PageMetadata {
                count: self.products.len(),
            },
        })
    }
}

#[async_trait]
impl AvailabilityProvider for DemoBackend {
    async fn variant_availability(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<HashMap<String, VariantAvailability>, FeedError> {
        // First variant of each product in stock, the rest sold out.
        Ok(request
            .variant_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let entry = if i == 0 {
                    VariantAvailability::in_units(12)
                } else {
                    VariantAvailability::unavailable()
                };
                (id.clone(), entry)
            })
            .collect())
    }
}

fn demo_product(id: &str, title: &str, handle: &str, variants: Vec<Variant>) -> Product {
    Product {
        id: id.into(),
        title: Some(title.into()),
        description: Some("Everyday essential in organic cotton".into()),
        handle: Some(handle.into()),
        thumbnail: Some(format!("https://cdn.example.com/{handle}.jpg")),
        images: vec![ProductImage {
            url: format!("https://cdn.example.com/{handle}-back.jpg"),
        }],
        status: ProductStatus::Published,
        variants,
        sales_channels: vec![SalesChannel {
            id: "ch_us".into(),
            stock_locations: vec![StockLocation {
                address: Some(LocationAddress {
                    country_code: Some("US".into()),
                }),
            }],
        }],
    }
}

#[tokio::main]
async fn main() {
    let backend = DemoBackend {
        products: vec![
            demo_product(
                "prod_shirt",
                "Crew Neck Shirt",
                "crew-neck-shirt",
                vec![
                    Variant {
                        id: "var_shirt_s".into(),
                        manage_inventory: true,
                        calculated_price: Some(CalculatedPrice {
                            calculated_amount: dec!(25),
                            original_amount: None,
                        }),
                    },
                    Variant {
                        id: "var_shirt_m".into(),
                        manage_inventory: true,
                        calculated_price: Some(CalculatedPrice {
                            calculated_amount: dec!(25),
                            original_amount: None,
                        }),
                    },
                ],
            ),
            demo_product(
                "prod_coat",
                "Winter Coat",
                "winter-coat",
                vec![Variant {
                    id: "var_coat".into(),
                    manage_inventory: false,
                    calculated_price: Some(CalculatedPrice {
                        calculated_amount: dec!(800),
                        original_amount: Some(dec!(1000)),
                    }),
                }],
            ),
        ],
    };
    let catalog = DemoBackend {
        products: backend.products.clone(),
    };

    let generator = FeedGenerator::new(
        catalog,
        backend,
        FeedConfig::new("https://shop.example.com"),
    );
    let request = FeedRequest::new("USD", "US");

    let xml = generator
        .generate(&request)
        .await
        .expect("demo backend never fails");

    println!("{xml}");
    println!("---");
    println!(
        "{} bytes, {} items",
        xml.len(),
        xml.matches("<item>").count()
    );
}
