use serde::{Deserialize, Serialize};

/// Input for one feed-generation run.
///
/// Prices are resolved in `currency_code`; channel matching and storefront
/// links use `country_code`. One run produces one single-currency,
/// single-country feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedRequest {
    /// ISO 4217 currency code the calculated prices are evaluated in (e.g. "USD").
    pub currency_code: String,
    /// ISO 3166-1 alpha-2 country code for channel matching and links (e.g. "US").
    pub country_code: String,
}

impl FeedRequest {
    /// Convenience constructor.
    pub fn new(currency_code: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            country_code: country_code.into(),
        }
    }
}

/// One sellable variant, flattened for feed output.
///
/// Field names follow the Google Merchant `g:` attribute vocabulary. Price
/// fields are pre-formatted strings; the serializer escapes everything, so no
/// field here is treated as pre-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// g:id — variant identifier, non-empty.
    pub id: String,
    /// g:title — product title, non-empty.
    pub title: String,
    /// g:description — may be empty, never absent.
    pub description: String,
    /// g:link — storefront URL `{base}/{country}/{handle}`.
    pub link: String,
    /// g:image_link — primary image URL, omitted when the product has no thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
    /// Comma-joined secondary image URLs. Collected for downstream consumers
    /// but not part of the serialized item (the fixed schema omits it).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_image_link: Option<String>,
    /// g:availability — stock status for the requested country.
    pub availability: Availability,
    /// g:price — formatted listing price.
    pub price: String,
    /// g:sale_price — formatted discounted price, present only during a discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    /// g:condition — item condition, `New` unless the catalog says otherwise.
    pub condition: Condition,
    /// g:brand — omitted when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// g:availability — enumerated stock status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// "in stock"
    InStock,
    /// "out of stock"
    OutOfStock,
}

impl Availability {
    /// Feed attribute value.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InStock => "in stock",
            Self::OutOfStock => "out of stock",
        }
    }

    /// Parse from a feed attribute value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "in stock" => Some(Self::InStock),
            "out of stock" => Some(Self::OutOfStock),
            _ => None,
        }
    }
}

/// g:condition — item condition codes supported by the feed schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// "new" — the default; current catalog collaborators never supply one.
    #[default]
    New,
    /// "refurbished"
    Refurbished,
    /// "used"
    Used,
}

impl Condition {
    /// Feed attribute value.
    pub fn code(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Refurbished => "refurbished",
            Self::Used => "used",
        }
    }

    /// Parse from a feed attribute value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(Self::New),
            "refurbished" => Some(Self::Refurbished),
            "used" => Some(Self::Used),
            _ => None,
        }
    }
}
