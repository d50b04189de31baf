//! ISO 4217 currency code validation.
//!
//! Backs feed-request validation with a lookup of commonly used ISO 4217
//! codes. Catalog backends store currency codes lowercase while feed requests
//! conventionally carry uppercase, so the lookup folds case before searching.

/// Check whether `code` is a known ISO 4217 currency code (case-insensitive).
pub fn is_known_currency_code(code: &str) -> bool {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    let upper = code.to_ascii_uppercase();
    CURRENCY_CODES.binary_search(&upper.as_str()).is_ok()
}

/// Sorted list of common ISO 4217 currency codes.
/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AED", // UAE Dirham
    "AMD", // Armenian Dram
    "AUD", // Australian Dollar
    "BGN", // Bulgarian Lev
    "BRL", // Brazilian Real
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "CZK", // Czech Koruna
    "DKK", // Danish Krone
    "EGP", // Egyptian Pound
    "EUR", // Euro
    "GBP", // Pound Sterling
    "GEL", // Georgian Lari
    "HKD", // Hong Kong Dollar
    "HRK", // Croatian Kuna
    "HUF", // Hungarian Forint
    "IDR", // Indonesian Rupiah
    "ILS", // Israeli Shekel
    "INR", // Indian Rupee
    "ISK", // Icelandic Krona
    "JPY", // Japanese Yen
    "KES", // Kenyan Shilling
    "KRW", // South Korean Won
    "KZT", // Kazakhstani Tenge
    "MXN", // Mexican Peso
    "MYR", // Malaysian Ringgit
    "NGN", // Nigerian Naira
    "NOK", // Norwegian Krone
    "NZD", // New Zealand Dollar
    "PHP", // Philippine Peso
    "PLN", // Polish Zloty
    "RON", // Romanian Leu
    "RUB", // Russian Ruble
    "SAR", // Saudi Riyal
    "SEK", // Swedish Krona
    "SGD", // Singapore Dollar
    "THB", // Thai Baht
    "TRY", // Turkish Lira
    "TWD", // New Taiwan Dollar
    "UAH", // Ukrainian Hryvnia
    "USD", // US Dollar
    "VND", // Vietnamese Dong
    "ZAR", // South African Rand
];
