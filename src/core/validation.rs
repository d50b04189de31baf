use super::currencies::is_known_currency_code;
use super::error::ValidationError;
use super::types::FeedRequest;

/// Validate a feed request before any backend call.
/// Returns all validation errors found (not just the first).
pub fn validate_request(request: &FeedRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if request.currency_code.trim().is_empty() {
        errors.push(ValidationError::new(
            "currency_code",
            "currency code must not be empty",
        ));
    } else if request.currency_code.len() != 3 {
        errors.push(ValidationError::new(
            "currency_code",
            "currency code must be 3 characters (ISO 4217)",
        ));
    } else if !is_known_currency_code(&request.currency_code) {
        errors.push(ValidationError::new(
            "currency_code",
            format!(
                "currency code '{}' is not a known ISO 4217 code",
                request.currency_code
            ),
        ));
    }

    if request.country_code.trim().is_empty() {
        errors.push(ValidationError::new(
            "country_code",
            "country code must not be empty",
        ));
    } else if request.country_code.len() != 2
        || !request.country_code.bytes().all(|b| b.is_ascii_alphabetic())
    {
        errors.push(ValidationError::new(
            "country_code",
            "country code must be 2 letters (ISO 3166-1 alpha-2)",
        ));
    }

    errors
}
