//! Price formatting for feed output.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount for a feed price field — exactly two fraction digits with
/// en-US thousands grouping, matching the storefront's price rendering.
///
/// `1000` → `"1,000.00"`, `49.9` → `"49.90"`, `0` → `"0.00"`.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    // Two fraction digits are guaranteed after rounding; {:.2} only pads.
    let fixed = format!("{:.2}", rounded.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push('.');
    out.push_str(fraction);
    out
}
