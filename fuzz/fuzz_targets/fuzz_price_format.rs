#![no_main]

use libfuzzer_sys::fuzz_target;

use feedwerk::core::format_price;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    let amount = i64::from_le_bytes(data[..8].try_into().unwrap());
    let scale = u32::from_le_bytes(data[8..12].try_into().unwrap()) % 29;
    // Must not panic for any representable decimal.
    let _ = format_price(Decimal::new(amount, scale));
});
