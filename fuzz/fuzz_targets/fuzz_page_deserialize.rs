#![no_main]

use libfuzzer_sys::fuzz_target;

use feedwerk::catalog::ProductPage;

fuzz_target!(|data: &[u8]| {
    // Must not panic — errors are fine, panics are bugs.
    let _ = serde_json::from_slice::<ProductPage>(data);
});
