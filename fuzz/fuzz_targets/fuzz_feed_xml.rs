#![no_main]

use libfuzzer_sys::fuzz_target;

use feedwerk::core::{Availability, Condition, FeedItem};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let item = FeedItem {
            id: text.into(),
            title: text.into(),
            description: text.into(),
            link: text.into(),
            image_link: Some(text.into()),
            additional_image_link: None,
            availability: Availability::InStock,
            price: "25.00".into(),
            sale_price: Some(text.into()),
            condition: Condition::New,
            brand: Some(text.into()),
        };
        // Must not panic — errors are fine, panics are bugs.
        let _ = feedwerk::feed::to_rss_xml(&[item]);
    }
});
