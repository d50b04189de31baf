use feedwerk::core::{Availability, Condition, FeedItem};
use feedwerk::feed::to_rss_xml;
use quick_xml::Reader;
use quick_xml::events::Event;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn base_item(id: &str) -> FeedItem {
    FeedItem {
        id: id.into(),
        title: "Shirt".into(),
        description: "Soft cotton".into(),
        link: "https://shop.example.com/US/shirt".into(),
        image_link: Some("https://cdn.example.com/front.jpg".into()),
        additional_image_link: None,
        availability: Availability::InStock,
        price: "25.00".into(),
        sale_price: None,
        condition: Condition::New,
        brand: None,
    }
}

// ---------------------------------------------------------------------------
// Document shape
// ---------------------------------------------------------------------------

#[test]
fn empty_feed_is_a_complete_document() {
    let xml = to_rss_xml(&[]).unwrap();
    let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:g="http://base.google.com/ns/1.0">
  <channel>
    <title>Product Feed</title>
    <description>Product Feed for Social Platforms</description>
  </channel>
</rss>"#;
    assert_eq!(xml, expected);
}

#[test]
fn single_item_document() {
    let xml = to_rss_xml(&[base_item("var_1")]).unwrap();
    let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:g="http://base.google.com/ns/1.0">
  <channel>
    <title>Product Feed</title>
    <description>Product Feed for Social Platforms</description>
    <item>
      <g:id>var_1</g:id>
      <g:title>Shirt</g:title>
      <g:description>Soft cotton</g:description>
      <g:link>https://shop.example.com/US/shirt</g:link>
      <g:image_link>https://cdn.example.com/front.jpg</g:image_link>
      <g:availability>in stock</g:availability>
      <g:price>25.00</g:price>
      <g:condition>new</g:condition>
    </item>
  </channel>
</rss>"#;
    assert_eq!(xml, expected);
}

#[test]
fn item_fields_keep_schema_order() {
    let mut item = base_item("var_1");
    item.sale_price = Some("19.99".into());
    item.brand = Some("ACME".into());
    let xml = to_rss_xml(&[item]).unwrap();

    let tags = [
        "<g:id>",
        "<g:title>",
        "<g:description>",
        "<g:link>",
        "<g:image_link>",
        "<g:availability>",
        "<g:price>",
        "<g:sale_price>",
        "<g:condition>",
        "<g:brand>",
    ];
    let positions: Vec<usize> = tags.iter().map(|tag| xml.find(tag).unwrap()).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn every_namespaced_tag_is_closed() {
    let mut item = base_item("var_1");
    item.sale_price = Some("19.99".into());
    item.brand = Some("ACME".into());
    let xml = to_rss_xml(&[item]).unwrap();

    for tag in [
        "g:id",
        "g:title",
        "g:description",
        "g:link",
        "g:image_link",
        "g:availability",
        "g:price",
        "g:sale_price",
        "g:condition",
        "g:brand",
    ] {
        assert_eq!(
            xml.matches(&format!("<{tag}>")).count(),
            xml.matches(&format!("</{tag}>")).count(),
            "unbalanced {tag}"
        );
    }
}

// ---------------------------------------------------------------------------
// Optional fields
// ---------------------------------------------------------------------------

#[test]
fn absent_optionals_are_omitted() {
    let mut item = base_item("var_1");
    item.image_link = None;
    let xml = to_rss_xml(&[item]).unwrap();

    assert!(!xml.contains("<g:image_link>"));
    assert!(!xml.contains("<g:sale_price>"));
    assert!(!xml.contains("<g:brand>"));
    assert!(xml.contains("<g:availability>in stock</g:availability>"));
    assert!(xml.contains("<g:price>25.00</g:price>"));
    assert!(xml.contains("<g:condition>new</g:condition>"));
}

#[test]
fn empty_image_link_and_brand_are_omitted() {
    let mut item = base_item("var_1");
    item.image_link = Some(String::new());
    item.brand = Some(String::new());
    let xml = to_rss_xml(&[item]).unwrap();

    assert!(!xml.contains("<g:image_link>"));
    assert!(!xml.contains("<g:brand>"));
}

#[test]
fn secondary_images_stay_out_of_the_document() {
    let mut item = base_item("var_1");
    item.additional_image_link =
        Some("https://cdn.example.com/a.jpg,https://cdn.example.com/b.jpg".into());
    let xml = to_rss_xml(&[item]).unwrap();

    assert!(!xml.contains("additional_image_link"));
    assert!(!xml.contains("b.jpg"));
}

#[test]
fn out_of_stock_code_is_spelled_out() {
    let mut item = base_item("var_1");
    item.availability = Availability::OutOfStock;
    let xml = to_rss_xml(&[item]).unwrap();

    assert!(xml.contains("<g:availability>out of stock</g:availability>"));
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

#[test]
fn special_characters_are_escaped() {
    let mut item = base_item("var_1");
    item.title = r#"R&D "Edition" <Pro> 'X'"#.into();
    item.link = "https://shop.example.com/US/shirt?color=red&size=m".into();
    let xml = to_rss_xml(&[item]).unwrap();

    assert!(xml.contains("R&amp;D &quot;Edition&quot; &lt;Pro&gt; &apos;X&apos;"));
    assert!(xml.contains("color=red&amp;size=m"));
    assert!(!xml.contains("red&size"));
}

#[test]
fn escaped_text_survives_a_parse() {
    let original = r#"R&D "Edition" <Pro> 'X'"#;
    let mut item = base_item("var_1");
    item.title = original.into();
    let xml = to_rss_xml(&[item]).unwrap();

    let mut reader = Reader::from_str(&xml);
    let mut inside_title = false;
    let mut captured = None;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) if start.name().as_ref() == b"g:title" => inside_title = true,
            Event::Text(text) if inside_title => {
                captured = Some(text.unescape().unwrap().into_owned());
                inside_title = false;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    assert_eq!(captured.as_deref(), Some(original));
}

// ---------------------------------------------------------------------------
// Well-formedness
// ---------------------------------------------------------------------------

#[test]
fn document_parses_with_matching_end_tags() {
    let items: Vec<FeedItem> = (0..3)
        .map(|i| {
            let mut item = base_item(&format!("var_{i}"));
            item.sale_price = Some("19.99".into());
            item
        })
        .collect();
    let xml = to_rss_xml(&items).unwrap();

    // The default reader config rejects mismatched end tags, so a clean
    // pass to EOF is a well-formedness check.
    let mut reader = Reader::from_str(&xml);
    let mut item_count = 0usize;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) if start.name().as_ref() == b"item" => item_count += 1,
            Event::Eof => break,
            _ => {}
        }
    }
    assert_eq!(item_count, 3);
}
