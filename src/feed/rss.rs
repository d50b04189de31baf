//! RSS 2.0 + Google namespace feed serialization using quick-xml.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use super::{FEED_DESCRIPTION, FEED_TITLE, GOOGLE_FEED_NS};
use crate::core::{FeedError, FeedItem};

/// Serialize the complete feed into one UTF-8 XML document string.
///
/// Pure function: no I/O, deterministic output, either a complete document or
/// an error. Every text value goes through the writer's escaping, so no item
/// field is trusted as pre-escaped. An empty slice yields a valid feed with
/// zero `<item>` elements.
pub fn to_rss_xml(items: &[FeedItem]) -> Result<String, FeedError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    // XML declaration
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    // <rss version="2.0" xmlns:g="...">
    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:g", GOOGLE_FEED_NS));
    writer.write_event(Event::Start(rss)).map_err(xml_err)?;

    // <channel> with its fixed header
    writer
        .write_event(Event::Start(BytesStart::new("channel")))
        .map_err(xml_err)?;
    write_text_element(&mut writer, "title", FEED_TITLE)?;
    write_text_element(&mut writer, "description", FEED_DESCRIPTION)?;

    for item in items {
        write_item(&mut writer, item)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("channel")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("rss")))
        .map_err(xml_err)?;

    let buf = writer.into_inner().into_inner();
    String::from_utf8(buf).map_err(|e| FeedError::Xml(format!("XML UTF-8 error: {e}")))
}

/// Write one `<item>`. Field order is fixed by the schema; open and close
/// tags are matched for every field, including the `g:` prefixed ones.
fn write_item(writer: &mut Writer<Cursor<Vec<u8>>>, item: &FeedItem) -> Result<(), FeedError> {
    writer
        .write_event(Event::Start(BytesStart::new("item")))
        .map_err(xml_err)?;

    write_text_element(writer, "g:id", &item.id)?;
    write_text_element(writer, "g:title", &item.title)?;
    write_text_element(writer, "g:description", &item.description)?;
    write_text_element(writer, "g:link", &item.link)?;
    if let Some(image_link) = item.image_link.as_deref().filter(|url| !url.is_empty()) {
        write_text_element(writer, "g:image_link", image_link)?;
    }
    write_text_element(writer, "g:availability", item.availability.code())?;
    write_text_element(writer, "g:price", &item.price)?;
    if let Some(sale_price) = &item.sale_price {
        write_text_element(writer, "g:sale_price", sale_price)?;
    }
    write_text_element(writer, "g:condition", item.condition.code())?;
    if let Some(brand) = item.brand.as_deref().filter(|brand| !brand.is_empty()) {
        write_text_element(writer, "g:brand", brand)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("item")))
        .map_err(xml_err)?;
    Ok(())
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    tag: &str,
    text: &str,
) -> Result<(), FeedError> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(xml_err)?;
    Ok(())
}

fn xml_err(e: std::io::Error) -> FeedError {
    FeedError::Xml(format!("XML write error: {e}"))
}
