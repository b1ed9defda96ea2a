//! HTML poster generation.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use pourtrait_model::GroupedStock;

use crate::common::{beer_details, spirit_details, wine_details};
use crate::text::DEFAULT_TITLE;

/// Options for HTML poster rendering.
#[derive(Debug, Clone, Default)]
pub struct HtmlPosterOptions {
    /// Page and heading title; `None` renders the default.
    pub title: Option<String>,
}

/// Embedded stylesheet for the standalone page.
const POSTER_STYLE: &str = "\
body { font-family: Georgia, serif; margin: 2rem auto; max-width: 42rem; }
h1 { text-align: center; letter-spacing: 0.3em; }
h2 { border-bottom: 1px solid #999; text-transform: uppercase; }
ul { list-style: none; padding: 0; }
li { padding: 0.25rem 0; }
.detail { color: #666; margin-left: 0.5rem; }";

/// Render a grouped stock as a standalone HTML page.
///
/// One `section` per category in beer, wine, spirit, unknown order;
/// empty sections are skipped. Entry names and details are escaped, so
/// raw submitted text cannot inject markup.
pub fn render_html_poster(stock: &GroupedStock, options: &HtmlPosterOptions) -> Result<String> {
    let title = options.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::DocType(BytesText::new("html")))?;

    let mut html = BytesStart::new("html");
    html.push_attribute(("lang", "en"));
    xml.write_event(Event::Start(html))?;

    xml.write_event(Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "utf-8"));
    xml.write_event(Event::Empty(meta))?;
    write_text_element(&mut xml, "title", title)?;
    write_text_element(&mut xml, "style", POSTER_STYLE)?;
    xml.write_event(Event::End(BytesEnd::new("head")))?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;
    write_text_element(&mut xml, "h1", title)?;

    let beers: Vec<(String, String)> = stock
        .beers
        .iter()
        .map(|entry| (entry.name.clone(), beer_details(entry)))
        .collect();
    let wines: Vec<(String, String)> = stock
        .wines
        .iter()
        .map(|entry| (entry.name.clone(), wine_details(entry)))
        .collect();
    let spirits: Vec<(String, String)> = stock
        .spirits
        .iter()
        .map(|entry| (entry.name.clone(), spirit_details(entry)))
        .collect();
    let unknowns: Vec<(String, String)> = stock
        .unknowns
        .iter()
        .map(|record| (record.raw_text.clone(), String::new()))
        .collect();

    write_section(&mut xml, "beer", "Beer", &beers)?;
    write_section(&mut xml, "wine", "Wine", &wines)?;
    write_section(&mut xml, "spirit", "Spirit", &spirits)?;
    write_section(&mut xml, "unknown", "Unknown", &unknowns)?;

    xml.write_event(Event::End(BytesEnd::new("body")))?;
    xml.write_event(Event::End(BytesEnd::new("html")))?;

    String::from_utf8(xml.into_inner()).context("poster output was not valid UTF-8")
}

fn write_section<W: Write>(
    xml: &mut Writer<W>,
    class: &str,
    heading: &str,
    items: &[(String, String)],
) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    let mut section = BytesStart::new("section");
    section.push_attribute(("class", class));
    xml.write_event(Event::Start(section))?;
    write_text_element(xml, "h2", heading)?;
    xml.write_event(Event::Start(BytesStart::new("ul")))?;
    for (name, detail) in items {
        xml.write_event(Event::Start(BytesStart::new("li")))?;
        write_span(xml, "name", name)?;
        if !detail.is_empty() {
            write_span(xml, "detail", detail)?;
        }
        xml.write_event(Event::End(BytesEnd::new("li")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("ul")))?;
    xml.write_event(Event::End(BytesEnd::new("section")))?;
    Ok(())
}

fn write_span<W: Write>(xml: &mut Writer<W>, class: &str, text: &str) -> Result<()> {
    let mut span = BytesStart::new("span");
    span.push_attribute(("class", class));
    xml.write_event(Event::Start(span))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new("span")))?;
    Ok(())
}

/// Write a simple text element.
fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
