//! Namespace-aware `<loc>` extraction with quick-xml.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use super::SITEMAP_NS;
use crate::error::SitemapError;

/// Text collected for the `<loc>` element currently open.
struct OpenLoc {
    /// Element depth at which the `<loc>` was opened.
    depth: usize,
    text: String,
    /// Set once a child element starts; text after that is not part of the URL.
    saw_child: bool,
}

/// Collects the text of every sitemap-namespace `<loc>` element, in document order.
///
/// Text and CDATA up to the first child element are concatenated and
/// entity-unescaped; surrounding whitespace is trimmed and empty `<loc>`
/// elements are skipped. Everything else in the
/// document is ignored, but the document must be well-formed XML.
///
/// # Errors
///
/// Returns [`SitemapError::Parse`] for syntax errors, mismatched or unclosed
/// tags, a missing root element, or content after the root element.
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>, SitemapError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut open_loc: Option<OpenLoc> = None;

    loop {
        let (ns, event) = reader.read_resolved_event().map_err(xml_error)?;
        match event {
            Event::Start(e) => {
                if depth == 0 {
                    check_single_root(&mut saw_root)?;
                }
                if let Some(loc) = open_loc.as_mut() {
                    loc.saw_child = true;
                }
                depth += 1;
                if open_loc.is_none()
                    && is_sitemap_ns(&ns)
                    && e.local_name().as_ref() == b"loc"
                {
                    open_loc = Some(OpenLoc {
                        depth,
                        text: String::new(),
                        saw_child: false,
                    });
                }
            }
            // A self-closing element has no text, so `<loc/>` is simply skipped.
            Event::Empty(_) => {
                if depth == 0 {
                    check_single_root(&mut saw_root)?;
                }
                if let Some(loc) = open_loc.as_mut() {
                    loc.saw_child = true;
                }
            }
            Event::End(_) => {
                if open_loc.as_ref().is_some_and(|loc| loc.depth == depth) {
                    if let Some(loc) = open_loc.take() {
                        let url = loc.text.trim();
                        if !url.is_empty() {
                            urls.push(url.to_string());
                        }
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(t) => {
                if depth == 0 {
                    return Err(outside_root("text"));
                }
                if let Some(loc) = open_loc.as_mut().filter(|loc| !loc.saw_child) {
                    let text = t
                        .unescape()
                        .map_err(|e| SitemapError::Parse(e.to_string()))?;
                    loc.text.push_str(&text);
                }
            }
            Event::CData(c) => {
                if depth == 0 {
                    return Err(outside_root("CDATA"));
                }
                if let Some(loc) = open_loc.as_mut().filter(|loc| !loc.saw_child) {
                    let text = std::str::from_utf8(&c)
                        .map_err(|e| SitemapError::Parse(format!("invalid CDATA: {}", e)))?;
                    loc.text.push_str(text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(SitemapError::Parse("no root element found".to_string()));
    }
    if depth != 0 {
        return Err(SitemapError::Parse(format!(
            "unexpected end of document with {} unclosed element(s)",
            depth
        )));
    }

    tracing::debug!("extracted {} <loc> entries from sitemap", urls.len());
    Ok(urls)
}

fn is_sitemap_ns(ns: &ResolveResult) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == SITEMAP_NS.as_bytes())
}

fn check_single_root(saw_root: &mut bool) -> Result<(), SitemapError> {
    if *saw_root {
        return Err(SitemapError::Parse(
            "more than one root element".to_string(),
        ));
    }
    *saw_root = true;
    Ok(())
}

fn outside_root(what: &str) -> SitemapError {
    SitemapError::Parse(format!("{} outside of the root element", what))
}

fn xml_error(e: quick_xml::Error) -> SitemapError {
    SitemapError::Parse(e.to_string())
}
