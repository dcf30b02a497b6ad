//! HTML parsing seam.
//!
//! The extractor only needs two questions answered by a parsed page: "which is the first
//! `<meta>` carrying this `name`/`property`?" and "what is the document title?". Those live
//! behind [`HeadDocument`], and [`HtmlParser`] turns raw markup into one. The default pair is
//! backed by `scraper` (html5ever), which recovers from any input and therefore never fails.

mod tests;

use scraper::{ElementRef, Html};

use crate::error::Result;
use crate::selectors::{META_SELECTOR, TITLE_SELECTOR};

/// Attribute + value predicate for a `<meta>` lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKey<'a> {
    /// `<meta property="...">` (Open Graph style).
    Property(&'a str),
    /// `<meta name="...">` (standard HTML style).
    Name(&'a str),
}

impl<'a> MetaKey<'a> {
    pub fn attr(&self) -> &'static str {
        match self {
            MetaKey::Property(_) => "property",
            MetaKey::Name(_) => "name",
        }
    }

    pub fn value(&self) -> &'a str {
        match self {
            MetaKey::Property(v) | MetaKey::Name(v) => *v,
        }
    }
}

/// A matched `<meta>` element, reduced to what the extractor reads from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaTag {
    /// Raw `content` attribute; `None` when the attribute is not written at all.
    pub content: Option<String>,
}

/// A parsed page that can answer head-level lookups.
pub trait HeadDocument {
    /// First `<meta>` in document order matching `key`. Later duplicates are ignored.
    fn find_meta(&self, key: MetaKey<'_>) -> Option<MetaTag>;

    /// Resolved document title, or `None` when the page has no `<title>` element.
    fn title(&self) -> Option<String>;
}

/// Turns HTML text into a [`HeadDocument`].
pub trait HtmlParser: Send + Sync {
    type Document: HeadDocument;

    fn name(&self) -> &'static str;

    fn parse(&self, html: &str) -> Result<Self::Document>;
}

/// Default parser backed by `scraper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperParser;

impl HtmlParser for ScraperParser {
    type Document = ScraperDocument;

    fn name(&self) -> &'static str {
        "scraper"
    }

    fn parse(&self, html: &str) -> Result<ScraperDocument> {
        Ok(ScraperDocument::parse(html))
    }
}

/// A full document tree produced by html5ever.
pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

impl HeadDocument for ScraperDocument {
    fn find_meta(&self, key: MetaKey<'_>) -> Option<MetaTag> {
        self.html
            .select(&META_SELECTOR)
            .filter(|el| !is_in_template(el))
            .find(|el| el.value().attr(key.attr()) == Some(key.value()))
            .map(|el| MetaTag {
                content: el.value().attr("content").map(str::to_string),
            })
    }

    fn title(&self) -> Option<String> {
        let mut titles = self
            .html
            .select(&TITLE_SELECTOR)
            .filter(|el| !is_in_template(el))
            .peekable();
        // Any `title` (SVG included) makes the field present; only an HTML one supplies text.
        titles.peek()?;
        let text = titles
            .find(|el| &*el.value().name.ns == HTML_NAMESPACE)
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();
        Some(collapse_ascii_whitespace(&text))
    }
}

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Template contents are inert, so lookups never see them.
fn is_in_template(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "template")
}

/// Strip leading/trailing ASCII whitespace and collapse inner runs to a single space,
/// the way a browser resolves `document.title`.
pub(crate) fn collapse_ascii_whitespace(text: &str) -> String {
    text.split(|c: char| matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' '))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
