pub mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::document::{HeadDocument, HtmlParser, ScraperDocument};
use crate::error::Result;

/// Extract URL, site name, title, description, keywords and author from an HTML document.
///
/// Each field is resolved on its own; a missing tag only blanks its own field.
///
/// ## Examples
/// ```
/// let meta = headmeta::extract(
///     r#"<head><meta property="og:description" content="A">
///        <meta name="description" content="B"></head>"#,
/// );
/// assert_eq!(meta.description.as_deref(), Some("A"));
/// assert_eq!(meta.title, None);
/// ```
pub fn extract(html: &str) -> Metadata {
    Metadata::from_document(&ScraperDocument::parse(html))
}

/// Same as [`extract`], with a caller-supplied parser.
///
/// A parser failure is returned unchanged; this function adds no recovery of its own.
pub fn extract_with<P: HtmlParser>(parser: &P, html: &str) -> Result<Metadata> {
    let doc = parser.parse(html)?;
    Ok(Metadata::from_document(&doc))
}

impl Metadata {
    /// Run the six field rules against an already parsed document.
    pub fn from_document<D: HeadDocument + ?Sized>(doc: &D) -> Self {
        Self {
            url: meta_content(doc, OG_URL),
            site_name: meta_content(doc, OG_SITE_NAME),
            title: doc.title(),
            description: first_meta_content(doc, &[OG_DESCRIPTION, DESCRIPTION]),
            keywords: split_keywords(doc.find_meta(KEYWORDS)),
            author: meta_content(doc, AUTHOR),
        }
    }

    /// True when no field resolved at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
