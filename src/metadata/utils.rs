use crate::document::{HeadDocument, MetaKey, MetaTag};

pub(super) const OG_URL: MetaKey<'static> = MetaKey::Property("og:url");
pub(super) const OG_SITE_NAME: MetaKey<'static> = MetaKey::Property("og:site_name");
pub(super) const OG_DESCRIPTION: MetaKey<'static> = MetaKey::Property("og:description");
pub(super) const DESCRIPTION: MetaKey<'static> = MetaKey::Name("description");
pub(super) const KEYWORDS: MetaKey<'static> = MetaKey::Name("keywords");
pub(super) const AUTHOR: MetaKey<'static> = MetaKey::Name("author");

/// `content` of the first tag matching `key`, verbatim.
pub(super) fn meta_content<D: HeadDocument + ?Sized>(doc: &D, key: MetaKey<'_>) -> Option<String> {
    doc.find_meta(key).and_then(|tag| tag.content)
}

/// First key (in priority order) whose tag exists wins, even if its content is empty.
pub(super) fn first_meta_content<D: HeadDocument + ?Sized>(
    doc: &D,
    keys: &[MetaKey<'_>],
) -> Option<String> {
    keys.iter()
        .find_map(|key| doc.find_meta(*key))
        .and_then(|tag| tag.content)
}

/// Keywords tag: missing tag is `None`, blank content is an empty list.
pub(super) fn split_keywords(tag: Option<MetaTag>) -> Option<Vec<String>> {
    let tag = tag?;
    match tag.content.as_deref() {
        None | Some("") => Some(Vec::new()),
        Some(raw) => Some(raw.split(',').map(str::to_string).collect()),
    }
}
