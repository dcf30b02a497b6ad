#[cfg(test)]
mod tests {
    use crate::document::*;

    fn doc(html: &str) -> ScraperDocument {
        ScraperParser.parse(html).expect("scraper never fails")
    }

    #[test]
    fn test_find_meta_matches_property_and_name_separately() {
        let d = doc(r#"<head>
            <meta name="og:url" content="by-name">
            <meta property="og:url" content="by-property">
        </head>"#);

        assert_eq!(
            d.find_meta(MetaKey::Property("og:url")),
            Some(MetaTag { content: Some("by-property".into()) })
        );
        assert_eq!(
            d.find_meta(MetaKey::Name("og:url")),
            Some(MetaTag { content: Some("by-name".into()) })
        );
    }

    #[test]
    fn test_find_meta_returns_first_in_document_order() {
        let d = doc(r#"<head>
            <meta name="author" content="first">
            <meta name="author" content="second">
        </head>"#);

        let tag = d.find_meta(MetaKey::Name("author")).unwrap();
        assert_eq!(tag.content.as_deref(), Some("first"));
    }

    #[test]
    fn test_find_meta_distinguishes_missing_and_empty_content() {
        let d = doc(r#"<head>
            <meta name="author">
            <meta name="description" content="">
        </head>"#);

        assert_eq!(d.find_meta(MetaKey::Name("author")).unwrap().content, None);
        assert_eq!(
            d.find_meta(MetaKey::Name("description")).unwrap().content.as_deref(),
            Some("")
        );
        assert_eq!(d.find_meta(MetaKey::Name("keywords")), None);
    }

    #[test]
    fn test_find_meta_value_match_is_case_sensitive() {
        let d = doc(r#"<head><meta property="OG:URL" content="x"></head>"#);
        assert_eq!(d.find_meta(MetaKey::Property("og:url")), None);
    }

    #[test]
    fn test_find_meta_attribute_names_are_case_insensitive() {
        let d = doc(r#"<head><META PROPERTY="og:url" CONTENT="x"></head>"#);
        let tag = d.find_meta(MetaKey::Property("og:url")).unwrap();
        assert_eq!(tag.content.as_deref(), Some("x"));
    }

    #[test]
    fn test_find_meta_looks_outside_head() {
        let d = doc(r#"<html><head></head><body><meta name="author" content="body"></body></html>"#);
        let tag = d.find_meta(MetaKey::Name("author")).unwrap();
        assert_eq!(tag.content.as_deref(), Some("body"));
    }

    #[test]
    fn test_title_is_whitespace_collapsed() {
        let d = doc("<head><title>\n  Hello \t  World  \n</title></head>");
        assert_eq!(d.title().as_deref(), Some("Hello World"));
    }

    #[test]
    fn test_title_empty_element_is_empty_string() {
        let d = doc("<head><title></title></head>");
        assert_eq!(d.title().as_deref(), Some(""));
    }

    #[test]
    fn test_title_missing_element_is_none() {
        let d = doc("<head></head>");
        assert_eq!(d.title(), None);
    }

    #[test]
    fn test_title_uses_first_element() {
        let d = doc("<head><title>One</title><title>Two</title></head>");
        assert_eq!(d.title().as_deref(), Some("One"));
    }

    #[test]
    fn test_collapse_keeps_non_ascii_whitespace() {
        assert_eq!(collapse_ascii_whitespace("  a\u{00A0}b  "), "a\u{00A0}b");
        assert_eq!(collapse_ascii_whitespace(" \r\n\t "), "");
    }

    #[test]
    fn test_meta_key_exposes_attr_and_value() {
        assert_eq!(MetaKey::Property("og:url").attr(), "property");
        assert_eq!(MetaKey::Name("author").attr(), "name");
        assert_eq!(MetaKey::Name("author").value(), "author");
        assert_eq!(ScraperParser.name(), "scraper");
    }

    #[test]
    fn test_title_ignores_svg_title_text() {
        let d = doc("<html><head></head><body><svg><title>Icon</title></svg></body></html>");
        assert_eq!(d.title().as_deref(), Some(""));
    }

    #[test]
    fn test_title_prefers_html_title_over_earlier_svg_title() {
        let d = doc("<svg><title>Icon</title></svg><title>Real</title>");
        assert_eq!(d.title().as_deref(), Some("Real"));
    }

    #[test]
    fn test_find_meta_skips_template_contents() {
        let d = doc(r#"<head><template><meta name="author" content="tmpl"></template></head>"#);
        assert_eq!(d.find_meta(MetaKey::Name("author")), None);
    }

    #[test]
    fn test_find_meta_after_template_is_found() {
        let d = doc(r#"<head>
            <template><meta name="author" content="tmpl"></template>
            <meta name="author" content="real">
        </head>"#);
        let tag = d.find_meta(MetaKey::Name("author")).unwrap();
        assert_eq!(tag.content.as_deref(), Some("real"));
    }

    #[test]
    fn test_title_inside_template_is_not_a_title() {
        let d = doc("<head><template><title>Hidden</title></template></head>");
        assert_eq!(d.title(), None);
    }
}
