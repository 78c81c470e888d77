//! Link extraction from HTML pages

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Extract the `href` targets of all anchor tags, in document order.
///
/// Only double-quoted attributes are recognized. Targets are returned as
/// written; filtering to in-corpus pages happens during the crawl.
pub fn extract_links(content: &str) -> Vec<String> {
    ANCHOR_HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_links() {
        let content = r#"<html><body>
            <a href="2.html">Two</a>
            <a href="3.html">Three</a>
        </body></html>"#;
        let links = extract_links(content);

        assert_eq!(links, vec!["2.html", "3.html"]);
    }

    #[test]
    fn test_extract_with_other_attributes() {
        let content = r#"<a class="nav" id="x" href="search.html">Search</a>"#;
        assert_eq!(extract_links(content), vec!["search.html"]);
    }

    #[test]
    fn test_ignores_non_anchor_tags() {
        let content = r#"<link href="style.css"><img src="a.png"><area href="map.html">"#;
        assert!(extract_links(content).is_empty());
    }

    #[test]
    fn test_keeps_duplicates_and_external() {
        let content = r#"<a href="a.html">1</a><a href="a.html">2</a><a href="https://example.com">3</a>"#;
        let links = extract_links(content);

        assert_eq!(links.len(), 3);
        assert_eq!(links[2], "https://example.com");
    }

    #[test]
    fn test_empty_href() {
        assert_eq!(extract_links(r#"<a href="">x</a>"#), vec![""]);
    }
}
