//! HTML text extraction helpers shared by the scraping code paths.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Strip inline markup from a snippet.
///
/// Search snippets carry simple highlight tags (`<b>…</b>`); a non-greedy
/// tag sweep is all that is needed, full HTML parsing would be overkill here.
pub fn strip_html_tags(value: &str) -> String {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new("<.*?>").expect("valid tag regex"));
    re.replace_all(value, "").into_owned()
}

/// Compile a fixed CSS selector.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Collect an element's text nodes into one space-joined, trimmed string.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first element matching `css`, or `None` when the element is
/// missing or empty.
pub(crate) fn select_text(page: &Html, css: &str) -> Option<String> {
    let text = page.select(&selector(css)).next().map(|e| element_text(&e))?;
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Split raw text nodes into trimmed, non-blank lines.
pub(crate) fn text_lines<'a>(texts: impl Iterator<Item = &'a str>) -> Vec<String> {
    texts
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(strip_html_tags("<b>세종</b>대왕"), "세종대왕");
        assert_eq!(
            strip_html_tags("plain text without markup"),
            "plain text without markup"
        );
        assert_eq!(strip_html_tags("a <span class=\"hl\">b</span> c"), "a b c");
    }

    #[test]
    fn test_strip_html_tags_is_non_greedy() {
        // A greedy sweep would swallow the text between two tags.
        assert_eq!(strip_html_tags("<b>first</b> and <b>second</b>"), "first and second");
    }

    #[test]
    fn test_element_text_joins_and_trims() {
        let page = Html::parse_document("<div id=\"t\"><p> a </p><p>b</p></div>");
        let el = page.select(&selector("div#t")).next().unwrap();
        assert_eq!(element_text(&el), "a b");
    }

    #[test]
    fn test_select_text_empty_element_is_none() {
        let page = Html::parse_document("<div class=\"x\">  </div>");
        assert_eq!(select_text(&page, "div.x"), None);
        assert_eq!(select_text(&page, "div.missing"), None);
    }

    #[test]
    fn test_text_lines_drops_blanks() {
        let raw = "first\n\n  second  \n\t\nthird";
        assert_eq!(
            text_lines(std::iter::once(raw)),
            vec!["first", "second", "third"]
        );
    }
}
