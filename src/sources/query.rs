//! Query-string assembly for the search API.
//!
//! The search endpoint takes either a plain `keyword` parameter or a single
//! composite `q` parameter that packs several logical fields into one value:
//!
//! ```text
//! q=query†<percent-encoded term>$opDir†<bibliography id>[$opExt†Y]
//! ```
//!
//! The `†` and `$` separators are part of the wire format and must reach the
//! server as literal characters; only the search term between them is
//! percent-encoded. A generic form encoder would escape the separators and
//! break the parameter, so the whole convention lives behind this module.

/// The term half of a search request: a plain keyword or a pre-assembled
/// composite value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchTerm {
    /// Percent-encoded normally as `keyword=`.
    Keyword(String),
    /// Appended verbatim as `q=`; built by [`composite_query`].
    Composite(String),
}

/// Build the composite `q` value.
///
/// The search term is percent-encoded exactly once; the separators and the
/// bibliography ID stay literal. `opExt†Y` is appended only when extended
/// matching was requested, never as `opExt†N`.
pub(crate) fn composite_query(
    query: &str,
    bibliography_id: Option<&str>,
    extended: bool,
) -> String {
    let mut parts = vec![format!("query†{}", urlencoding::encode(query))];
    if let Some(id) = bibliography_id {
        parts.push(format!("opDir†{id}"));
    }
    if extended {
        parts.push("opExt†Y".to_string());
    }
    parts.join("$")
}

/// Assemble the full search URL.
///
/// `secId`, `start` and `rows` need no escaping (fixed codes and integers).
/// A keyword term is percent-encoded normally; a composite term is appended
/// untouched so its separators survive.
pub(crate) fn search_url(
    base: &str,
    sec_id: &str,
    start: u32,
    rows: u32,
    term: &SearchTerm,
) -> String {
    let mut url = format!("{base}?secId={sec_id}&start={start}&rows={rows}");
    match term {
        SearchTerm::Keyword(query) => {
            url.push_str("&keyword=");
            url.push_str(&urlencoding::encode(query));
        }
        SearchTerm::Composite(value) => {
            url.push_str("&q=");
            url.push_str(value);
        }
    }
    url
}

/// Build a URL from a base and ordinary key/value parameters, all values
/// percent-encoded. Used for every endpoint except the composite search.
pub(crate) fn encoded_url(base: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_separators_stay_literal() {
        let q = composite_query("정도전", Some("ITKC_JT_A0"), false);
        assert_eq!(q, "query†%EC%A0%95%EB%8F%84%EC%A0%84$opDir†ITKC_JT_A0");
        assert!(q.contains('†'));
        assert!(q.contains('$'));
        assert!(!q.contains("%E2%80%A0"), "† must not be percent-encoded");
        assert!(!q.contains("%24"), "$ must not be percent-encoded");
    }

    #[test]
    fn test_composite_round_trip_reserved_characters() {
        for original in ["a&b", "50%", "two words", "&%  %&", "세종 & 한글"] {
            let q = composite_query(original, Some("ITKC_JT_D0"), false);
            let encoded = q
                .strip_prefix("query†")
                .and_then(|rest| rest.split('$').next())
                .unwrap();
            let decoded = urlencoding::decode(encoded).unwrap();
            assert_eq!(decoded, original, "round trip of {original:?}");
        }
    }

    #[test]
    fn test_composite_extended_flag() {
        let q = composite_query("왜란", Some("ITKC_JT_N0"), true);
        assert!(q.ends_with("$opExt†Y"));

        let q = composite_query("왜란", Some("ITKC_JT_N0"), false);
        assert!(!q.contains("opExt"), "opExt must be omitted, not set to N");

        // Extended matching without a scope filter is still a composite.
        let q = composite_query("왜란", None, true);
        assert_eq!(q, format!("query†{}$opExt†Y", urlencoding::encode("왜란")));
    }

    #[test]
    fn test_search_url_keyword_is_fully_encoded() {
        let term = SearchTerm::Keyword("a&b c".to_string());
        let url = search_url("http://example.com/search", "JT_AA", 0, 20, &term);
        assert_eq!(
            url,
            "http://example.com/search?secId=JT_AA&start=0&rows=20&keyword=a%26b%20c"
        );

        let parsed = url::Url::parse(&url).unwrap();
        let keyword = parsed
            .query_pairs()
            .find(|(key, _)| key == "keyword")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert_eq!(keyword, "a&b c");
    }

    #[test]
    fn test_search_url_composite_appended_verbatim() {
        let term = SearchTerm::Composite(composite_query("세종", Some("ITKC_JT_D0"), false));
        let url = search_url("http://example.com/search", "JT_BD", 40, 10, &term);
        assert_eq!(
            url,
            "http://example.com/search?secId=JT_BD&start=40&rows=10\
             &q=query†%EC%84%B8%EC%A2%85$opDir†ITKC_JT_D0"
        );
    }

    #[test]
    fn test_encoded_url() {
        let url = encoded_url(
            "https://example.com/dir/node",
            &[("gubun", "book"), ("dataGubun", "최종정보"), ("dataId", "X")],
        );
        assert_eq!(
            url,
            "https://example.com/dir/node?gubun=book\
             &dataGubun=%EC%B5%9C%EC%A2%85%EC%A0%95%EB%B3%B4&dataId=X"
        );
    }
}
