//! Engine configuration.

use std::time::Duration;

/// Production search endpoint (XML envelope).
const SEARCH_URL: &str = "http://db.itkc.or.kr/openapi/search";
/// Production node (detail) page.
const NODE_URL: &str = "https://db.itkc.or.kr/dir/node";
/// Production outlink text/image page.
const OUTLINK_URL: &str = "https://db.itkc.or.kr/dir/outLink";
/// Production print popup.
const PRINT_URL: &str = "https://db.itkc.or.kr/popup/print.do";

/// Endpoints and transport settings for the Korean Classics DB.
///
/// [`Default`] points at the production service; tests substitute their own
/// endpoints to run the engine against a local mock server.
#[derive(Debug, Clone)]
pub struct AnnalsConfig {
    /// Search API endpoint, returns the XML result envelope.
    pub search_url: String,

    /// Canonical article (node) page, first tier of detail resolution.
    pub node_url: String,

    /// Outlink page, used both for the derived text/image URLs and as the
    /// last fallback tier.
    pub outlink_url: String,

    /// Print popup, second fallback tier.
    pub print_url: String,

    /// User agent sent on every outbound request. The service serves reduced
    /// pages to clients it does not recognize as browsers.
    pub user_agent: String,

    /// Referer sent on node page requests only.
    pub referer: String,

    /// Fixed per-request timeout.
    pub timeout: Duration,
}

impl Default for AnnalsConfig {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            node_url: NODE_URL.to_string(),
            outlink_url: OUTLINK_URL.to_string(),
            print_url: PRINT_URL.to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/126.0 Safari/537.36"
                .to_string(),
            referer: "https://db.itkc.or.kr/dir/item?itemId=JT".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_production() {
        let config = AnnalsConfig::default();
        assert!(config.search_url.starts_with("http://db.itkc.or.kr"));
        assert!(config.node_url.starts_with("https://db.itkc.or.kr"));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
