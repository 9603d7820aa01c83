//! Full-text article payload.

use serde::{Deserialize, Serialize};

/// The full bilingual text of one annals article.
///
/// `text_url` and `image_url` are derived deterministically from the document
/// id and are always present, even when every content field came back empty;
/// a caller can still hand the URLs to a browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDetail {
    /// 자료ID: unique identifier for the article, trimmed.
    pub document_id: String,

    /// 기사명: human-readable article title.
    pub article_title: Option<String>,

    /// Combined heading shown on the page (reign year, date).
    pub heading: Option<String>,

    /// Modern Korean translation paragraphs, in document reading order.
    pub translation_paragraphs: Vec<String>,

    /// Classical Chinese original paragraphs, in document reading order.
    pub original_paragraphs: Vec<String>,

    /// Digital content identifier copied from the page.
    pub dci: Option<String>,

    /// Direct text-view endpoint for this article.
    pub text_url: String,

    /// Direct image-viewer endpoint for this article.
    pub image_url: String,
}

impl ArticleDetail {
    /// Create an empty payload carrying only the id and the derived URLs.
    pub(crate) fn new(
        document_id: impl Into<String>,
        text_url: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            article_title: None,
            heading: None,
            translation_paragraphs: Vec::new(),
            original_paragraphs: Vec::new(),
            dci: None,
            text_url: text_url.into(),
            image_url: image_url.into(),
        }
    }
}
