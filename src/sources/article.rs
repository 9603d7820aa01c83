//! Full-text article resolution across the service's three page layouts.
//!
//! No single endpoint reliably carries both text columns plus the headings,
//! so resolution walks a fixed tier order - node page, print popup, outlink
//! page - merging whatever each tier supplies. A field filled by an earlier
//! tier is never overwritten by a later one, and only empty extracted
//! content triggers the next tier; a transport failure at any tier is a
//! request failure, not a reason to fall through.

use regex::Regex;
use scraper::Html;
use std::sync::OnceLock;

use crate::models::ArticleDetail;
use crate::sources::query::encoded_url;
use crate::sources::{AnnalsSource, SourceError};
use crate::utils::{element_text, select_text, selector, text_lines};

/// Structural containers the print view has been observed to use, in the
/// order they should be probed.
const PRINT_CONTAINERS: [&str; 4] = [
    "div.view_txt",
    "div.view_con",
    "div.view_area",
    "div#printArea",
];

impl AnnalsSource {
    /// Fetch both text columns and the page metadata for one article.
    ///
    /// The document id is trimmed before any use; an empty id is rejected
    /// before the first request goes out. Whatever content survives the tier
    /// walk is returned together with the two derived URLs - partial content
    /// is a valid outcome, not an error.
    pub fn fetch_article(&self, document_id: &str) -> Result<ArticleDetail, SourceError> {
        let id = document_id.trim();
        if id.is_empty() {
            return Err(SourceError::InvalidRequest(
                "document_id must not be empty".to_string(),
            ));
        }

        let text_url = encoded_url(
            &self.config.outlink_url,
            &[("linkType", "txt"), ("dataId", id)],
        );
        let image_url = encoded_url(
            &self.config.outlink_url,
            &[("linkType", "img"), ("dataId", id)],
        );
        let mut detail = ArticleDetail::new(id, text_url, image_url);

        let body = self.fetch_node_page(id)?;
        {
            let page = Html::parse_document(&body);
            detail.heading = select_text(&page, "div.list_tit2 h3");
            detail.article_title = select_text(&page, "div.text_body_tit h4");
            detail.translation_paragraphs = column_paragraphs(&page, "div.ins_view_left");
            detail.original_paragraphs = column_paragraphs(&page, "div.ins_view_right");
            detail.dci = page
                .select(&selector("a[data-dci-copy]"))
                .next()
                .and_then(|a| a.value().attr("data-dci-copy"))
                .map(str::to_string);
        }

        if detail.translation_paragraphs.is_empty() || detail.original_paragraphs.is_empty() {
            match print_article_code(&body) {
                Some(code) => {
                    if detail.translation_paragraphs.is_empty() {
                        detail.translation_paragraphs = self.fetch_print_paragraphs(&code, "kor")?;
                    }
                    if detail.original_paragraphs.is_empty() {
                        detail.original_paragraphs = self.fetch_print_paragraphs(&code, "chn")?;
                    }
                }
                None => {
                    tracing::debug!(document_id = id, "node page has no print code; tier skipped");
                }
            }
        }

        if detail.translation_paragraphs.is_empty()
            || detail.original_paragraphs.is_empty()
            || detail.heading.is_none()
            || detail.article_title.is_none()
        {
            self.fill_from_outlink(&mut detail)?;
        }

        if detail.translation_paragraphs.is_empty() && detail.original_paragraphs.is_empty() {
            tracing::warn!(
                document_id = id,
                "no text recovered from any tier; returning URLs only"
            );
        }

        Ok(detail)
    }

    /// Tier 1: the canonical node page.
    fn fetch_node_page(&self, id: &str) -> Result<String, SourceError> {
        let url = encoded_url(
            &self.config.node_url,
            &[
                ("itemId", "JT"),
                ("gubun", "book"),
                ("dataGubun", "최종정보"),
                ("dataId", id),
            ],
        );
        tracing::debug!(url, "fetching node page");
        let response = self
            .client
            .get(&url)
            .header("Referer", self.config.referer.as_str())
            .send()
            .map_err(|e| SourceError::Network(format!("node page request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "node page returned status {}",
                response.status()
            )));
        }

        response
            .text()
            .map_err(|e| SourceError::Network(format!("failed to read node page: {e}")))
    }

    /// Tier 2: the print popup, one fetch per missing column
    /// (`gubun` is `kor` for the translation, `chn` for the original).
    fn fetch_print_paragraphs(
        &self,
        article_code: &str,
        gubun: &str,
    ) -> Result<Vec<String>, SourceError> {
        let url = encoded_url(
            &self.config.print_url,
            &[("id", article_code), ("gubun", gubun)],
        );
        tracing::debug!(url, "fetching print view");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| SourceError::Network(format!("print view request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "print view returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .map_err(|e| SourceError::Network(format!("failed to read print view: {e}")))?;
        let page = Html::parse_document(&body);

        for css in PRINT_CONTAINERS {
            if let Some(container) = page.select(&selector(css)).next() {
                let paragraphs: Vec<String> = container
                    .select(&selector("p"))
                    .map(|p| element_text(&p))
                    .filter(|text| !text.is_empty())
                    .collect();
                if !paragraphs.is_empty() {
                    return Ok(paragraphs);
                }
                return Ok(text_lines(container.text()));
            }
        }

        // No known container at all; take every visible line on the page.
        Ok(text_lines(page.root_element().text()))
    }

    /// Tier 3: the outlink text page. Fills only the fields that are still
    /// empty after the earlier tiers.
    fn fill_from_outlink(&self, detail: &mut ArticleDetail) -> Result<(), SourceError> {
        let url = encoded_url(
            &self.config.outlink_url,
            &[("linkType", "txt"), ("dataId", &detail.document_id)],
        );
        tracing::debug!(url, "fetching outlink text page");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| SourceError::Network(format!("outlink request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "outlink page returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .map_err(|e| SourceError::Network(format!("failed to read outlink page: {e}")))?;
        let page = Html::parse_document(&body);

        if detail.heading.is_none() {
            detail.heading = select_text(&page, "div.list_tit2 h3");
        }
        if detail.article_title.is_none() {
            detail.article_title = select_text(&page, "div.text_body_tit h4");
        }
        if detail.translation_paragraphs.is_empty() {
            detail.translation_paragraphs = column_paragraphs(&page, "div.ins_view_left");
        }
        if detail.original_paragraphs.is_empty() {
            detail.original_paragraphs = column_paragraphs(&page, "div.ins_view_right");
        }
        Ok(())
    }
}

/// Pull the paragraph nodes of one text column.
fn column_paragraphs(page: &Html, container: &str) -> Vec<String> {
    let sel = selector(&format!("{container} p.paragraph"));
    page.select(&sel)
        .map(|p| element_text(&p))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Article code for the print view, scraped from the node page's inline
/// script (`popPrint('<code>', …)`).
fn print_article_code(html: &str) -> Option<String> {
    static POP_PRINT_RE: OnceLock<Regex> = OnceLock::new();
    let re = POP_PRINT_RE
        .get_or_init(|| Regex::new(r"popPrint\('([^']+)'").expect("valid popPrint regex"));
    re.captures(html).map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_article_code() {
        let html = "<script>function p() { popPrint('JT_D0_12345', 'kor'); }</script>";
        assert_eq!(print_article_code(html).as_deref(), Some("JT_D0_12345"));

        assert_eq!(print_article_code("<script>noop()</script>"), None);
        assert_eq!(print_article_code("popPrint(code)"), None);
    }

    #[test]
    fn test_column_paragraphs_order_and_filtering() {
        let page = Html::parse_document(
            "<div class=\"ins_view_left\">\
               <p class=\"paragraph\">첫째</p>\
               <p class=\"other\">skipped</p>\
               <p class=\"paragraph\">  </p>\
               <p class=\"paragraph\">둘째</p>\
             </div>",
        );
        assert_eq!(
            column_paragraphs(&page, "div.ins_view_left"),
            vec!["첫째", "둘째"]
        );
        assert!(column_paragraphs(&page, "div.ins_view_right").is_empty());
    }
}
