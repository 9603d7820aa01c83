//! Annals search against the Korean Classics DB open API.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

use crate::config::AnnalsConfig;
use crate::models::{
    AdvancedSearchRequest, AnnalsDocument, SearchRequest, SearchResponse,
};
use crate::sources::query::{composite_query, search_url, SearchTerm};
use crate::sources::{kings, SourceError};
use crate::utils::{strip_html_tags, HttpClient};

/// Client for the Annals of the Joseon Dynasty.
///
/// Holds a blocking HTTP client and the endpoint configuration; carries no
/// per-call state, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct AnnalsSource {
    pub(crate) client: HttpClient,
    pub(crate) config: AnnalsConfig,
}

impl AnnalsSource {
    /// Create a source pointed at the production service.
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(AnnalsConfig::default())
    }

    /// Create a source with custom endpoints (used by tests to substitute a
    /// local mock server).
    pub fn with_config(config: AnnalsConfig) -> Result<Self, SourceError> {
        let client = HttpClient::new(&config.user_agent, config.timeout)?;
        Ok(Self { client, config })
    }

    /// Run a basic search.
    ///
    /// When `king_name` resolves (or `bibliography_id` is supplied) the
    /// request uses the composite `q` parameter to scope the search to one
    /// annal; otherwise it falls back to a plain keyword search.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SourceError> {
        let bibliography_id = request
            .king_name
            .as_deref()
            .and_then(|name| match kings::bibliography_id(name) {
                Some(id) => {
                    tracing::info!(king = name, bibliography_id = id, "resolved king name");
                    Some(id.to_string())
                }
                None => {
                    tracing::warn!(
                        king = name,
                        "king name not in the bibliography map; falling back to keyword search"
                    );
                    None
                }
            })
            .or_else(|| request.bibliography_id.clone());

        let term = match bibliography_id {
            Some(id) => SearchTerm::Composite(composite_query(&request.query, Some(&id), false)),
            None => SearchTerm::Keyword(request.query.clone()),
        };

        let url = search_url(
            &self.config.search_url,
            request.field.sec_id(),
            request.start,
            request.rows,
            &term,
        );
        self.run_search(&url)
    }

    /// Run an advanced search: several king names or bibliography IDs,
    /// title-field scope, extended matching.
    ///
    /// King names are resolved first, then explicit IDs are appended; the
    /// remote `opDir` filter accepts a single ID, so the first one collected
    /// wins.
    pub fn search_advanced(
        &self,
        request: &AdvancedSearchRequest,
    ) -> Result<SearchResponse, SourceError> {
        let mut bibliography_ids: Vec<String> = Vec::new();
        for name in &request.king_names {
            match kings::bibliography_id(name) {
                Some(id) => {
                    if !bibliography_ids.iter().any(|known| known == id) {
                        bibliography_ids.push(id.to_string());
                    }
                }
                None => {
                    tracing::warn!(king = %name, "king name not in the bibliography map; ignored");
                }
            }
        }
        for id in &request.bibliography_ids {
            if !id.is_empty() && !bibliography_ids.contains(id) {
                bibliography_ids.push(id.clone());
            }
        }
        if bibliography_ids.len() > 1 {
            tracing::info!(
                used = %bibliography_ids[0],
                dropped = bibliography_ids.len() - 1,
                "opDir accepts a single bibliography ID; using the first"
            );
        }

        let scope = bibliography_ids.first().map(String::as_str);
        let term = if scope.is_some() || request.extended {
            SearchTerm::Composite(composite_query(&request.query, scope, request.extended))
        } else {
            SearchTerm::Keyword(request.query.clone())
        };

        let url = search_url(
            &self.config.search_url,
            request.field.sec_id(),
            request.start,
            request.rows,
            &term,
        );
        self.run_search(&url)
    }

    fn run_search(&self, url: &str) -> Result<SearchResponse, SourceError> {
        tracing::debug!(url, "issuing annals search");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SourceError::Network(format!("search request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "search endpoint returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .map_err(|e| SourceError::Network(format!("failed to read search response: {e}")))?;

        let parsed = parse_search_envelope(&body)?;
        tracing::info!(
            total = parsed.total_results,
            page = parsed.documents.len(),
            "search complete"
        );
        Ok(parsed)
    }
}

/// Parse the XML result envelope.
///
/// The envelope is `<response><header><field name="…">…` followed by
/// `<doc>` nodes whose `<field>` children carry the record data under
/// Korean field names. A missing or unparsable `totalCount` counts as zero
/// matches, not as an error; a zero total short-circuits without touching
/// the document nodes.
fn parse_search_envelope(xml: &str) -> Result<SearchResponse, SourceError> {
    let mut reader = Reader::from_str(xml);

    let mut total_results: Option<u64> = None;
    let mut in_header = false;
    let mut in_doc = false;
    let mut current_field: Option<String> = None;
    let mut current_value = String::new();
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut documents: Vec<AnnalsDocument> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref element)) => match element.name().as_ref() {
                b"header" => in_header = true,
                b"doc" => {
                    in_doc = true;
                    fields.clear();
                }
                b"field" => {
                    current_field = attribute(element, "name");
                    current_value.clear();
                }
                _ => {}
            },
            Ok(Event::Text(text)) => {
                if current_field.is_some() {
                    current_value.push_str(&text.unescape().unwrap_or_default());
                }
            }
            Ok(Event::CData(data)) => {
                if current_field.is_some() {
                    current_value.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Ok(Event::End(ref element)) => match element.name().as_ref() {
                b"header" => {
                    in_header = false;
                    if total_results.is_none() {
                        tracing::warn!("search envelope header carries no usable totalCount");
                        total_results = Some(0);
                    }
                    // Nothing to collect for an empty result set.
                    if total_results == Some(0) {
                        return Ok(SearchResponse::empty());
                    }
                }
                b"doc" => {
                    in_doc = false;
                    if !fields.is_empty() {
                        documents.push(document_from_fields(&fields));
                    }
                }
                b"field" => {
                    if let Some(name) = current_field.take() {
                        let value = current_value.trim().to_string();
                        if !value.is_empty() {
                            if in_header {
                                if name == "totalCount" {
                                    total_results = match value.parse::<u64>() {
                                        Ok(count) => Some(count),
                                        Err(_) => {
                                            tracing::warn!(
                                                value = %value,
                                                "totalCount is not an integer; treating as 0"
                                            );
                                            Some(0)
                                        }
                                    };
                                }
                            } else if in_doc {
                                fields.insert(name, value);
                            }
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SourceError::Parse(format!("search envelope: {e}")));
            }
            _ => {}
        }
    }

    Ok(SearchResponse {
        total_results: total_results.unwrap_or_else(|| {
            tracing::warn!("search envelope has no header; treating as 0 matches");
            0
        }),
        documents,
    })
}

/// Project the Korean field names of one `<doc>` node onto a record.
fn document_from_fields(fields: &HashMap<String, String>) -> AnnalsDocument {
    AnnalsDocument {
        title: fields.get("서명").cloned(),
        article_title: fields.get("기사명").cloned(),
        author: fields.get("저자").cloned(),
        reign_year: fields.get("편년연호").cloned(),
        year_gregorian: fields.get("편년서기년").cloned(),
        month: fields.get("편년월").cloned(),
        day: fields.get("편년일").cloned(),
        snippet: fields.get("검색필드").map(|raw| strip_html_tags(raw)),
        bibliography_id: fields.get("서지ID").cloned(),
        document_id: fields.get("자료ID").cloned(),
        dci_s: fields.get("DCI_s").cloned(),
        item_id: fields.get("아이템ID").cloned(),
        subject_classification: fields.get("주제분류").cloned(),
        library_classification: fields.get("사부분류").cloned(),
    }
}

fn attribute(element: &BytesStart, name: &str) -> Option<String> {
    element
        .try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(total: &str, docs: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <response>\n\
               <header>\n\
                 <field name=\"totalCount\">{total}</field>\n\
                 <field name=\"keyword\">test</field>\n\
               </header>\n\
               <result>{docs}</result>\n\
             </response>"
        )
    }

    fn doc(article_title: &str, snippet: &str, document_id: &str) -> String {
        format!(
            "<doc>\
               <field name=\"서명\">태조실록</field>\
               <field name=\"기사명\">{article_title}</field>\
               <field name=\"검색필드\">{snippet}</field>\
               <field name=\"자료ID\">{document_id}</field>\
               <field name=\"편년서기년\">1392</field>\
             </doc>"
        )
    }

    #[test]
    fn test_zero_total_returns_empty_without_reading_docs() {
        // A zero header with stray doc nodes still yields an empty response.
        let xml = envelope("0", &doc("x", "y", "z"));
        let parsed = parse_search_envelope(&xml).unwrap();
        assert_eq!(parsed.total_results, 0);
        assert!(parsed.documents.is_empty());
    }

    #[test]
    fn test_missing_total_count_treated_as_zero() {
        let xml = "<response><header><field name=\"keyword\">q</field></header></response>";
        let parsed = parse_search_envelope(xml).unwrap();
        assert_eq!(parsed.total_results, 0);
        assert!(parsed.documents.is_empty());
    }

    #[test]
    fn test_unparsable_total_count_treated_as_zero() {
        let xml = envelope("many", "");
        let parsed = parse_search_envelope(&xml).unwrap();
        assert_eq!(parsed.total_results, 0);
        assert!(parsed.documents.is_empty());
    }

    #[test]
    fn test_total_may_exceed_page() {
        let docs: String = (0..20)
            .map(|i| {
                doc(
                    &format!("기사 {i}"),
                    "본문에 &lt;b&gt;세종&lt;/b&gt;이 나온다",
                    &format!("ITKC_JT_D0_A{i:03}"),
                )
            })
            .collect();
        let parsed = parse_search_envelope(&envelope("57", &docs)).unwrap();
        assert_eq!(parsed.total_results, 57);
        assert_eq!(parsed.documents.len(), 20);
        for record in &parsed.documents {
            let snippet = record.snippet.as_deref().unwrap();
            assert!(!snippet.contains('<'), "markup left in {snippet:?}");
            assert!(snippet.contains("세종"));
        }
    }

    #[test]
    fn test_field_projection() {
        let xml = envelope(
            "1",
            "<doc>\
               <field name=\"서명\">세종실록</field>\
               <field name=\"기사명\">即位年</field>\
               <field name=\"저자\">춘추관</field>\
               <field name=\"편년연호\">세종 1년</field>\
               <field name=\"편년월\">7</field>\
               <field name=\"편년일\">12</field>\
               <field name=\"서지ID\">ITKC_JT_D0</field>\
               <field name=\"자료ID\">ITKC_JT_D0_A01</field>\
               <field name=\"DCI_s\">ITKC_JT_D0_A01_DCI</field>\
               <field name=\"아이템ID\">ITKC_JT</field>\
               <field name=\"주제분류\">정치</field>\
               <field name=\"사부분류\">사부</field>\
             </doc>",
        );
        let parsed = parse_search_envelope(&xml).unwrap();
        assert_eq!(parsed.documents.len(), 1);
        let record = &parsed.documents[0];
        assert_eq!(record.title.as_deref(), Some("세종실록"));
        assert_eq!(record.author.as_deref(), Some("춘추관"));
        assert_eq!(record.reign_year.as_deref(), Some("세종 1년"));
        assert_eq!(record.month.as_deref(), Some("7"));
        assert_eq!(record.day.as_deref(), Some("12"));
        assert_eq!(record.bibliography_id.as_deref(), Some("ITKC_JT_D0"));
        assert_eq!(record.document_id.as_deref(), Some("ITKC_JT_D0_A01"));
        assert_eq!(record.item_id.as_deref(), Some("ITKC_JT"));
        assert_eq!(record.subject_classification.as_deref(), Some("정치"));
        assert_eq!(record.library_classification.as_deref(), Some("사부"));
        // Fields the envelope omitted stay unset.
        assert!(record.year_gregorian.is_none());
        assert!(record.snippet.is_none());
    }

    #[test]
    fn test_empty_fields_are_dropped() {
        let xml = envelope(
            "1",
            "<doc><field name=\"서명\"></field><field name=\"자료ID\">X</field></doc>",
        );
        let parsed = parse_search_envelope(&xml).unwrap();
        assert_eq!(parsed.documents[0].title, None);
        assert_eq!(parsed.documents[0].document_id.as_deref(), Some("X"));
    }

    #[test]
    fn test_broken_xml_is_a_parse_error() {
        let err = parse_search_envelope("<response><header></wrong></response>").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
