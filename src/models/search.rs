//! Search request and response models.

use serde::{Deserialize, Serialize};

use crate::models::AnnalsDocument;

/// The area of the annals a search runs against.
///
/// Maps to the remote `secId` section codes. Unrecognized caller strings
/// parse to [`SearchField::All`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// Whole annals (`JT_AA`).
    All,
    /// Article bodies (`JT_BD`).
    Body,
    /// Article titles (`JT_GS`).
    ArticleTitle,
    /// Book titles (`JT_SJ`).
    Title,
}

impl SearchField {
    /// The remote section code for this scope.
    pub fn sec_id(self) -> &'static str {
        match self {
            SearchField::All => "JT_AA",
            SearchField::Body => "JT_BD",
            SearchField::ArticleTitle => "JT_GS",
            SearchField::Title => "JT_SJ",
        }
    }

    /// Parse a caller-facing scope name; anything unrecognized is `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "body" => SearchField::Body,
            "article_title" => SearchField::ArticleTitle,
            "title" => SearchField::Title,
            _ => SearchField::All,
        }
    }
}

impl Default for SearchField {
    fn default() -> Self {
        SearchField::All
    }
}

/// Parameters for a basic annals search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search term, expected to be in Korean.
    pub query: String,

    /// Area of the annals to search.
    pub field: SearchField,

    /// Human-readable king name (Hangeul or romanized); resolved to a
    /// bibliography ID before the request is built.
    pub king_name: Option<String>,

    /// Explicit bibliography ID, used when `king_name` is absent or unknown.
    pub bibliography_id: Option<String>,

    /// Result offset for pagination.
    pub start: u32,

    /// Number of results per page.
    pub rows: u32,
}

impl SearchRequest {
    /// Create a request with the default scope and page (start 0, 20 rows).
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            field: SearchField::All,
            king_name: None,
            bibliography_id: None,
            start: 0,
            rows: 20,
        }
    }

    /// Set the search scope.
    pub fn field(mut self, field: SearchField) -> Self {
        self.field = field;
        self
    }

    /// Filter to a specific king's annal by name.
    pub fn king_name(mut self, name: impl Into<String>) -> Self {
        self.king_name = Some(name.into());
        self
    }

    /// Filter by explicit bibliography ID.
    pub fn bibliography_id(mut self, id: impl Into<String>) -> Self {
        self.bibliography_id = Some(id.into());
        self
    }

    /// Set the pagination offset.
    pub fn start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the page size.
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }
}

/// Parameters for an advanced annals search.
///
/// Accepts several king names and bibliography IDs; the remote `opDir`
/// filter takes a single ID, so the first one that resolves wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedSearchRequest {
    /// Search term, expected to be in Korean.
    pub query: String,

    /// Area of the annals to search.
    pub field: SearchField,

    /// King names to filter by; resolved in order, first hit wins.
    pub king_names: Vec<String>,

    /// Explicit bibliography IDs; considered after `king_names`.
    pub bibliography_ids: Vec<String>,

    /// Extended matching (`opExt†Y`); omitted entirely when false.
    pub extended: bool,

    /// Result offset for pagination.
    pub start: u32,

    /// Number of results per page.
    pub rows: u32,
}

impl AdvancedSearchRequest {
    /// Create a request with the default scope and page (start 0, 20 rows).
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            field: SearchField::All,
            king_names: Vec::new(),
            bibliography_ids: Vec::new(),
            extended: false,
            start: 0,
            rows: 20,
        }
    }

    /// Set the search scope.
    pub fn field(mut self, field: SearchField) -> Self {
        self.field = field;
        self
    }

    /// Add a king name to the filter list.
    pub fn king_name(mut self, name: impl Into<String>) -> Self {
        self.king_names.push(name.into());
        self
    }

    /// Add an explicit bibliography ID to the filter list.
    pub fn bibliography_id(mut self, id: impl Into<String>) -> Self {
        self.bibliography_ids.push(id.into());
        self
    }

    /// Request extended matching.
    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Set the pagination offset.
    pub fn start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the page size.
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }
}

/// The complete response for one search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches reported by the API header; independent of the
    /// page size, so it may exceed `documents.len()`.
    pub total_results: u64,

    /// Documents for the requested page, in result order.
    pub documents: Vec<AnnalsDocument>,
}

impl SearchResponse {
    /// A response with no matches.
    pub fn empty() -> Self {
        Self {
            total_results: 0,
            documents: Vec::new(),
        }
    }
}
