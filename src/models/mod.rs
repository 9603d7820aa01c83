//! Core data models for annals documents and search operations.

mod detail;
mod document;
mod search;

pub use detail::ArticleDetail;
pub use document::AnnalsDocument;
pub use search::{AdvancedSearchRequest, SearchField, SearchRequest, SearchResponse};
