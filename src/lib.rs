//! # Joseon Annals
//!
//! Search and full-text retrieval for the Annals of the Joseon Dynasty
//! (조선왕조실록) from the Korean Classics DB (db.itkc.or.kr).
//!
//! The typical flow is two calls: search for candidate articles, then fetch
//! the full bilingual text of one of them by its `document_id`.
//!
//! ```rust,no_run
//! use joseon_annals::{AnnalsSource, SearchRequest};
//!
//! # fn main() -> Result<(), joseon_annals::SourceError> {
//! let source = AnnalsSource::new()?;
//! let results = source.search(&SearchRequest::new("정도전").king_name("태조"))?;
//! if let Some(id) = results.documents.first().and_then(|d| d.document_id.as_deref()) {
//!     let article = source.fetch_article(id)?;
//!     println!("{} paragraphs", article.translation_paragraphs.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`models`]: value objects for search hits and article payloads
//! - [`sources`]: the retrieval engine, query encoding, and the king-name map
//! - [`config`]: endpoints, headers, and timeout passed into the engine
//! - [`utils`]: HTTP client and HTML text helpers

pub mod config;
pub mod models;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use config::AnnalsConfig;
pub use models::{
    AdvancedSearchRequest, AnnalsDocument, ArticleDetail, SearchField, SearchRequest,
    SearchResponse,
};
pub use sources::{AnnalsSource, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
