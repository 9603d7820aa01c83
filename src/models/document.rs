//! Search hit model.

use serde::{Deserialize, Serialize};

/// One document record from an annals search.
///
/// Every field is optional: the search envelope simply omits fields that are
/// absent for a record rather than emitting empty markers. Records are value
/// objects and are never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnalsDocument {
    /// 서명: title of the book (e.g. "태조실록").
    pub title: Option<String>,

    /// 기사명: title of the specific article.
    pub article_title: Option<String>,

    /// 저자: author(s).
    pub author: Option<String>,

    /// 편년연호: reign-period year name.
    pub reign_year: Option<String>,

    /// 편년서기년: Gregorian year.
    pub year_gregorian: Option<String>,

    /// 편년월: month.
    pub month: Option<String>,

    /// 편년일: day.
    pub day: Option<String>,

    /// 검색필드: snippet of the body text, highlight markup stripped.
    pub snippet: Option<String>,

    /// 서지ID: bibliographic ID (e.g. "ITKC_JT_D0").
    pub bibliography_id: Option<String>,

    /// 자료ID: document ID, the key for detail lookup.
    pub document_id: Option<String>,

    /// DCI_s: digital content identifier.
    pub dci_s: Option<String>,

    /// 아이템ID: item ID (e.g. "ITKC_JT").
    pub item_id: Option<String>,

    /// 주제분류: subject classification.
    pub subject_classification: Option<String>,

    /// 사부분류: library classification.
    pub library_classification: Option<String>,
}
