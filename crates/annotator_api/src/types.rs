use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid base url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Paginated list envelope. The client requests everything in one page, so
/// `next`/`previous` cursors are irrelevant and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
}

/// One coded article as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireCodedArticle {
    pub id: u64,
    pub article_id: u64,
    pub title: String,
    pub medium: String,
    pub date: String,
    #[serde(default)]
    pub pagenr: Option<u32>,
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub status: Option<u64>,
    #[serde(default)]
    pub comments: Option<String>,
}

/// Detail endpoint response: the editable article-level fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireArticleDetail {
    pub id: u64,
    #[serde(default)]
    pub status: Option<u64>,
    #[serde(default)]
    pub comments: Option<String>,
}

/// A schema-field value: a code id for code fields, text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCodingValue {
    pub field: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strval: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCoding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<u64>,
    pub values: Vec<WireCodingValue>,
}

/// A codebook and the schema field it is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireCodebook {
    pub id: u64,
    pub field: u64,
    pub codes: Vec<u64>,
}

/// Response of the codings endpoint: the article's unit codings plus the
/// codebooks currently bound to its schema fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireCodingSet {
    pub codings: Vec<WireCoding>,
    #[serde(default)]
    pub codebooks: Vec<WireCodebook>,
}

/// One logical article load: detail plus codings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireArticleBundle {
    pub detail: WireArticleDetail,
    pub coding_set: WireCodingSet,
}

/// Body of the save request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireSavePayload {
    pub status: u64,
    pub comments: String,
    pub codings: Vec<WireCoding>,
}
