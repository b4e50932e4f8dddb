//! Annotator api: REST boundary for the coded-article endpoints.
mod client;
mod handle;
mod types;

pub use client::{AnnotationApi, ApiScope, ApiSettings, RestClient};
pub use handle::{ApiEvent, ApiHandle};
pub use types::{
    ApiError, Page, WireArticleBundle, WireArticleDetail, WireCodebook, WireCodedArticle,
    WireCoding, WireCodingSet, WireCodingValue, WireSavePayload,
};
