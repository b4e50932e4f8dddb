use std::time::Duration;

use client_logging::client_debug;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::types::{
    ApiError, Page, WireArticleBundle, WireArticleDetail, WireCodedArticle, WireCodingSet,
    WireSavePayload,
};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Rows requested per list fetch. Large enough that the grid is
    /// effectively unpaginated for typical coding jobs.
    pub page_size: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            page_size: 100_000,
        }
    }
}

/// The three opaque identifiers that scope every request, plus the API root.
#[derive(Debug, Clone)]
pub struct ApiScope {
    pub base_url: String,
    pub project: u64,
    pub coding_job: u64,
    pub coder: u64,
}

#[async_trait::async_trait]
pub trait AnnotationApi: Send + Sync {
    /// Fetches the coded-article grid rows for the scoped coding job.
    /// `order_by` is the server sort key; a `-` prefix means descending.
    async fn list_coded_articles(&self, order_by: &str)
        -> Result<Vec<WireCodedArticle>, ApiError>;

    /// Fetches one article's editable fields, unit codings and codebooks.
    async fn get_coded_article(&self, id: u64) -> Result<WireArticleBundle, ApiError>;

    /// Persists status, comment and unit codings for one coded article.
    async fn save_coded_article(&self, id: u64, payload: &WireSavePayload)
        -> Result<(), ApiError>;
}

pub struct RestClient {
    /// `<base>/projects/<project>/codingjobs/<job>/`
    root: Url,
    coder: u64,
    settings: ApiSettings,
    client: reqwest::Client,
}

impl RestClient {
    pub fn new(scope: &ApiScope, settings: ApiSettings) -> Result<Self, ApiError> {
        let mut base = scope.base_url.clone();
        // Url::join treats a missing trailing slash as a file segment.
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        let root = base
            .join(&format!(
                "projects/{}/codingjobs/{}/",
                scope.project, scope.coding_job
            ))
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self {
            root,
            coder: scope.coder,
            settings,
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.root
            .join(path)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        client_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        let body = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait::async_trait]
impl AnnotationApi for RestClient {
    async fn list_coded_articles(
        &self,
        order_by: &str,
    ) -> Result<Vec<WireCodedArticle>, ApiError> {
        let mut url = self.endpoint("coded_articles/")?;
        url.query_pairs_mut()
            .append_pair("page_size", &self.settings.page_size.to_string())
            .append_pair("order_by", order_by)
            .append_pair("coder", &self.coder.to_string());

        let page: Page<WireCodedArticle> = self.get_json(url).await?;
        Ok(page.results)
    }

    async fn get_coded_article(&self, id: u64) -> Result<WireArticleBundle, ApiError> {
        let detail: WireArticleDetail =
            self.get_json(self.endpoint(&format!("coded_articles/{id}/"))?).await?;
        let coding_set: WireCodingSet = self
            .get_json(self.endpoint(&format!("coded_articles/{id}/codings/"))?)
            .await?;
        Ok(WireArticleBundle { detail, coding_set })
    }

    async fn save_coded_article(
        &self,
        id: u64,
        payload: &WireSavePayload,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("coded_articles/{id}/"))?;
        let body =
            serde_json::to_string(payload).map_err(|err| ApiError::Decode(err.to_string()))?;
        client_debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
