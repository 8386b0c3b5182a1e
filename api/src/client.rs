//! HTTP client for the content API.
//!
//! One request per call, no retries. Every read goes through [`ContentClient::fetch`],
//! which logs the request, maps transport/status failures into [`ApiError`]
//! and hands the raw JSON to one of the lenient decoders in [`crate::shape`].

use reqwest::RequestBuilder;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::locale::Locale;
use crate::shape;
use crate::types::*;

#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PartialEq for ContentClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl Default for ContentClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl ContentClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL for a media reference returned by any endpoint.
    pub fn media_url(&self, raw: &str) -> String {
        self.config.media_url(raw)
    }

    pub async fn header(&self, locale: Locale) -> Result<Header, ApiError> {
        self.fetch(Endpoint::Header, locale).await.map(shape::one)
    }

    pub async fn about(&self, locale: Locale) -> Result<Vec<TitleAbout>, ApiError> {
        self.fetch(Endpoint::About, locale).await.map(shape::list)
    }

    pub async fn choose_us(&self, locale: Locale) -> Result<Vec<ChooseUsTitle>, ApiError> {
        self.fetch(Endpoint::ChooseUs, locale).await.map(shape::list)
    }

    pub async fn comments(&self, locale: Locale) -> Result<Vec<Comment>, ApiError> {
        self.fetch(Endpoint::Comments, locale).await.map(shape::list)
    }

    pub async fn comments_title(&self, locale: Locale) -> Result<CommentTitle, ApiError> {
        self.fetch(Endpoint::CommentsTitle, locale)
            .await
            .map(shape::one)
    }

    pub async fn courses(&self, locale: Locale) -> Result<Vec<TitleCourses>, ApiError> {
        self.fetch(Endpoint::Courses, locale).await.map(shape::list)
    }

    pub async fn course_detail(&self, id: u64, locale: Locale) -> Result<CourseDetail, ApiError> {
        self.fetch(Endpoint::CourseDetail(id), locale)
            .await
            .map(shape::one)
    }

    pub async fn gallery_categories(&self, locale: Locale) -> Result<Vec<CategoryTitle>, ApiError> {
        self.fetch(Endpoint::GalleryCategories, locale)
            .await
            .map(shape::list)
    }

    pub async fn gallery_detail(&self, id: u64, locale: Locale) -> Result<GalleryDetail, ApiError> {
        self.fetch(Endpoint::GalleryDetail(id), locale)
            .await
            .map(shape::one)
    }

    pub async fn contact_info(&self, locale: Locale) -> Result<ContactInfoTitle, ApiError> {
        self.fetch(Endpoint::ContactInfo, locale)
            .await
            .map(shape::one)
    }

    pub async fn social_media(&self, locale: Locale) -> Result<Vec<SocialMedia>, ApiError> {
        self.fetch(Endpoint::SocialMedia, locale)
            .await
            .map(shape::one_or_many)
    }

    pub async fn location(&self, locale: Locale) -> Result<Vec<TitleLocation>, ApiError> {
        self.fetch(Endpoint::Location, locale).await.map(shape::list)
    }

    pub async fn completed_projects(&self, locale: Locale) -> Result<Vec<CompletedProject>, ApiError> {
        self.fetch(Endpoint::CompletedProjects, locale)
            .await
            .map(shape::list)
    }

    /// Post an application. Any 2xx counts as accepted; the body is not inspected.
    pub async fn submit_contact(
        &self,
        request: &ContactRequest,
        locale: Locale,
    ) -> Result<(), ApiError> {
        let endpoint = Endpoint::Contact;
        let url = endpoint.url(&self.config.base_url, locale);
        let builder = self.http.post(&url).json(request);
        self.execute(endpoint, "POST", &url, builder).await.map(|_| ())
    }

    async fn fetch(&self, endpoint: Endpoint, locale: Locale) -> Result<Value, ApiError> {
        let url = endpoint.url(&self.config.base_url, locale);
        let builder = self.http.get(&url);
        let body = self.execute(endpoint, "GET", &url, builder).await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(endpoint = endpoint.label(), "response is not JSON: {e}");
            ApiError::Decode {
                endpoint: endpoint.label().to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Send the request and return the body of a successful response.
    async fn execute(
        &self,
        endpoint: Endpoint,
        method: &str,
        url: &str,
        builder: RequestBuilder,
    ) -> Result<String, ApiError> {
        tracing::debug!("[{}] {method} {url}", endpoint.label());

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("[{}] {method} {url} failed: {e}", endpoint.label());
            ApiError::Network {
                endpoint: endpoint.label().to_string(),
                detail: e.to_string(),
            }
        })?;

        let status = response.status();
        tracing::debug!("[{}] Response Status: {}", endpoint.label(), status.as_u16());

        if !status.is_success() {
            tracing::warn!("[{}] HTTP {}", endpoint.label(), status.as_u16());
            return Err(ApiError::Status {
                endpoint: endpoint.label().to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| ApiError::Network {
            endpoint: endpoint.label().to_string(),
            detail: format!("Failed to read response body: {e}"),
        })
    }
}
