use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Thin typed wrapper over the inventory REST API.
///
/// Status mapping: 404 becomes [`AppError::NotFound`] carrying the subject
/// (usually the attempted identifier); every other non-success status and
/// every transport error becomes [`AppError::Transient`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.request_timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        }
    }

    /// Client with default timeout and no bearer token, pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, subject: &str) -> AppResult<T> {
        let response = self
            .authorized(self.client.get(self.url(path)))
            .send()
            .await?;
        Self::decode_response(response, subject).await
    }

    pub async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        subject: &str,
    ) -> AppResult<T> {
        let response = self
            .authorized(self.client.get(self.url(path)).query(query))
            .send()
            .await?;
        Self::decode_response(response, subject).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        subject: &str,
    ) -> AppResult<T> {
        let response = self
            .authorized(self.client.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode_response(response, subject).await
    }

    async fn decode_response<T: DeserializeOwned>(
        response: Response,
        subject: &str,
    ) -> AppResult<T> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(subject.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Transient(format!(
                "status={}, body={}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Transient(format!("Failed to parse response: {}", e)))
    }
}
