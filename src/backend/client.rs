//! HTTP client for the event-planning backend
//!
//! Wraps a `reqwest::Client` holding the base URL, bearer token and timeout.
//! Writes go through named routes; reads decode the backend's list wrappers.

use super::error::BackendError;
use super::routes::Route;
use super::traits::{AdminBackend, SubmissionChannel};
use crate::config::AdminConfig;
use crate::state::{
    CatalogFilter, CatalogItem, Flash, LegalDocument, Order, UploadBody, UploadError,
    UploadTransport, User, UPLOAD_FIELD,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Deserialize)]
struct UsersPage {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct OrdersPage {
    orders: Vec<Order>,
}

#[derive(Deserialize)]
struct DocumentsPage {
    documents: Vec<LegalDocument>,
}

#[derive(Deserialize)]
struct CatalogPage {
    items: Vec<CatalogItem>,
}

#[derive(Deserialize)]
struct FlashBody {
    #[serde(default)]
    flash: Option<Flash>,
}

#[derive(Deserialize)]
struct ValidationBody {
    errors: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct StoredPath {
    path: String,
}

/// Client for the admin endpoints of the backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &AdminConfig) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = config.api_token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| BackendError::Config("invalid API token characters".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = config.backend_url().trim_end_matches('/').to_string();
        tracing::debug!(%base_url, "backend client ready");
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        route: Route,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let (verb, path) = route.resolve()?;
        let endpoint = self.url(&path);
        let response = self
            .http
            .request(verb.as_method(), &endpoint)
            .query(query)
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|source| BackendError::Decode { endpoint, source })
    }
}

/// Map a non-2xx response to a `BackendError`
async fn error_from_response(response: reqwest::Response) -> BackendError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Ok(ValidationBody { errors, message }) = serde_json::from_str(&body) {
            return BackendError::Validation { errors, message };
        }
    }

    let message = serde_json::from_str::<MessageBody>(&body)
        .ok()
        .and_then(|b| b.message);
    BackendError::Server {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl SubmissionChannel for BackendClient {
    async fn dispatch(&self, route: Route, body: Value) -> Result<Option<Flash>, BackendError> {
        let (verb, path) = route.resolve()?;
        let endpoint = self.url(&path);
        tracing::info!(route = route.name(), method = ?verb, %endpoint, "dispatching");

        let mut request = self.http.request(verb.as_method(), &endpoint);
        if verb.has_body() {
            request = request.json(&body);
        }
        let response = request
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            tracing::warn!(route = route.name(), "dispatch failed: {err}");
            return Err(err);
        }

        // Flash is optional; an empty or unrelated body is still a success
        let text = response
            .text()
            .await
            .map_err(|source| BackendError::Decode { endpoint, source })?;
        Ok(serde_json::from_str::<FlashBody>(&text)
            .ok()
            .and_then(|b| b.flash))
    }
}

#[async_trait]
impl AdminBackend for BackendClient {
    async fn check_connection(&self) -> bool {
        match Route::named("admin.users.index").resolve() {
            Ok((_, path)) => self.http.get(self.url(&path)).send().await.is_ok(),
            Err(_) => false,
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, BackendError> {
        let page: UsersPage = self.fetch(Route::named("admin.users.index"), &[]).await?;
        Ok(page.users)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, BackendError> {
        let page: OrdersPage = self.fetch(Route::named("admin.orders.index"), &[]).await?;
        Ok(page.orders)
    }

    async fn list_legal_documents(&self) -> Result<Vec<LegalDocument>, BackendError> {
        let page: DocumentsPage = self.fetch(Route::named("admin.legal.index"), &[]).await?;
        Ok(page.documents)
    }

    async fn list_catalog(&self, filter: &CatalogFilter) -> Result<Vec<CatalogItem>, BackendError> {
        let page: CatalogPage = self
            .fetch(Route::named("admin.catalog.index"), &filter.to_query())
            .await?;
        Ok(page.items)
    }
}

#[async_trait]
impl UploadTransport for BackendClient {
    async fn send(&self, endpoint: &str, body: UploadBody) -> Result<String, UploadError> {
        let part = reqwest::multipart::Part::stream_with_length(
            reqwest::Body::wrap_stream(body.chunks),
            body.total,
        )
        .file_name(body.file_name);
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let stored: StoredPath = response
            .json()
            .await
            .map_err(|e| UploadError::Decode(e.to_string()))?;
        Ok(stored.path)
    }
}
