//! Authenticated client for the admin REST API.
//!
//! Every call sends `accept: application/json` and, once signed in,
//! `authorization: Bearer <token>`. Bodies come wrapped in an envelope
//! `{ success, message, data }`. A non-2xx status becomes
//! [`ApiError::Status`] carrying the body's `message`, or
//! `"Failed to <operation>"` when the body has none.
//!
//! The client holds no cache. Callers pair each mutation with
//! [`Mutation::invalidates`](crate::query::Mutation::invalidates) and refetch.

mod auth;
mod businesses;
mod tippees;
mod users;

pub use auth::{Session, SigninData};
pub use users::UserStatusUpdate;

use log::{debug, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{Client, RequestBuilder, Response};
use crate::query::Paging;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: Option<bool>,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = Client::with_timeout(config.timeout())?;
        Ok(Self {
            config,
            http,
            token: None,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn authed(&self, request: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthenticated)?;
        Ok(accept_json(request).header("authorization", format!("Bearer {token}")))
    }

    fn get(&self, path: &str) -> ApiResult<RequestBuilder> {
        self.authed(self.http.get(self.config.url(path)))
    }

    fn post(&self, path: &str) -> ApiResult<RequestBuilder> {
        self.authed(self.http.post(self.config.url(path)))
    }

    fn put(&self, path: &str) -> ApiResult<RequestBuilder> {
        self.authed(self.http.put(self.config.url(path)))
    }

    fn delete(&self, path: &str) -> ApiResult<RequestBuilder> {
        self.authed(self.http.delete(self.config.url(path)))
    }
}

fn accept_json(request: RequestBuilder) -> RequestBuilder {
    request.header("accept", "application/json")
}

fn with_paging(request: RequestBuilder, paging: Paging) -> RequestBuilder {
    request
        .header("x-page", paging.page.to_string())
        .header("x-limit", paging.limit.to_string())
}

fn with_json<T: serde::Serialize>(
    request: RequestBuilder,
    body: &T,
    operation: &'static str,
) -> ApiResult<RequestBuilder> {
    request.json(body).map_err(|e| ApiError::Decode {
        what: operation,
        reason: e.to_string(),
    })
}

fn status_error(response: &Response, operation: &str) -> ApiError {
    let message = response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Failed to {operation}"));
    warn!("{operation} failed with status {}: {message}", response.status);
    ApiError::Status {
        status: response.status,
        message,
    }
}

async fn send(request: RequestBuilder, operation: &'static str) -> ApiResult<Response> {
    debug!("{} {}", request.method().as_str(), request.url());
    let response = request.send().await?;
    if !response.is_success() {
        return Err(status_error(&response, operation));
    }
    Ok(response)
}

fn open_envelope<T: DeserializeOwned>(
    response: &Response,
    operation: &'static str,
) -> ApiResult<Envelope<T>> {
    let envelope: Envelope<T> = response.json().map_err(|e| ApiError::Decode {
        what: operation,
        reason: e.to_string(),
    })?;
    if envelope.success == Some(false) {
        let message = if envelope.message.is_empty() {
            format!("Failed to {operation}")
        } else {
            envelope.message
        };
        return Err(ApiError::Rejected(message));
    }
    Ok(envelope)
}

/// Sends the request and returns the envelope's `data`.
async fn fetch<T: DeserializeOwned>(
    request: RequestBuilder,
    operation: &'static str,
) -> ApiResult<T> {
    let response = send(request, operation).await?;
    open_envelope::<T>(&response, operation)?
        .data
        .ok_or_else(|| ApiError::Decode {
            what: operation,
            reason: "missing data".to_owned(),
        })
}

/// Sends a mutation and returns the envelope's `message`. Empty bodies are fine.
async fn execute(request: RequestBuilder, operation: &'static str) -> ApiResult<String> {
    let response = send(request, operation).await?;
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(String::new());
    }
    Ok(open_envelope::<serde_json::Value>(&response, operation)?.message)
}
