// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::deps::AuthTokenProvider;
use crate::http::request_error::RequestError;

/// The uniform `{statusCode, success, data, message}` wrapper every
/// backend response uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseEnvelope {
    pub status_code: Option<u16>,
    pub success: bool,
    pub data: Option<Value>,
    pub message: Option<String>,
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self {
            status_code: None,
            success: false,
            data: None,
            message: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Auth {
    None,
    Bearer,
}

/// Authenticated HTTP transport. The bearer token is acquired from the
/// provider on every single request and never kept around between calls.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    token_provider: Arc<dyn AuthTokenProvider>,
}

impl HttpTransport {
    /// A path on `base_url` is kept as a prefix for every endpoint, so
    /// the backend can live behind e.g. `https://host/amora/`.
    pub fn new(base_url: Url, token_provider: Arc<dyn AuthTokenProvider>) -> Self {
        let mut base_url = base_url;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Self {
            client: reqwest::Client::new(),
            base_url,
            token_provider,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        auth: Auth,
    ) -> Result<T, RequestError> {
        let data = self.request(Method::GET, path, query, None, auth).await?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, RequestError> {
        let body = serde_json::to_value(body)?;
        let data = self
            .request(Method::POST, path, &[], Some(body), auth)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn patch<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<(), RequestError> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.request(Method::PATCH, path, &[], body, auth).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str, auth: Auth) -> Result<(), RequestError> {
        self.request(Method::DELETE, path, &[], None, auth).await?;
        Ok(())
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, RequestError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| RequestError::Generic {
                msg: err.to_string(),
            })
    }

    /// Performs a request and unwraps the response envelope, returning the
    /// `data` payload (`null` when the server sent none). Every failure is
    /// logged before it propagates.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        auth: Auth,
    ) -> Result<Value, RequestError> {
        let url = self.endpoint_url(path)?;

        let mut request = self.client.request(method, url);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        if auth == Auth::Bearer {
            let token = self
                .token_provider
                .auth_token()
                .await
                .map_err(|err| RequestError::Generic {
                    msg: err.to_string(),
                })?
                .ok_or_else(|| {
                    warn!("No auth token available for {path}. Aborting request.");
                    RequestError::AuthenticationRequired
                })?;
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|err| {
            warn!("Request to {path} failed: {err}");
            RequestError::Network {
                msg: err.to_string(),
            }
        })?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Request to {path} was rate-limited.");
            return Err(RequestError::TooManyRequests);
        }

        let bytes = response.bytes().await.map_err(|err| {
            warn!("Failed to read response from {path}: {err}");
            RequestError::Network {
                msg: err.to_string(),
            }
        })?;

        Self::unwrap_envelope(status, &bytes).map_err(|err| {
            warn!("Request to {path} failed: {err}");
            err
        })
    }

    fn unwrap_envelope(status: StatusCode, bytes: &[u8]) -> Result<Value, RequestError> {
        // Error responses don't reliably carry a parsable envelope.
        let envelope = serde_json::from_slice::<ResponseEnvelope>(bytes);

        if !status.is_success() {
            return Err(RequestError::Api {
                status: status.as_u16(),
                message: envelope
                    .ok()
                    .and_then(|e| e.message)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            });
        }

        let envelope = envelope?;

        if !envelope.success {
            return Err(RequestError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            });
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }
}
