// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

/// Supplies the bearer token for authenticated requests. Implementations
/// read from persistent storage on every call; the transport never caches
/// the returned token.
#[async_trait]
pub trait AuthTokenProvider: Send + Sync {
    async fn auth_token(&self) -> Result<Option<Secret<String>>>;
}

#[async_trait]
impl AuthTokenProvider for Arc<dyn AuthTokenProvider> {
    async fn auth_token(&self) -> Result<Option<Secret<String>>> {
        self.deref().auth_token().await
    }
}

/// Always reports a missing token. Placeholder until the embedder has
/// provided a real token source.
#[derive(Default)]
pub struct NoAuthTokenProvider {}

#[async_trait]
impl AuthTokenProvider for NoAuthTokenProvider {
    async fn auth_token(&self) -> Result<Option<Secret<String>>> {
        Ok(None)
    }
}
