// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::account::models::Credentials;

/// Persistent storage for the signed-in account. Callers re-read on every
/// use; nothing above this trait caches the token.
#[cfg_attr(feature = "test", mockall::automock)]
#[async_trait]
pub trait CredentialsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Credentials>>;
    async fn set(&self, credentials: Credentials) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}
