// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

use amora_api::AuthTokenProvider;

use crate::app::deps::DynCredentialsRepository;

/// Bridges the credentials store into the API transport. Reads on every
/// request so that a sign-out takes effect immediately.
pub struct CredentialsTokenProvider {
    credentials_repo: DynCredentialsRepository,
}

impl CredentialsTokenProvider {
    pub fn new(credentials_repo: DynCredentialsRepository) -> Self {
        Self { credentials_repo }
    }
}

#[async_trait]
impl AuthTokenProvider for CredentialsTokenProvider {
    async fn auth_token(&self) -> Result<Option<Secret<String>>> {
        Ok(self
            .credentials_repo
            .get()
            .await?
            .map(|credentials| credentials.token))
    }
}
