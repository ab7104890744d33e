// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::account::models::Credentials;
use crate::domain::account::repos::CredentialsRepository;

#[derive(Default)]
pub struct InMemoryCredentialsRepository {
    credentials: RwLock<Option<Credentials>>,
}

#[async_trait]
impl CredentialsRepository for InMemoryCredentialsRepository {
    async fn get(&self) -> Result<Option<Credentials>> {
        Ok(self.credentials.read().clone())
    }

    async fn set(&self, credentials: Credentials) -> Result<()> {
        self.credentials.write().replace(credentials);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.credentials.write().take();
        Ok(())
    }
}
