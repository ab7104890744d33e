// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use secrecy::Secret;

use crate::app::deps::{AppDependencies, DynCredentialsRepository};
use crate::domain::account::models::Credentials;
use crate::dtos::UserSummary;

/// Manages the signed-in account. Authentication itself happens outside
/// of this crate; embedders hand us the token their sign-in flow
/// produced.
pub struct AccountService {
    credentials_repo: DynCredentialsRepository,
}

impl From<&AppDependencies> for AccountService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            credentials_repo: deps.credentials_repo.clone(),
        }
    }
}

impl AccountService {
    /// Stores the account to use for all authenticated requests. Replaces
    /// any previously stored account.
    pub async fn sign_in(&self, token: Secret<String>, user: UserSummary) -> Result<()> {
        self.credentials_repo
            .set(Credentials { token, user })
            .await
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.credentials_repo.clear().await
    }

    pub async fn current_user(&self) -> Result<Option<UserSummary>> {
        Ok(self
            .credentials_repo
            .get()
            .await?
            .map(|credentials| credentials.user))
    }
}
