// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::info;

use amora_api::ConnectionError;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynConnectionService, DynCredentialsRepository,
};
use crate::domain::connection::models::ConnectionState;

pub struct ConnectionService {
    ctx: DynAppContext,
    connection_service: DynConnectionService,
    credentials_repo: DynCredentialsRepository,
}

impl From<&AppDependencies> for ConnectionService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            connection_service: deps.connection_service.clone(),
            credentials_repo: deps.credentials_repo.clone(),
        }
    }
}

impl ConnectionService {
    /// Connects the socket with the stored token. Fails with
    /// `InvalidCredentials` when no account is signed in. The `Connected`
    /// state is only entered once the server acknowledged the connection.
    pub async fn connect(&self) -> Result<(), ConnectionError> {
        let credentials = self
            .credentials_repo
            .get()
            .await
            .map_err(|err| ConnectionError::Generic {
                msg: err.to_string(),
            })?
            .ok_or(ConnectionError::InvalidCredentials)?;

        info!("Connecting to {}…", self.ctx.config.socket_url);
        *self.ctx.connection_state.write() = ConnectionState::Connecting;

        let result = self
            .connection_service
            .connect(&self.ctx.config.socket_url, credentials.token)
            .await;

        if result.is_err() {
            self.ctx.set_disconnected();
        }
        result
    }

    /// Tears the socket down deliberately. No `Disconnect` event is
    /// dispatched for a disconnect the caller asked for.
    pub fn disconnect(&self) {
        self.connection_service.disconnect();
        self.ctx.set_disconnected();
    }
}
