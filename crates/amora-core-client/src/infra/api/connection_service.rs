// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::Secret;
use url::Url;

use amora_api::ConnectionError;

use crate::domain::connection::services::ConnectionService;

#[async_trait]
impl ConnectionService for amora_api::Client {
    async fn connect(
        &self,
        socket_url: &Url,
        token: Secret<String>,
    ) -> Result<(), ConnectionError> {
        amora_api::Client::connect(self, socket_url, token).await
    }

    fn disconnect(&self) {
        amora_api::Client::disconnect(self)
    }
}
