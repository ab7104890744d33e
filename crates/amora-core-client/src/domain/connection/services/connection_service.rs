// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::Secret;
use url::Url;

use amora_api::ConnectionError;

#[cfg_attr(feature = "test", mockall::automock)]
#[async_trait]
pub trait ConnectionService: Send + Sync {
    async fn connect(&self, socket_url: &Url, token: Secret<String>)
        -> Result<(), ConnectionError>;

    /// Must be a no-op when not connected.
    fn disconnect(&self);
}
