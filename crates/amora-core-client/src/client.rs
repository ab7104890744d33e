// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use amora_api::ConnectionError;

use crate::app::deps::DynAppContext;
use crate::app::event_handlers::ClientEventDispatcher;
use crate::app::services::{AccountService, ChatsService, ConnectionService, FeedsService};
use crate::client_builder::ClientBuilder;
use crate::client_event::ListenerId;
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub account: AccountService,
    pub chats: ChatsService,
    pub feeds: FeedsService,
    pub(crate) ctx: DynAppContext,
    pub(crate) connection: ConnectionService,
    pub(crate) event_dispatcher: Arc<ClientEventDispatcher>,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    /// Connects the real-time socket using the stored credentials.
    pub async fn connect(&self) -> Result<(), ConnectionError> {
        self.connection.connect().await
    }

    pub fn disconnect(&self) {
        self.connection.disconnect()
    }

    pub fn is_connected(&self) -> bool {
        self.ctx.is_connected()
    }

    /// Registers a listener for client events. Listeners are invoked in
    /// registration order, after the optional delegate.
    pub fn add_event_listener(
        &self,
        listener: impl Fn(&ClientEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.event_dispatcher.add_listener(listener)
    }

    /// Removes exactly the listener registered under `id`. Other listeners
    /// for the same events are unaffected.
    pub fn remove_event_listener(&self, id: &ListenerId) {
        self.event_dispatcher.remove_listener(id)
    }

    /// Disconnects the socket (a no-op when never connected) and drops all
    /// registered event listeners.
    pub fn shutdown(&self) {
        self.connection.disconnect();
        self.event_dispatcher.remove_all_listeners();
    }
}
