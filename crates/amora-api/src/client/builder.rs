// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use secrecy::Secret;
use url::Url;

use crate::client::client::ClientInner;
use crate::client::module_context::ModuleContextInner;
use crate::client::{ConnectorProvider, EventHandler, ModuleContext, ModuleLookup};
use crate::connector::{Connection, ConnectionError, ConnectionEventHandler, Connector};
use crate::deps::{AuthTokenProvider, NoAuthTokenProvider, SystemTimeProvider, TimeProvider};
use crate::http::HttpTransport;
use crate::mods::AnyModule;
use crate::util::PinnedFuture;
use crate::{mods, Client, Event};

pub struct UndefinedConnector {}

pub struct ClientBuilder {
    base_url: Url,
    connector_provider: ConnectorProvider,
    mods: ModuleLookup,
    token_provider: Arc<dyn AuthTokenProvider>,
    time_provider: Box<dyn TimeProvider>,
    event_handler: EventHandler,
}

impl ClientBuilder {
    pub(super) fn new() -> Self {
        ClientBuilder {
            base_url: Url::parse("https://localhost").expect("Failed to parse placeholder URL"),
            connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
            mods: Default::default(),
            token_provider: Arc::new(NoAuthTokenProvider::default()),
            time_provider: Box::new(SystemTimeProvider::default()),
            event_handler: Box::new(|_, _| Box::pin(async {}) as PinnedFuture<_>),
        }
    }

    pub fn set_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.connector_provider = connector_provider;
        self
    }

    pub fn set_token_provider(mut self, token_provider: Arc<dyn AuthTokenProvider>) -> Self {
        self.token_provider = token_provider;
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Box::new(time_provider);
        self
    }

    pub fn set_event_handler<T>(
        mut self,
        handler: impl Fn(Client, Event) -> T + Send + Sync + 'static,
    ) -> Self
    where
        T: Future<Output = ()> + Send + 'static,
    {
        self.event_handler = Box::new(move |client, event| {
            let fut = handler(client, event);
            Box::pin(async move { fut.await }) as PinnedFuture<_>
        });
        self
    }

    pub fn add_mod<M: AnyModule + Clone + 'static>(mut self, m: M) -> Self {
        self.mods
            .insert(TypeId::of::<M>(), RwLock::new(Box::new(m)));
        self
    }

    pub fn build(self) -> Client {
        let mut mods = self.mods;
        mods.entry(TypeId::of::<mods::Chat>())
            .or_insert_with(|| RwLock::new(Box::new(mods::Chat::default())));
        mods.entry(TypeId::of::<mods::Feed>())
            .or_insert_with(|| RwLock::new(Box::new(mods::Feed::default())));

        let mods = Arc::new(mods);

        let context_inner = Arc::new(ModuleContextInner {
            connector_provider: self.connector_provider,
            connection: Default::default(),
            mods: Arc::downgrade(&mods),
            http: HttpTransport::new(self.base_url, self.token_provider),
            time_provider: self.time_provider,
            event_handler: self.event_handler,
        });

        for m in mods.values() {
            m.write().register_with(ModuleContext {
                inner: context_inner.clone(),
            });
        }

        Client {
            inner: Arc::new(ClientInner {
                mods: mods.clone(),
                context: context_inner,
            }),
        }
    }
}

#[async_trait]
impl Connector for UndefinedConnector {
    async fn connect(
        &self,
        _url: &Url,
        _token: Secret<String>,
        _event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        panic!("Client doesn't have a connector. Provide one before calling connect()")
    }
}
