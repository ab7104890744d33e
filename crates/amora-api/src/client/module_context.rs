// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use url::Url;

use crate::client::builder::UndefinedConnector;
use crate::client::{ConnectorProvider, EventHandler, ModuleLookup};
use crate::connector::Connection;
use crate::deps::{NoAuthTokenProvider, SystemTimeProvider, TimeProvider};
use crate::http::HttpTransport;
use crate::util::PinnedFuture;
use crate::Event;

#[derive(Clone)]
pub struct ModuleContext {
    pub(super) inner: Arc<ModuleContextInner>,
}

impl ModuleContext {
    pub(crate) fn http(&self) -> &HttpTransport {
        &self.inner.http
    }

    pub(crate) fn schedule_event(&self, event: Event) {
        let Ok(client) = self.inner.clone().try_into() else {
            return;
        };
        let fut = (self.inner.event_handler)(client, event);
        tokio::spawn(async move { fut.await });
    }
}

pub(super) struct ModuleContextInner {
    pub connector_provider: ConnectorProvider,
    pub connection: RwLock<Option<Box<dyn Connection>>>,
    pub event_handler: EventHandler,
    pub mods: Weak<ModuleLookup>,
    pub http: HttpTransport,
    pub time_provider: Box<dyn TimeProvider>,
}

impl ModuleContextInner {
    pub fn disconnect(&self) {
        if let Some(conn) = self.connection.write().take() {
            conn.disconnect()
        }
    }
}

impl Default for ModuleContext {
    fn default() -> Self {
        ModuleContext {
            inner: Arc::new(ModuleContextInner {
                connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
                connection: Default::default(),
                event_handler: Box::new(|_, _| Box::pin(async {}) as PinnedFuture<_>),
                mods: Default::default(),
                http: HttpTransport::new(
                    Url::parse("https://localhost").expect("Failed to parse placeholder URL"),
                    Arc::new(NoAuthTokenProvider::default()),
                ),
                time_provider: Box::new(SystemTimeProvider::default()),
            }),
        }
    }
}
