// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use secrecy::Secret;
use tracing::error;
use url::Url;

use crate::client::builder::ClientBuilder;
use crate::client::module_context::ModuleContextInner;
use crate::client::{Event, ModuleLookup};
use crate::connector::{ConnectionError, ConnectionEvent};
use crate::types::WireFrame;
use crate::util::PinnedFuture;
use crate::Event as ClientEvent;

#[derive(Clone)]
pub struct Client {
    pub(super) inner: Arc<ClientInner>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub async fn connect(
        &self,
        url: &Url,
        token: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.inner.clone().connect(url, token).await
    }

    /// No-op when the client was never connected.
    pub fn disconnect(&self) {
        self.inner.disconnect()
    }

    pub fn get_mod<M: crate::mods::AnyModule + Clone>(&self) -> M {
        self.inner.get_mod()
    }
}

pub(super) struct ClientInner {
    pub context: Arc<ModuleContextInner>,
    pub mods: Arc<ModuleLookup>,
}

impl ClientInner {
    async fn connect(
        self: Arc<Self>,
        url: &Url,
        token: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.disconnect();

        let inner = self.clone();

        let connection = (self.context.connector_provider)()
            .connect(
                url,
                token,
                Box::new(move |event| {
                    let inner = inner.clone();

                    Box::pin(async move { inner.handle_event(event).await }) as PinnedFuture<_>
                }),
            )
            .await?;

        self.context.connection.write().replace(connection);

        for (_, m) in self.mods.iter() {
            if let Err(err) = m.read().handle_connect() {
                error!("Encountered error in module {}", err);
            }
        }

        self.context
            .clone()
            .schedule_event(ClientEvent::Client(Event::Connected));

        Ok(())
    }

    fn disconnect(&self) {
        self.context.disconnect()
    }

    fn get_mod<M: crate::mods::AnyModule + Clone>(&self) -> M {
        let Some(entry) = self.mods.iter().find(|(k, _)| k == &&TypeId::of::<M>()) else {
            panic!("Could not find requested module.")
        };
        entry
            .1
            .read()
            .as_any()
            .downcast_ref::<M>()
            .expect("Module lookup returned module of unexpected type.")
            .clone()
    }

    async fn handle_event(self: Arc<Self>, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Disconnected { error } => self
                .context
                .clone()
                .schedule_event(ClientEvent::Client(Event::Disconnected { error })),
            ConnectionEvent::Frame(frame) => Self::handle_frame(&self.mods, frame),
        }
    }

    fn handle_frame(mods: &ModuleLookup, frame: WireFrame) {
        for (_, m) in mods.iter() {
            if let Err(err) = m.read().handle_frame(&frame) {
                error!("Encountered error in module {}", err);
            }
        }
    }
}

impl ModuleContextInner {
    pub(super) fn schedule_event(self: Arc<Self>, event: ClientEvent) {
        let ctx = crate::client::ModuleContext { inner: self };
        ctx.schedule_event(event)
    }
}

impl TryFrom<Arc<ModuleContextInner>> for Client {
    type Error = anyhow::Error;

    fn try_from(value: Arc<ModuleContextInner>) -> std::result::Result<Self, Self::Error> {
        let mods = value.mods.upgrade().ok_or(anyhow::format_err!(
            "Used module after client was released."
        ))?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                context: value,
                mods,
            }),
        })
    }
}
