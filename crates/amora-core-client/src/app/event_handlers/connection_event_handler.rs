// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use amora_api::client;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynTimeProvider,
};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::client_event::ConnectionEvent;
use crate::ClientEvent;

pub struct ConnectionEventHandler {
    ctx: DynAppContext,
    time_provider: DynTimeProvider,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for ConnectionEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            time_provider: deps.time_provider.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Client(client::Event::Connected) => {
                self.ctx.set_connected(self.time_provider.now());
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ConnectionEvent::Connect,
                    });
            }
            ServerEvent::Client(client::Event::Disconnected { error }) => {
                self.ctx.set_disconnected();
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ConnectionEvent::Disconnect { error },
                    });
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
