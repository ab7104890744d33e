// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use amora_api::mods::chat;

use crate::app::deps::{AppDependencies, DynClientEventDispatcher};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::ClientEvent;

/// Republishes pushed chat events as client events. Since any message
/// traffic invalidates the aggregated conversation list, each one is
/// followed by `ConversationsChanged`.
pub struct MessagesEventHandler {
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for MessagesEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Chat(chat::Event::MessageReceived(message)) => {
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::MessageReceived { message });
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConversationsChanged);
            }
            ServerEvent::Chat(chat::Event::MessageRead(message)) => {
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::MessageRead { message });
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConversationsChanged);
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
