// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::client::ModuleContext;
use crate::event::Event as ClientEvent;
use crate::http::{Auth, RequestError};
use crate::mods::Module;
use crate::types::{
    Message, MessageId, MessagePage, MessageTypeId, MessageTypeInfo, UserId, WireFrame,
};

const BASE_PATH: &str = "/api/v1/private-messages";

const NEW_PERSONAL_MESSAGE_EVENT: &str = "new_personal_message";
const MESSAGE_READ_EVENT: &str = "message_read";

/// Private-messaging operations plus the socket events that accompany
/// them.
#[derive(Default, Clone)]
pub struct Chat {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    MessageReceived(Message),
    MessageRead(Message),
}

impl Module for Chat {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }

    fn handle_frame(&self, frame: &WireFrame) -> Result<()> {
        let event = match frame.event.as_str() {
            NEW_PERSONAL_MESSAGE_EVENT => Event::MessageReceived(
                serde_json::from_value(frame.payload.clone())
                    .context("Failed to parse message in 'new_personal_message' frame")?,
            ),
            MESSAGE_READ_EVENT => Event::MessageRead(
                serde_json::from_value(frame.payload.clone())
                    .context("Failed to parse message in 'message_read' frame")?,
            ),
            _ => {
                debug!("Ignoring unknown socket event '{}'.", frame.event);
                return Ok(());
            }
        };

        self.ctx.schedule_event(ClientEvent::Chat(event));
        Ok(())
    }
}

impl Chat {
    pub async fn load_message_types(&self) -> Result<Vec<MessageTypeInfo>, RequestError> {
        self.ctx
            .http()
            .get(&format!("{BASE_PATH}/message-types"), &[], Auth::None)
            .await
    }

    pub async fn send_message(
        &self,
        receiver_id: &UserId,
        message_type: &MessageTypeId,
    ) -> Result<Message, RequestError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            receiver_id: &'a UserId,
            message_type: &'a MessageTypeId,
        }

        self.ctx
            .http()
            .post(
                &format!("{BASE_PATH}/send"),
                &Body {
                    receiver_id,
                    message_type,
                },
                Auth::Bearer,
            )
            .await
    }

    pub async fn load_received_page(
        &self,
        page: u32,
        limit: u32,
        is_read: Option<bool>,
    ) -> Result<MessagePage, RequestError> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(is_read) = is_read {
            query.push(("isRead", is_read.to_string()));
        }

        self.ctx
            .http()
            .get(&format!("{BASE_PATH}/received"), &query, Auth::Bearer)
            .await
    }

    pub async fn load_sent_page(&self, page: u32, limit: u32) -> Result<MessagePage, RequestError> {
        self.ctx
            .http()
            .get(
                &format!("{BASE_PATH}/sent"),
                &[("page", page.to_string()), ("limit", limit.to_string())],
                Auth::Bearer,
            )
            .await
    }

    pub async fn load_unread_count(&self) -> Result<u64, RequestError> {
        #[derive(serde::Deserialize)]
        struct UnreadCount {
            count: u64,
        }

        let count: UnreadCount = self
            .ctx
            .http()
            .get(&format!("{BASE_PATH}/unread-count"), &[], Auth::Bearer)
            .await?;
        Ok(count.count)
    }

    pub async fn mark_message_read(&self, id: &MessageId) -> Result<(), RequestError> {
        self.ctx
            .http()
            .patch::<()>(&format!("{BASE_PATH}/read/{id}"), None, Auth::Bearer)
            .await
    }

    pub async fn mark_messages_read(&self, ids: &[MessageId]) -> Result<(), RequestError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            message_ids: &'a [MessageId],
        }

        self.ctx
            .http()
            .patch(
                &format!("{BASE_PATH}/read-multiple"),
                Some(&Body { message_ids: ids }),
                Auth::Bearer,
            )
            .await
    }

    pub async fn load_conversation(
        &self,
        user_id: &UserId,
        page: u32,
        limit: u32,
    ) -> Result<MessagePage, RequestError> {
        self.ctx
            .http()
            .get(
                &format!("{BASE_PATH}/conversation/{user_id}"),
                &[("page", page.to_string()), ("limit", limit.to_string())],
                Auth::Bearer,
            )
            .await
    }

    /// The server only allows the sender of a message to delete it.
    pub async fn delete_message(&self, id: &MessageId) -> Result<(), RequestError> {
        self.ctx
            .http()
            .delete(&format!("{BASE_PATH}/delete/{id}"), Auth::Bearer)
            .await
    }
}
