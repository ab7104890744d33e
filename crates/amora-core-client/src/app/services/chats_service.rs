// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use futures::future::try_join;
use tracing::{debug, error};

use amora_api::RequestError;

use crate::app::deps::{AppDependencies, DynAppContext, DynMessagingService};
use crate::domain::messaging::models::{fold_conversations, ConversationList};
use crate::dtos::{Message, MessageId, MessagePage, MessageTypeId, MessageTypeInfo, UserId};

pub struct ChatsService {
    ctx: DynAppContext,
    messaging_service: DynMessagingService,
}

impl From<&AppDependencies> for ChatsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            messaging_service: deps.messaging_service.clone(),
        }
    }
}

impl ChatsService {
    /// Aggregates the newest inbox and outbox page into one conversation
    /// list, keyed by counterpart and sorted by last activity. Conversations
    /// older than either fetched page are not represented.
    pub async fn load_conversations(&self) -> Result<ConversationList, RequestError> {
        let limit = self.ctx.config.message_page_size;

        let (inbox, outbox) = try_join(
            self.messaging_service.load_received_page(1, limit, None),
            self.messaging_service.load_sent_page(1, limit),
        )
        .await
        .map_err(|err| {
            error!("Failed to load messages for aggregation: {err}");
            err
        })?;

        let conversations = fold_conversations(&inbox.messages, &outbox.messages);
        debug!(
            "Aggregated {} + {} messages into {} conversations.",
            inbox.messages.len(),
            outbox.messages.len(),
            conversations.len()
        );

        Ok(ConversationList {
            conversations,
            // The total comes from the inbox endpoint, since the fetched
            // page may not cover every unread message.
            unread_count: inbox.unread_count,
        })
    }

    pub async fn load_message_types(&self) -> Result<Vec<MessageTypeInfo>, RequestError> {
        self.messaging_service.load_message_types().await
    }

    pub async fn send_message(
        &self,
        receiver_id: &UserId,
        message_type: &MessageTypeId,
    ) -> Result<Message, RequestError> {
        self.messaging_service
            .send_message(receiver_id, message_type)
            .await
    }

    pub async fn load_received_messages(
        &self,
        page: u32,
        is_read: Option<bool>,
    ) -> Result<MessagePage, RequestError> {
        self.messaging_service
            .load_received_page(page, self.ctx.config.message_page_size, is_read)
            .await
    }

    pub async fn load_sent_messages(&self, page: u32) -> Result<MessagePage, RequestError> {
        self.messaging_service
            .load_sent_page(page, self.ctx.config.message_page_size)
            .await
    }

    pub async fn load_unread_count(&self) -> Result<u64, RequestError> {
        self.messaging_service.load_unread_count().await
    }

    pub async fn mark_message_read(&self, id: &MessageId) -> Result<(), RequestError> {
        self.messaging_service.mark_message_read(id).await
    }

    pub async fn mark_messages_read(&self, ids: &[MessageId]) -> Result<(), RequestError> {
        if ids.is_empty() {
            return Ok(());
        }
        self.messaging_service.mark_messages_read(ids).await
    }

    pub async fn load_conversation(
        &self,
        user_id: &UserId,
        page: u32,
    ) -> Result<MessagePage, RequestError> {
        self.messaging_service
            .load_conversation(user_id, page, self.ctx.config.message_page_size)
            .await
    }

    pub async fn delete_message(&self, id: &MessageId) -> Result<(), RequestError> {
        self.messaging_service.delete_message(id).await
    }
}
