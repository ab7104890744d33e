// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use amora_api::mods::Chat;
use amora_api::types::{Message, MessageId, MessagePage, MessageTypeId, MessageTypeInfo, UserId};
use amora_api::RequestError;

use crate::domain::messaging::services::MessagingService;

#[async_trait]
impl MessagingService for amora_api::Client {
    async fn load_message_types(&self) -> Result<Vec<MessageTypeInfo>, RequestError> {
        self.get_mod::<Chat>().load_message_types().await
    }

    async fn send_message(
        &self,
        receiver_id: &UserId,
        message_type: &MessageTypeId,
    ) -> Result<Message, RequestError> {
        self.get_mod::<Chat>()
            .send_message(receiver_id, message_type)
            .await
    }

    async fn load_received_page(
        &self,
        page: u32,
        limit: u32,
        is_read: Option<bool>,
    ) -> Result<MessagePage, RequestError> {
        self.get_mod::<Chat>()
            .load_received_page(page, limit, is_read)
            .await
    }

    async fn load_sent_page(&self, page: u32, limit: u32) -> Result<MessagePage, RequestError> {
        self.get_mod::<Chat>().load_sent_page(page, limit).await
    }

    async fn load_unread_count(&self) -> Result<u64, RequestError> {
        self.get_mod::<Chat>().load_unread_count().await
    }

    async fn mark_message_read(&self, id: &MessageId) -> Result<(), RequestError> {
        self.get_mod::<Chat>().mark_message_read(id).await
    }

    async fn mark_messages_read(&self, ids: &[MessageId]) -> Result<(), RequestError> {
        self.get_mod::<Chat>().mark_messages_read(ids).await
    }

    async fn load_conversation(
        &self,
        user_id: &UserId,
        page: u32,
        limit: u32,
    ) -> Result<MessagePage, RequestError> {
        self.get_mod::<Chat>()
            .load_conversation(user_id, page, limit)
            .await
    }

    async fn delete_message(&self, id: &MessageId) -> Result<(), RequestError> {
        self.get_mod::<Chat>().delete_message(id).await
    }
}
