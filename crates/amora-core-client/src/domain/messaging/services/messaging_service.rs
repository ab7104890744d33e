// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use amora_api::types::{Message, MessageId, MessagePage, MessageTypeId, MessageTypeInfo, UserId};
use amora_api::RequestError;

/// The private-messages protocol surface, one method per backend
/// operation.
#[cfg_attr(feature = "test", mockall::automock)]
#[async_trait]
pub trait MessagingService: Send + Sync {
    async fn load_message_types(&self) -> Result<Vec<MessageTypeInfo>, RequestError>;

    async fn send_message(
        &self,
        receiver_id: &UserId,
        message_type: &MessageTypeId,
    ) -> Result<Message, RequestError>;

    async fn load_received_page(
        &self,
        page: u32,
        limit: u32,
        is_read: Option<bool>,
    ) -> Result<MessagePage, RequestError>;

    async fn load_sent_page(&self, page: u32, limit: u32) -> Result<MessagePage, RequestError>;

    async fn load_unread_count(&self) -> Result<u64, RequestError>;

    async fn mark_message_read(&self, id: &MessageId) -> Result<(), RequestError>;

    async fn mark_messages_read(&self, ids: &[MessageId]) -> Result<(), RequestError>;

    async fn load_conversation(
        &self,
        user_id: &UserId,
        page: u32,
        limit: u32,
    ) -> Result<MessagePage, RequestError>;

    async fn delete_message(&self, id: &MessageId) -> Result<(), RequestError>;
}
