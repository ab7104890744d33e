// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use amora_api::types::{
    MediaEntry, MediaRef, MediaSource, Message, MessageId, MessagePage, MessageTypeId,
    MessageTypeInfo, Pagination, Post, PostId, ThumbnailSet, UserId, UserSummary,
};

pub use crate::domain::account::models::Credentials;
pub use crate::domain::connection::models::ConnectionState;
pub use crate::domain::feed::models::{ContentType, FeedItem};
pub use crate::domain::messaging::models::{Conversation, ConversationList};
