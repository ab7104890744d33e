// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use events::WireFrame;
pub use ids::{MessageId, MessageTypeId, PostId, UserId};
pub use messages::{Message, MessagePage, MessageTypeInfo, Pagination, UserSummary};
pub use posts::{MediaEntry, MediaRef, MediaSource, Post, ThumbnailSet};

mod events;
mod ids;
mod messages;
mod posts;
