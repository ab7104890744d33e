// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use feed_items_repository::FeedItemsRepository;
#[cfg(feature = "test")]
pub use feed_items_repository::MockFeedItemsRepository;

mod feed_items_repository;
