// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_feed_items_repository::InMemoryFeedItemsRepository;

mod in_memory_feed_items_repository;
