// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use feed_service::FeedService;
#[cfg(feature = "test")]
pub use feed_service::MockFeedService;

mod feed_service;
