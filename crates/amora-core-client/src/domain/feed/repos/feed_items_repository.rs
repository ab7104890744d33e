// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::feed::models::FeedItem;

/// Holds the pool of valid feed items accumulated by the single explore
/// fetch, plus the has-loaded flag that gates re-fetching. The flag is
/// never cleared for the client's lifetime.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait FeedItemsRepository: Send + Sync {
    fn pool(&self) -> Vec<FeedItem>;

    /// Replaces the pool and marks it as loaded.
    fn replace(&self, items: Vec<FeedItem>);

    fn has_loaded(&self) -> bool;
}
