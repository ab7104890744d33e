// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::feed::models::FeedItem;
use crate::domain::feed::repos::FeedItemsRepository;

#[derive(Default)]
pub struct InMemoryFeedItemsRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    pool: Vec<FeedItem>,
    has_loaded: bool,
}

impl FeedItemsRepository for InMemoryFeedItemsRepository {
    fn pool(&self) -> Vec<FeedItem> {
        self.state.read().pool.clone()
    }

    fn replace(&self, items: Vec<FeedItem>) {
        let mut state = self.state.write();
        state.pool = items;
        // Stays set for the lifetime of the repository, even when the
        // pool is empty.
        state.has_loaded = true;
    }

    fn has_loaded(&self) -> bool {
        self.state.read().has_loaded
    }
}
