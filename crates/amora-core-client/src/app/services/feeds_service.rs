// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::info;

use amora_api::RequestError;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynFeedItemsRepository, DynFeedService, DynRngProvider,
};
use crate::domain::feed::models::FeedItem;

pub struct FeedsService {
    ctx: DynAppContext,
    feed_service: DynFeedService,
    feed_items_repo: DynFeedItemsRepository,
    rng_provider: DynRngProvider,
}

impl From<&AppDependencies> for FeedsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            feed_service: deps.feed_service.clone(),
            feed_items_repo: deps.feed_items_repo.clone(),
            rng_provider: deps.rng_provider.clone(),
        }
    }
}

impl FeedsService {
    /// Fetches the explore pool, at most once for the lifetime of the
    /// client. Later calls return immediately, even when the fetch
    /// produced an empty pool. A failed fetch does not mark the pool as
    /// loaded, so a retry is possible.
    pub async fn load_feed_if_needed(&self) -> Result<(), RequestError> {
        if self.feed_items_repo.has_loaded() {
            return Ok(());
        }

        let seed = self.rng_provider.rng().next_u64();
        let posts = self
            .feed_service
            .load_explore_posts(self.ctx.config.feed_fetch_limit, seed)
            .await?;

        let fetched = posts.len();
        let items = posts
            .into_iter()
            .filter_map(FeedItem::from_post)
            .collect::<Vec<_>>();
        info!("Loaded {} usable feed items from {} posts.", items.len(), fetched);

        self.feed_items_repo.replace(items);
        Ok(())
    }

    /// Returns a fresh random sample over the pooled items, never more
    /// than the configured window size. Repeated items across windows are
    /// expected once the pool is smaller than twice the window.
    pub fn next_window(&self) -> Vec<FeedItem> {
        let mut pool = self.feed_items_repo.pool();
        let mut rng = self.rng_provider.rng();
        pool.shuffle(&mut rng);
        pool.truncate(self.ctx.config.feed_window_size);
        pool
    }

    /// Whether any displayable items exist. Embedders decide themselves
    /// whether an empty pool blocks their UI or not.
    pub fn has_content(&self) -> bool {
        !self.feed_items_repo.pool().is_empty()
    }

    pub fn has_loaded(&self) -> bool {
        self.feed_items_repo.has_loaded()
    }
}
