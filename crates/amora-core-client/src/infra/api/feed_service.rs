// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use amora_api::mods::Feed;
use amora_api::types::Post;
use amora_api::RequestError;

use crate::domain::feed::services::FeedService;

#[async_trait]
impl FeedService for amora_api::Client {
    async fn load_explore_posts(&self, limit: u32, seed: u64) -> Result<Vec<Post>, RequestError> {
        self.get_mod::<Feed>().load_explore_posts(limit, seed).await
    }
}
