// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;

use crate::client::ModuleContext;
use crate::http::{Auth, RequestError};
use crate::mods::Module;
use crate::types::Post;

#[derive(Default, Clone)]
pub struct Feed {
    ctx: ModuleContext,
}

impl Module for Feed {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }
}

impl Feed {
    /// Loads one page of raw explore posts. The seed randomizes the
    /// server-side selection.
    pub async fn load_explore_posts(
        &self,
        limit: u32,
        seed: u64,
    ) -> Result<Vec<Post>, RequestError> {
        #[derive(Deserialize)]
        struct ExplorePosts {
            #[serde(default)]
            posts: Vec<Post>,
        }

        let data: ExplorePosts = self
            .ctx
            .http()
            .get(
                "/api/v1/posts/explore",
                &[
                    ("limit", limit.to_string()),
                    ("offset", "0".to_string()),
                    ("type", "all".to_string()),
                    ("seed", seed.to_string()),
                ],
                Auth::Bearer,
            )
            .await?;
        Ok(data.posts)
    }
}
