// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use amora_api::types::{Post, PostId, UserSummary};

use crate::domain::feed::models::{extract_image_url, extract_video_url, ContentType};

/// One displayable explore entry, derived from a raw post. Immutable
/// after construction; the displayed subset is always a resampled view
/// over constructed items, never a reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub id: PostId,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub media_count: u32,
    pub author: Option<UserSummary>,
    pub content_type: ContentType,
    pub likes_count: u64,
    pub comments_count: u64,
    pub views_count: u64,
    pub caption: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    /// The raw payload the item was derived from, for embedders that
    /// need fields the projection drops.
    pub post: Post,
}

impl FeedItem {
    /// Derives a feed item, or `None` when the post has no resolvable
    /// media URL. Posts without media are expected and dropped silently.
    pub fn from_post(post: Post) -> Option<Self> {
        let image_url = extract_image_url(&post);
        let video_url = extract_video_url(&post);

        if image_url.is_none() && video_url.is_none() {
            return None;
        }

        let media_count = post
            .media_count
            .unwrap_or_else(|| (post.images.len() + post.media.len()).max(1) as u32);

        Some(FeedItem {
            id: post.id.clone(),
            image_url,
            video_url,
            media_count,
            author: post.author.clone(),
            content_type: ContentType::parse(&post.post_type),
            likes_count: post.likes_count,
            comments_count: post.comments_count,
            views_count: post.views_count,
            caption: post.caption.clone(),
            created_at: post.created_at,
            tags: post.tags.clone(),
            post,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use amora_api::types::MediaSource;

    use super::*;

    #[test]
    fn test_retains_post_with_valid_image() {
        let item = FeedItem::from_post(Post {
            id: "p1".into(),
            post_type: "post".to_string(),
            images: vec![MediaSource {
                url: Some("http://a.jpg".to_string()),
                ..Default::default()
            }],
            likes_count: 3,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(item.image_url.as_deref(), Some("http://a.jpg"));
        assert_eq!(item.video_url, None);
        assert_eq!(item.content_type, ContentType::Post);
        assert_eq!(item.likes_count, 3);
    }

    #[test]
    fn test_drops_post_without_resolvable_media() {
        assert_eq!(
            FeedItem::from_post(Post {
                id: "p1".into(),
                post_type: "post".to_string(),
                ..Default::default()
            }),
            None
        );
    }

    #[test]
    fn test_drops_post_with_only_site_relative_media() {
        assert_eq!(
            FeedItem::from_post(Post {
                id: "p1".into(),
                post_type: "post".to_string(),
                images: vec![MediaSource {
                    url: Some("/local/a.jpg".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            None
        );
    }
}
