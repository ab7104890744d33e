// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::PostId;
use super::messages::UserSummary;

/// A raw explore post. The backend emits several shapes for the same
/// concept depending on the post's age and type, so every media field is
/// optional and tolerated when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "type")]
    pub post_type: String,
    pub author: Option<UserSummary>,
    pub caption: Option<String>,
    pub images: Vec<MediaSource>,
    pub video: Option<MediaSource>,
    pub thumbnails: Option<ThumbnailSet>,
    pub thumbnail: Option<MediaRef>,
    pub image: Option<MediaRef>,
    pub media: Vec<MediaEntry>,
    pub media_count: Option<u32>,
    pub likes_count: u64,
    pub comments_count: u64,
    pub views_count: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

/// A media object carrying one or more URL variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaSource {
    pub cdn_url: Option<String>,
    pub url: Option<String>,
    pub key: Option<String>,
    pub thumbnail: Option<Box<MediaSource>>,
}

/// Either a bare URL string or a full media object. Older posts carry the
/// string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    Url(String),
    Source(MediaSource),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThumbnailSet {
    pub large: Option<MediaSource>,
    pub medium: Option<MediaSource>,
    pub small: Option<MediaSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaEntry {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub cdn_url: Option<String>,
    pub url: Option<String>,
    pub key: Option<String>,
    pub thumbnail: Option<MediaRef>,
}

impl MediaRef {
    pub fn cdn_url(&self) -> Option<&str> {
        match self {
            MediaRef::Url(_) => None,
            MediaRef::Source(source) => source.cdn_url.as_deref(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            MediaRef::Url(url) => Some(url),
            MediaRef::Source(source) => source.url.as_deref(),
        }
    }
}
