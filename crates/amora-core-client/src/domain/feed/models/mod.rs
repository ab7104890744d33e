// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use content_type::ContentType;
pub use feed_item::FeedItem;
pub use media_url::{extract_image_url, extract_video_url, normalize_media_url};

mod content_type;
mod feed_item;
mod media_url;
