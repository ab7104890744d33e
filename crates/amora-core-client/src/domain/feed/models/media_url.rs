// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use amora_api::types::{MediaSource, Post, ThumbnailSet};

use crate::domain::feed::models::ContentType;

/// Repairs the URL shapes the backend is known to emit: doubled protocol
/// prefixes are collapsed, protocol-relative URLs get `https:` prepended,
/// bare hosts get `https://`. Site-relative paths can't be resolved
/// client-side and yield `None`. Idempotent.
pub fn normalize_media_url(url: &str) -> Option<String> {
    let mut url = url.to_string();

    loop {
        if let Some(rest) = url
            .strip_prefix("https://http://")
            .or_else(|| url.strip_prefix("https://https://"))
            .or_else(|| url.strip_prefix("http://https://"))
        {
            url = format!("https://{rest}");
        } else if let Some(rest) = url.strip_prefix("http://http://") {
            url = format!("http://{rest}");
        } else {
            break;
        }
    }

    if url.is_empty() {
        return None;
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return Some(url);
    }
    if let Some(rest) = url.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if url.starts_with('/') {
        return None;
    }
    Some(format!("https://{url}"))
}

type Extractor = fn(&Post) -> Option<String>;

/// Resolves the display image for a raw post: type-specific candidates
/// first, then the generic fallbacks, first non-empty wins. The winning
/// candidate is normalized; a candidate that normalizes to nothing drops
/// the image.
pub fn extract_image_url(post: &Post) -> Option<String> {
    let type_specific: &[Extractor] = match ContentType::parse(&post.post_type) {
        ContentType::Post => &[first_image],
        ContentType::Reel => &[video_thumbnail, thumbnail_set_variant, top_level_thumbnail],
        ContentType::Other(_) => &[],
    };
    const GENERIC: &[Extractor] = &[image_field, top_level_thumbnail, first_media_entry];

    type_specific
        .iter()
        .chain(GENERIC.iter())
        .find_map(|extract| extract(post))
        .and_then(|url| normalize_media_url(&url))
}

/// Resolves the playable video URL: the video object for reels, otherwise
/// the first media entry declared as video.
pub fn extract_video_url(post: &Post) -> Option<String> {
    let candidate = match ContentType::parse(&post.post_type) {
        ContentType::Reel => post
            .video
            .as_ref()
            .and_then(source_url_or_key)
            .or_else(|| video_media_entry(post)),
        _ => video_media_entry(post),
    };
    candidate.and_then(|url| normalize_media_url(&url))
}

fn pick<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .map(str::to_string)
}

fn source_url(source: &MediaSource) -> Option<String> {
    pick([source.cdn_url.as_deref(), source.url.as_deref()])
}

fn source_url_or_key(source: &MediaSource) -> Option<String> {
    pick([
        source.cdn_url.as_deref(),
        source.url.as_deref(),
        source.key.as_deref(),
    ])
}

fn first_image(post: &Post) -> Option<String> {
    post.images.first().and_then(source_url_or_key)
}

fn video_thumbnail(post: &Post) -> Option<String> {
    post.video
        .as_ref()
        .and_then(|video| video.thumbnail.as_ref())
        .and_then(|thumbnail| source_url(thumbnail))
}

fn thumbnail_set_variant(post: &Post) -> Option<String> {
    let ThumbnailSet {
        large,
        medium,
        small,
    } = post.thumbnails.as_ref()?;

    [large, medium, small]
        .into_iter()
        .flatten()
        .find_map(source_url)
}

fn top_level_thumbnail(post: &Post) -> Option<String> {
    let thumbnail = post.thumbnail.as_ref()?;
    pick([thumbnail.cdn_url(), thumbnail.url()])
}

fn image_field(post: &Post) -> Option<String> {
    let image = post.image.as_ref()?;
    pick([image.cdn_url(), image.url()])
}

fn first_media_entry(post: &Post) -> Option<String> {
    let entry = post.media.first()?;
    pick([
        entry.cdn_url.as_deref(),
        entry.url.as_deref(),
        entry.thumbnail.as_ref().and_then(|t| t.cdn_url()),
        entry.thumbnail.as_ref().and_then(|t| t.url()),
    ])
}

fn video_media_entry(post: &Post) -> Option<String> {
    post.media
        .iter()
        .find(|entry| entry.media_type.as_deref() == Some("video"))
        .and_then(|entry| {
            pick([
                entry.cdn_url.as_deref(),
                entry.url.as_deref(),
                entry.key.as_deref(),
            ])
        })
}
