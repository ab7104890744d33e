// amora-core-client/amora-core-integration-tests
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use amora_api::RequestError;
use amora_core_client::app::deps::AppDependencies;
use amora_core_client::app::services::FeedsService;
use amora_core_client::dtos::{MediaSource, Post};
use amora_core_client::infra::feed::InMemoryFeedItemsRepository;
use amora_core_client::test::MockAppDependencies;

fn post(id: &str) -> Post {
    Post {
        id: id.into(),
        post_type: "post".to_string(),
        images: vec![MediaSource {
            url: Some(format!("https://cdn.amora.chat/{id}.jpg")),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn post_without_media(id: &str) -> Post {
    Post {
        id: id.into(),
        post_type: "post".to_string(),
        ..Default::default()
    }
}

fn service_with_posts(posts: Vec<Post>) -> FeedsService {
    let mut deps = MockAppDependencies::default();
    deps.feed_service
        .expect_load_explore_posts()
        .with(predicate::eq(20), predicate::always())
        .times(1)
        .return_once(move |_, _| Ok(posts));

    let mut deps = AppDependencies::from(deps);
    deps.feed_items_repo = Arc::new(InMemoryFeedItemsRepository::default());
    FeedsService::from(&deps)
}

#[tokio::test]
async fn test_fetches_the_pool_exactly_once() -> Result<()> {
    let service = service_with_posts(vec![post("p1"), post_without_media("p2")]);

    assert!(!service.has_loaded());
    service.load_feed_if_needed().await?;

    // The mock enforces times(1); further calls must short-circuit.
    service.load_feed_if_needed().await?;
    service.load_feed_if_needed().await?;

    assert!(service.has_loaded());
    assert!(service.has_content());
    assert_eq!(service.next_window().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_pool_still_counts_as_loaded() -> Result<()> {
    let service = service_with_posts(vec![post_without_media("p1")]);

    service.load_feed_if_needed().await?;
    service.load_feed_if_needed().await?;

    assert!(service.has_loaded());
    assert!(!service.has_content());
    assert_eq!(service.next_window(), vec![]);
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_can_be_retried() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let mut responses = vec![
        Ok(vec![post("p1")]),
        Err(RequestError::Network {
            msg: "offline".to_string(),
        }),
    ];
    deps.feed_service
        .expect_load_explore_posts()
        .times(2)
        .returning(move |_, _| responses.pop().unwrap());

    let mut deps = AppDependencies::from(deps);
    deps.feed_items_repo = Arc::new(InMemoryFeedItemsRepository::default());
    let service = FeedsService::from(&deps);

    assert!(matches!(
        service.load_feed_if_needed().await,
        Err(RequestError::Network { .. })
    ));
    assert!(!service.has_loaded());

    service.load_feed_if_needed().await?;
    assert!(service.has_loaded());
    assert_eq!(service.next_window().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_windows_resample_the_pool() -> Result<()> {
    let service = service_with_posts((0..15).map(|idx| post(&format!("p{idx}"))).collect());
    service.load_feed_if_needed().await?;

    let first = service.next_window();
    let second = service.next_window();

    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 10);

    // The provider hands out identical RNGs, so both windows shuffle the
    // same way. The pool itself stays complete underneath.
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_window_covers_the_whole_pool_when_small() -> Result<()> {
    let service = service_with_posts(vec![post("p1"), post("p2"), post("p3")]);
    service.load_feed_if_needed().await?;

    let window = service.next_window();
    assert_eq!(window.len(), 3);
    Ok(())
}
