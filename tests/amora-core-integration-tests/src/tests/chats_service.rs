// amora-core-client/amora-core-integration-tests
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use amora_api::RequestError;
use amora_core_client::app::deps::AppDependencies;
use amora_core_client::app::services::ChatsService;
use amora_core_client::dtos::{MessageId, MessagePage, Pagination};
use amora_core_client::test::{MessageBuilder, MockAppDependencies};

fn page(messages: Vec<amora_core_client::dtos::Message>, unread_count: u64) -> MessagePage {
    MessagePage {
        messages,
        unread_count,
        pagination: Pagination::default(),
    }
}

#[tokio::test]
async fn test_aggregates_both_directions_into_conversations() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let inbox = vec![
        MessageBuilder::new("m1")
            .from_user("a")
            .set_unread()
            .set_minutes_offset(3)
            .build(),
        MessageBuilder::new("m2")
            .from_user("a")
            .set_unread()
            .set_minutes_offset(1)
            .build(),
        MessageBuilder::new("m3")
            .from_user("b")
            .set_minutes_offset(2)
            .build(),
    ];
    let outbox = vec![
        // Newer than anything "b" sent us, so it wins the conversation's
        // last message without touching the unread count.
        MessageBuilder::new("m4")
            .to_user("b")
            .set_minutes_offset(5)
            .build(),
        MessageBuilder::new("m5").to_user("c").build(),
    ];

    deps.messaging_service
        .expect_load_received_page()
        .with(
            predicate::eq(1),
            predicate::eq(50),
            predicate::eq(None),
        )
        .times(1)
        .return_once(move |_, _, _| Ok(page(inbox, 7)));
    deps.messaging_service
        .expect_load_sent_page()
        .with(predicate::eq(1), predicate::eq(50))
        .times(1)
        .return_once(move |_, _| Ok(page(outbox, 0)));

    let deps = AppDependencies::from(deps);
    let service = ChatsService::from(&deps);
    let list = service.load_conversations().await?;

    assert_eq!(list.unread_count, 7);
    assert_eq!(
        list.conversations
            .iter()
            .map(|c| (c.counterpart.id.to_string(), c.last_message.id.to_string(), c.unread_count))
            .collect::<Vec<_>>(),
        vec![
            ("b".to_string(), "m4".to_string(), 0),
            ("a".to_string(), "m1".to_string(), 2),
            ("c".to_string(), "m5".to_string(), 0),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_conversations_propagate_request_errors() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.messaging_service
        .expect_load_received_page()
        .return_once(|_, _, _| Err(RequestError::TooManyRequests));
    deps.messaging_service
        .expect_load_sent_page()
        .return_once(|_, _| Ok(page(vec![], 0)));

    let deps = AppDependencies::from(deps);
    let service = ChatsService::from(&deps);

    assert!(matches!(
        service.load_conversations().await,
        Err(RequestError::TooManyRequests)
    ));
    Ok(())
}

#[tokio::test]
async fn test_marking_no_messages_read_skips_the_request() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.messaging_service.expect_mark_messages_read().never();

    let deps = AppDependencies::from(deps);
    let service = ChatsService::from(&deps);
    service.mark_messages_read(&[]).await?;
    Ok(())
}

#[tokio::test]
async fn test_marking_messages_read_forwards_ids() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.messaging_service
        .expect_mark_messages_read()
        .withf(|ids| ids == [MessageId::from("m1"), MessageId::from("m2")])
        .times(1)
        .return_once(|_| Ok(()));

    let deps = AppDependencies::from(deps);
    let service = ChatsService::from(&deps);
    service
        .mark_messages_read(&["m1".into(), "m2".into()])
        .await?;
    Ok(())
}
