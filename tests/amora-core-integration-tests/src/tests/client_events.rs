// amora-core-client/amora-core-integration-tests
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use secrecy::Secret;

use amora_api::types::WireFrame;
use amora_api::{test, ConnectionError};
use amora_core_client::test::MessageBuilder;
use amora_core_client::{Client, ClientEvent, ConnectionEvent};

struct TestClient {
    client: Client,
    connection: Arc<test::Connection>,
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl TestClient {
    async fn connected() -> Result<Self> {
        let connection = Arc::new(test::Connection::default());
        let client = Client::builder()
            .set_connector_provider(test::Connector::provider(connection.clone()))
            .build();

        client
            .account
            .sign_in(
                Secret::new("token".to_string()),
                MessageBuilder::user("me"),
            )
            .await?;

        let events = Arc::new(Mutex::new(Vec::new()));
        let captured = events.clone();
        client.add_event_listener(move |event| captured.lock().push(event.clone()));

        client.connect().await?;
        drain().await;

        Ok(Self {
            client,
            connection,
            events,
        })
    }

    fn take_events(&self) -> Vec<ClientEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

/// Events travel through spawned tasks; give them a chance to run.
async fn drain() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

fn frame(event: &str, message: &amora_core_client::dtos::Message) -> WireFrame {
    WireFrame {
        event: event.to_string(),
        payload: serde_json::to_value(message).expect("Failed to serialize message"),
    }
}

#[tokio::test]
async fn test_connecting_requires_credentials() -> Result<()> {
    let connection = Arc::new(test::Connection::default());
    let client = Client::builder()
        .set_connector_provider(test::Connector::provider(connection.clone()))
        .build();

    assert_eq!(
        client.connect().await,
        Err(ConnectionError::InvalidCredentials)
    );
    assert!(!client.is_connected());
    Ok(())
}

#[tokio::test]
async fn test_reports_connection_status() -> Result<()> {
    let client = TestClient::connected().await?;

    assert!(client.client.is_connected());
    assert_eq!(
        client.take_events(),
        vec![ClientEvent::ConnectionStatusChanged {
            event: ConnectionEvent::Connect
        }]
    );

    client.connection.push_disconnect(None).await;
    drain().await;

    assert!(!client.client.is_connected());
    assert_eq!(
        client.take_events(),
        vec![ClientEvent::ConnectionStatusChanged {
            event: ConnectionEvent::Disconnect { error: None }
        }]
    );
    Ok(())
}

#[tokio::test]
async fn test_republishes_incoming_messages() -> Result<()> {
    let client = TestClient::connected().await?;
    client.take_events();

    let message = MessageBuilder::new("m1").from_user("them").build();
    client
        .connection
        .push_frame(frame("new_personal_message", &message))
        .await;
    drain().await;

    assert_eq!(
        client.take_events(),
        vec![
            ClientEvent::MessageReceived { message },
            ClientEvent::ConversationsChanged,
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_republishes_read_receipts() -> Result<()> {
    let client = TestClient::connected().await?;
    client.take_events();

    let message = MessageBuilder::new("m1").to_user("them").build();
    client
        .connection
        .push_frame(frame("message_read", &message))
        .await;
    drain().await;

    assert_eq!(
        client.take_events(),
        vec![
            ClientEvent::MessageRead { message },
            ClientEvent::ConversationsChanged,
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_ignores_unknown_socket_events() -> Result<()> {
    let client = TestClient::connected().await?;
    client.take_events();

    client
        .connection
        .push_frame(WireFrame {
            event: "profile_visited".to_string(),
            payload: serde_json::json!({ "userId": "them" }),
        })
        .await;
    drain().await;

    assert_eq!(client.take_events(), vec![]);
    Ok(())
}

#[tokio::test]
async fn test_removed_listener_no_longer_receives_events() -> Result<()> {
    let client = TestClient::connected().await?;
    client.take_events();

    let counter = Arc::new(Mutex::new(0));
    let counted = counter.clone();
    let id = client
        .client
        .add_event_listener(move |_| *counted.lock() += 1);
    client.client.remove_event_listener(&id);

    let message = MessageBuilder::new("m1").build();
    client
        .connection
        .push_frame(frame("new_personal_message", &message))
        .await;
    drain().await;

    assert_eq!(*counter.lock(), 0);
    // The listener registered at connect time is still subscribed.
    assert_eq!(client.take_events().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_shutdown_disconnects_and_drops_listeners() -> Result<()> {
    let client = TestClient::connected().await?;
    client.take_events();

    client.client.shutdown();
    drain().await;

    assert!(!client.connection.is_connected());

    // Dispatching after shutdown reaches no listener.
    client.connection.push_disconnect(None).await;
    drain().await;
    assert_eq!(client.take_events(), vec![]);
    Ok(())
}
