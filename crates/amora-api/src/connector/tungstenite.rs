// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use futures::StreamExt;
use parking_lot::Mutex;
use secrecy::{ExposeSecret, Secret};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite;
use tracing::debug;
use url::Url;

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait,
};
use crate::types::WireFrame;

pub struct Connector {}

impl Connector {
    pub fn provider() -> ConnectorProvider {
        Box::new(|| Box::new(Connector {}))
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        url: &Url,
        token: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("token", token.expose_secret());

        let (stream, _) = tokio_tungstenite::connect_async(url.to_string())
            .await
            .map_err(|err| match err {
                tungstenite::Error::Http(ref response)
                    if response.status() == tungstenite::http::StatusCode::UNAUTHORIZED =>
                {
                    ConnectionError::InvalidCredentials
                }
                err => ConnectionError::Generic {
                    msg: err.to_string(),
                },
            })?;

        let (_, mut read) = stream.split();

        let read_loop = tokio::task::spawn(async move {
            while let Some(message) = read.next().await {
                match message {
                    Ok(tungstenite::Message::Text(text)) => {
                        match serde_json::from_str::<WireFrame>(&text) {
                            Ok(frame) => (event_handler)(ConnectionEvent::Frame(frame)).await,
                            Err(err) => debug!("Dropping unparsable socket frame. {}", err),
                        }
                    }
                    Ok(tungstenite::Message::Close(_)) => {
                        (event_handler)(ConnectionEvent::Disconnected { error: None }).await;
                        break;
                    }
                    Ok(_) => (),
                    Err(err) => {
                        (event_handler)(ConnectionEvent::Disconnected {
                            error: Some(ConnectionError::Generic {
                                msg: err.to_string(),
                            }),
                        })
                        .await;
                        break;
                    }
                }
            }
        });

        Ok(Box::new(Connection {
            read_loop: Mutex::new(Some(read_loop)),
        }))
    }
}

struct Connection {
    read_loop: Mutex<Option<JoinHandle<()>>>,
}

impl ConnectionTrait for Connection {
    fn disconnect(&self) {
        if let Some(read_loop) = self.read_loop.lock().take() {
            read_loop.abort();
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.disconnect()
    }
}
