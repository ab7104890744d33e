// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use secrecy::Secret;
use url::Url;

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait,
};
use crate::types::WireFrame;

pub struct Connector {
    connection: Arc<Connection>,
}

impl Connector {
    pub fn provider(connection: Arc<Connection>) -> ConnectorProvider {
        Box::new(move || {
            Box::new(Connector {
                connection: connection.clone(),
            })
        })
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        _url: &Url,
        _token: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        *self.connection.inner.event_handler.lock() = Some(event_handler);
        Ok(Box::new(self.connection.clone()))
    }
}

/// Scripted in-memory socket. Tests push frames through it as if the
/// server had sent them.
#[derive(Default, Clone)]
pub struct Connection {
    inner: Arc<ConnectionInner>,
}

#[derive(Default)]
struct ConnectionInner {
    event_handler: Mutex<Option<ConnectionEventHandler>>,
}

impl Connection {
    pub fn connector(self: &Arc<Self>) -> Box<dyn ConnectorTrait> {
        Box::new(Connector {
            connection: self.clone(),
        })
    }

    pub fn is_connected(&self) -> bool {
        self.inner.event_handler.lock().is_some()
    }

    pub async fn push_frame(&self, frame: WireFrame) {
        let fut = {
            let event_handler = self.inner.event_handler.lock();
            event_handler
                .as_ref()
                .map(|handler| (handler)(ConnectionEvent::Frame(frame)))
        };
        if let Some(fut) = fut {
            fut.await
        }
    }

    pub async fn push_disconnect(&self, error: Option<ConnectionError>) {
        let fut = {
            let event_handler = self.inner.event_handler.lock();
            event_handler
                .as_ref()
                .map(|handler| (handler)(ConnectionEvent::Disconnected { error }))
        };
        if let Some(fut) = fut {
            fut.await
        }
    }
}

impl ConnectionTrait for Arc<Connection> {
    fn disconnect(&self) {
        self.inner.event_handler.lock().take();
    }
}
