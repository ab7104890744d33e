// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use url::Url;

use crate::domain::connection::models::ConnectionState;

pub struct AppConfig {
    pub api_base_url: Url,
    pub socket_url: Url,
    /// Messages fetched per direction when aggregating conversations.
    /// The server clamps this to 50.
    pub message_page_size: u32,
    /// Raw posts requested in the single explore fetch.
    pub feed_fetch_limit: u32,
    /// Feed items handed out per window.
    pub feed_window_size: usize,
}

pub struct AppContext {
    pub connection_state: RwLock<ConnectionState>,
    pub connected_since: RwLock<Option<DateTime<Utc>>>,
    pub config: AppConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse("https://api.amora.chat").expect("Failed to parse URL"),
            socket_url: Url::parse("wss://api.amora.chat/socket").expect("Failed to parse URL"),
            message_page_size: 50,
            feed_fetch_limit: 20,
            feed_window_size: 10,
        }
    }
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            connection_state: RwLock::new(ConnectionState::Disconnected),
            connected_since: Default::default(),
            config,
        }
    }

    pub fn connection_state(&self) -> ConnectionState {
        *self.connection_state.read()
    }

    pub fn is_connected(&self) -> bool {
        self.connection_state() == ConnectionState::Connected
    }

    pub fn set_connected(&self, now: DateTime<Utc>) {
        *self.connection_state.write() = ConnectionState::Connected;
        self.connected_since.write().replace(now);
    }

    pub fn set_disconnected(&self) {
        *self.connection_state.write() = ConnectionState::Disconnected;
        self.connected_since.write().take();
    }
}
