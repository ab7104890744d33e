// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use amora_api::ConnectionError;

use crate::dtos::Message;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The status of the socket connection has changed.
    ConnectionStatusChanged { event: ConnectionEvent },

    /// A new message arrived over the socket.
    MessageReceived { message: Message },

    /// A message we sent was read by its receiver.
    MessageRead { message: Message },

    /// The aggregated conversation list is stale and should be re-queried.
    ConversationsChanged,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connect,
    Disconnect { error: Option<ConnectionError> },
}

/// Identity of a registered event listener. Removal is by this id, never
/// by comparing callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);
