// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_service::ConnectionService;
#[cfg(feature = "test")]
pub use connection_service::MockConnectionService;

mod connection_service;
