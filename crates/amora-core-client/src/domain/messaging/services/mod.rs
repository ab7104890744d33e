// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use messaging_service::MessagingService;
#[cfg(feature = "test")]
pub use messaging_service::MockMessagingService;

mod messaging_service;
