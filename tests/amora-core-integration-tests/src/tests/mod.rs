// amora-core-client/amora-core-integration-tests
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

mod chats_service;
mod client_events;
mod feeds_service;
