// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;
pub use chats_service::ChatsService;
pub use connection_service::ConnectionService;
pub use feeds_service::FeedsService;

mod account_service;
mod chats_service;
mod connection_service;
mod feeds_service;
