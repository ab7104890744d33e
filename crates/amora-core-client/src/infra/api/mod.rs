// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Implements the domain service traits on top of the `amora-api`
//! client. The API client is the single source of both the REST and the
//! socket transport.

mod connection_service;
mod feed_service;
mod messaging_service;
