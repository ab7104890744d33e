// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientBuilder};
pub use connector::{Connection, ConnectionError, Connector};
pub use deps::{AuthTokenProvider, SystemTimeProvider, TimeProvider};
pub use event::Event;
pub use http::{ParseError, RequestError};
pub use util::PinnedFuture;

pub mod client;
pub mod connector;
mod deps;
mod event;
pub mod http;
pub mod mods;
pub mod types;
mod util;

#[cfg(feature = "test")]
pub mod test;
