// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientDelegate};
pub use client_event::{ClientEvent, ConnectionEvent, ListenerId};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

pub use app::deps::AppConfig;
pub use app::dtos;
pub use client_builder::ClientBuilder;
pub use domain::account::repos::CredentialsRepository;
pub use infra::auth::{FsCredentialsRepository, InMemoryCredentialsRepository};
