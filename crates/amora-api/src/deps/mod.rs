// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_token_provider::{AuthTokenProvider, NoAuthTokenProvider};
pub use time_provider::{SystemTimeProvider, TimeProvider};

mod auth_token_provider;
mod time_provider;
