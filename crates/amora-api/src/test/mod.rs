// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connector::{Connection, Connector};
pub use constant_time_provider::ConstantTimeProvider;
pub use constant_token_provider::ConstantTokenProvider;

mod connector;
mod constant_time_provider;
