// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use rng_provider::{OsRngProvider, RngProvider};

#[cfg(feature = "test")]
pub use rng_provider::StepRngProvider;

mod rng_provider;
