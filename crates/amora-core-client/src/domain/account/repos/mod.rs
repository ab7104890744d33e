// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use credentials_repository::CredentialsRepository;
#[cfg(feature = "test")]
pub use credentials_repository::MockCredentialsRepository;

mod credentials_repository;
