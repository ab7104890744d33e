// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use credentials_token_provider::CredentialsTokenProvider;
pub use fs_credentials_repository::FsCredentialsRepository;
pub use in_memory_credentials_repository::InMemoryCredentialsRepository;

mod credentials_token_provider;
mod fs_credentials_repository;
mod in_memory_credentials_repository;
