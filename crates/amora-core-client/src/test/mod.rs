// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_builder::MessageBuilder;
pub use mock_app_dependencies::MockAppDependencies;
