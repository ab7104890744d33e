// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_context::{AppConfig, AppContext};
pub use app_dependencies::AppDependencies;

mod app_context;
mod app_dependencies;

pub use app_dependencies::{
    DynAppContext, DynClientEventDispatcher, DynConnectionService, DynCredentialsRepository,
    DynFeedItemsRepository, DynFeedService, DynMessagingService, DynRngProvider, DynTimeProvider,
};
