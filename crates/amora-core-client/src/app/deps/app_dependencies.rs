// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use amora_api::TimeProvider;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcher;
use crate::domain::account::repos::CredentialsRepository;
use crate::domain::connection::services::ConnectionService;
use crate::domain::feed::repos::FeedItemsRepository;
use crate::domain::feed::services::FeedService;
use crate::domain::messaging::services::MessagingService;
use crate::infra::general::RngProvider;

pub type DynAppContext = Arc<AppContext>;
pub type DynClientEventDispatcher = Arc<ClientEventDispatcher>;
pub type DynConnectionService = Arc<dyn ConnectionService>;
pub type DynCredentialsRepository = Arc<dyn CredentialsRepository>;
pub type DynFeedItemsRepository = Arc<dyn FeedItemsRepository>;
pub type DynFeedService = Arc<dyn FeedService>;
pub type DynMessagingService = Arc<dyn MessagingService>;
pub type DynRngProvider = Arc<dyn RngProvider>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connection_service: DynConnectionService,
    pub credentials_repo: DynCredentialsRepository,
    pub ctx: DynAppContext,
    pub feed_items_repo: DynFeedItemsRepository,
    pub feed_service: DynFeedService,
    pub messaging_service: DynMessagingService,
    pub rng_provider: DynRngProvider,
    pub time_provider: DynTimeProvider,
}
