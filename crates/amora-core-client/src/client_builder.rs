// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use amora_api::client::ConnectorProvider;
use amora_api::connector::tungstenite;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynCredentialsRepository, DynRngProvider,
    DynTimeProvider,
};
use crate::app::event_handlers::{
    ClientEventDispatcher, ConnectionEventHandler, MessagesEventHandler, ServerEventHandlerQueue,
};
use crate::app::services::{AccountService, ChatsService, ConnectionService, FeedsService};
use crate::client::ClientInner;
use crate::infra::auth::{CredentialsTokenProvider, InMemoryCredentialsRepository};
use crate::infra::feed::InMemoryFeedItemsRepository;
use crate::infra::general::OsRngProvider;
use crate::{Client, ClientDelegate};

pub struct ClientBuilder {
    config: AppConfig,
    connector_provider: ConnectorProvider,
    credentials_repo: Option<DynCredentialsRepository>,
    delegate: Option<Box<dyn ClientDelegate>>,
    rng_provider: DynRngProvider,
    time_provider: DynTimeProvider,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            config: AppConfig::default(),
            connector_provider: tungstenite::Connector::provider(),
            credentials_repo: None,
            delegate: None,
            rng_provider: Arc::new(OsRngProvider::default()),
            time_provider: Arc::new(amora_api::SystemTimeProvider::default()),
        }
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.connector_provider = connector_provider;
        self
    }

    /// Replaces the default in-memory store. Pass a persistent store so
    /// that the account survives app restarts.
    pub fn set_credentials_repo(mut self, credentials_repo: DynCredentialsRepository) -> Self {
        self.credentials_repo = Some(credentials_repo);
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_rng_provider(mut self, rng_provider: DynRngProvider) -> Self {
        self.rng_provider = rng_provider;
        self
    }

    pub fn set_time_provider(mut self, time_provider: DynTimeProvider) -> Self {
        self.time_provider = time_provider;
        self
    }

    pub fn build(self) -> Client {
        let ctx = Arc::new(AppContext::new(self.config));
        let credentials_repo = self
            .credentials_repo
            .unwrap_or_else(|| Arc::new(InMemoryCredentialsRepository::default()));

        let event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));
        let handler_queue = Arc::new(ServerEventHandlerQueue::new());

        let api = {
            let queue = handler_queue.clone();
            Arc::new(
                amora_api::Client::builder()
                    .set_base_url(ctx.config.api_base_url.clone())
                    .set_connector_provider(self.connector_provider)
                    .set_token_provider(Arc::new(CredentialsTokenProvider::new(
                        credentials_repo.clone(),
                    )))
                    .set_event_handler(move |_, event| {
                        let queue = queue.clone();
                        async move { queue.handle_event(event).await }
                    })
                    .build(),
            )
        };

        let dependencies = AppDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            connection_service: api.clone(),
            credentials_repo,
            ctx: ctx.clone(),
            feed_items_repo: Arc::new(InMemoryFeedItemsRepository::default()),
            feed_service: api.clone(),
            messaging_service: api,
            rng_provider: self.rng_provider,
            time_provider: self.time_provider,
        };

        handler_queue.set_handlers(vec![
            Box::new(ConnectionEventHandler::from(&dependencies)),
            Box::new(MessagesEventHandler::from(&dependencies)),
        ]);

        let inner = Arc::new(ClientInner {
            account: AccountService::from(&dependencies),
            chats: ChatsService::from(&dependencies),
            feeds: FeedsService::from(&dependencies),
            ctx,
            connection: ConnectionService::from(&dependencies),
            event_dispatcher: event_dispatcher.clone(),
        });
        event_dispatcher.set_client_inner(Arc::downgrade(&inner));

        Client::from(inner)
    }
}
