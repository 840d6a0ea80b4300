use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::GatewayPublisherVia;

// AppState is everything a console session needs to build its services.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, via: GatewayPublisherVia) -> AppState {
        AppState {
            config,
            store: RepositoryStore::new(via),
        }
    }
}
