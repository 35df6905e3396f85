use std::sync::Arc;

use byda_persist::{InMemoryPersistenceClient, PersistenceClient};
use byda_router::ResponseGenerator;

use crate::config::{Config, StorageBackend};

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub persist: Arc<dyn PersistenceClient>,
    pub generator: Arc<ResponseGenerator>,
}

impl AppState {
    pub fn new(
        config: Config,
        persist: Arc<dyn PersistenceClient>,
        generator: ResponseGenerator,
    ) -> Self {
        Self {
            config: Arc::new(config),
            persist,
            generator: Arc::new(generator),
        }
    }
}

/// Open the storage backend selected in `config`.
pub async fn connect_storage(config: &Config) -> anyhow::Result<Arc<dyn PersistenceClient>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Ok(Arc::new(InMemoryPersistenceClient::new()))
        }
        #[cfg(feature = "mongodb")]
        StorageBackend::Mongodb => {
            tracing::info!("Connecting to MongoDB");
            let client = byda_persist::MongoPersistenceClient::connect(
                &config.mongodb_uri,
                &config.storage.database,
            )
            .await?;
            Ok(Arc::new(client))
        }
        #[cfg(not(feature = "mongodb"))]
        StorageBackend::Mongodb => {
            anyhow::bail!("storage backend \"mongodb\" requires building with the `mongodb` feature")
        }
    }
}
