use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::{DynamoStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(DynamoStore::new(&config.store).await?) as Arc<dyn UserStore>;
        tracing::info!(
            table = %config.store.table,
            region = %config.store.region,
            "user store configured"
        );
        Ok(Self { config, store })
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn UserStore>) -> Self {
        Self { config, store }
    }

    /// In-memory state for tests, no AWS access.
    pub fn fake() -> Self {
        use crate::config::StoreConfig;
        use crate::store::MemoryStore;

        let config = Arc::new(AppConfig {
            store: StoreConfig {
                table: "users-test".into(),
                region: "us-east-1".into(),
                endpoint: None,
                access_key: None,
                secret_key: None,
            },
        });
        Self {
            config,
            store: Arc::new(MemoryStore::new()) as Arc<dyn UserStore>,
        }
    }
}
