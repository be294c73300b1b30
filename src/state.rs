use crate::domain::error::PickerError;
use crate::domain::model::Suggestion;
use crate::domain::traits::SuggestService;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::PanLexClient;
use crate::infrastructure::storage::cache::SuggestCache;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub client: PanLexClient,
    pub cache: Arc<SuggestCache>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, PickerError> {
        let client = PanLexClient::from_config(&config.api, config.http_proxy.as_deref())?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            client,
            cache: Arc::new(SuggestCache::new()),
        })
    }
}

#[async_trait]
impl SuggestService for AppState {
    /// Resolve suggestions cache-first, then online, writing hits back.
    async fn suggest(&self, txt: &str) -> Result<Vec<Suggestion>, PickerError> {
        let (cache_enabled, ttl_secs) = {
            let config = self.config.read().await;
            (config.cache.enable, config.cache.ttl_secs)
        };

        if cache_enabled {
            if let Some(items) = self.cache.get(txt, ttl_secs) {
                tracing::debug!(txt = %txt, "suggest cache hit");
                return Ok(items);
            }
        }

        let items = self.client.suggest(txt).await?;

        // Only non-empty results are worth keeping around
        if cache_enabled && !items.is_empty() {
            self.cache.insert(txt, items.clone());
        }

        Ok(items)
    }
}
