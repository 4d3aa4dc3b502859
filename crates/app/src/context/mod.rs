//! Application context - dependency injection container

use std::sync::Arc;

use deltafeed_core::{ChangeSource, CursorStore, DeltaSyncDriver, ExportSinkFactory};
use deltafeed_domain::{AppConfig, Result};
use deltafeed_infra::export::SpoolSinkFactory;
use deltafeed_infra::feed::{GraphChangeFeed, RopcTokenProvider, TokenProvider};
use deltafeed_infra::store::ObjectCursorStore;
use deltafeed_infra::InfraError;
use object_store::aws::AmazonS3Builder;
use object_store::ObjectStore;
use reqwest::Client;

/// Application context - holds the fully wired sync driver.
pub struct AppContext {
    pub config: AppConfig,
    pub driver: DeltaSyncDriver,
}

impl AppContext {
    /// Wire the production adapters: credential-grant change feed, S3-backed
    /// cursor store and local CSV spool.
    ///
    /// Bucket credentials and region are taken from the standard AWS
    /// environment variables.
    pub fn new(config: AppConfig) -> Result<Self> {
        let bucket = AmazonS3Builder::from_env()
            .with_bucket_name(&config.bucket)
            .build()
            .map_err(InfraError::from)?;

        Ok(Self::with_store(config, Arc::new(bucket)))
    }

    /// Wire the driver over an arbitrary object store backend.
    pub fn with_store(config: AppConfig, store: Arc<dyn ObjectStore>) -> Self {
        let http = Client::new();
        let tokens: Arc<dyn TokenProvider> =
            Arc::new(RopcTokenProvider::new(http.clone(), &config));
        let source: Arc<dyn ChangeSource> = Arc::new(GraphChangeFeed::new(
            http,
            tokens,
            config.graph_base_url.clone(),
            config.page_size,
        ));
        let cursor_store: Arc<dyn CursorStore> = Arc::new(ObjectCursorStore::new(store));
        let sinks: Arc<dyn ExportSinkFactory> =
            Arc::new(SpoolSinkFactory::new(config.spool_dir.clone()));
        let driver = DeltaSyncDriver::new(source, cursor_store, sinks, config.clone());

        Self { config, driver }
    }
}
