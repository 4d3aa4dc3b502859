//! Object-store backed cursor store
//!
//! Bucket-scoped adapter over any `object_store` backend. Keys arrive fully
//! prefixed from the caller; the content type rides along as an attribute on
//! each write.

use std::sync::Arc;

use async_trait::async_trait;
use deltafeed_core::CursorStore;
use deltafeed_domain::Result;
use object_store::path::Path as ObjectPath;
use object_store::{Attribute, Attributes, ObjectStore};
use tracing::debug;

use crate::errors::InfraError;

/// Cursor, audit and artifact storage over an object store.
pub struct ObjectCursorStore {
    store: Arc<dyn ObjectStore>,
}

impl ObjectCursorStore {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CursorStore for ObjectCursorStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let location = ObjectPath::from(key);
        match self.store.get(&location).await {
            Ok(result) => {
                let bytes = result.bytes().await.map_err(InfraError::from)?;
                debug!(key, len = bytes.len(), "object fetched");
                Ok(Some(bytes.to_vec()))
            }
            Err(object_store::Error::NotFound { .. }) => Ok(None),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        let location = ObjectPath::from(key);
        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());

        self.store
            .put_opts(&location, body.into(), attributes.into())
            .await
            .map_err(InfraError::from)?;

        debug!(key, content_type, "object written");
        Ok(())
    }
}
