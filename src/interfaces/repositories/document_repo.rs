use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    db::document_store::{Collection, DocumentStore, Query},
    errors::AppError,
};

/// Typed access to the shared document store. Implements every entity
/// repository trait.
#[derive(Clone)]
pub struct DocumentRepo {
    pub store: Arc<dyn DocumentStore>,
}

impl DocumentRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        DocumentRepo { store }
    }

    pub(crate) async fn insert<T: Serialize + Sync>(&self, collection: Collection, record: &T) -> Result<(), AppError> {
        let doc = serde_json::to_value(record)?;
        self.store.insert_one(collection, doc).await
    }

    pub(crate) async fn insert_all<T: Serialize + Sync>(&self, collection: Collection, records: &[T]) -> Result<u64, AppError> {
        let docs = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.store.insert_many(collection, docs).await
    }

    pub(crate) async fn find<T: DeserializeOwned>(&self, collection: Collection, query: &Query) -> Result<Vec<T>, AppError> {
        self.store
            .find(collection, query)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(AppError::from))
            .collect()
    }

    pub(crate) async fn count(&self, collection: Collection) -> Result<u64, AppError> {
        self.store.count(collection).await
    }
}
