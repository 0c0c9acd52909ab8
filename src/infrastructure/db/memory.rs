use std::collections::HashSet;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::{
    db::document_store::{Collection, Document, DocumentStore, Query},
    errors::AppError,
};

/// Process-local document store. Enforces the same unique constraints as the
/// Postgres schema; the collection's map entry is held locked while a write
/// checks and inserts, so duplicate checks cannot race.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: DashMap<Collection, Vec<Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn conflict(collection: Collection, key: &str) -> AppError {
    AppError::Conflict(format!("Duplicate key '{}' in {}", key, collection))
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn connect(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn close(&self) {}

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert_one(&self, collection: Collection, doc: Document) -> Result<(), AppError> {
        self.insert_many(collection, vec![doc]).await.map(|_| ())
    }

    async fn insert_many(&self, collection: Collection, docs: Vec<Document>) -> Result<u64, AppError> {
        if docs.iter().any(|d| !d.is_object()) {
            return Err(AppError::InternalError("Documents must be JSON objects".into()));
        }

        let mut stored = self.collections.entry(collection).or_default();

        if let Some(rule) = collection.unique_constraint() {
            let mut taken: HashSet<String> = stored.iter().filter_map(|d| rule.key(d)).collect();
            for doc in &docs {
                if let Some(key) = rule.key(doc) {
                    if !taken.insert(key.clone()) {
                        return Err(conflict(collection, &key));
                    }
                }
            }
        }

        let inserted = docs.len() as u64;
        stored.extend(docs);
        Ok(inserted)
    }

    async fn find(&self, collection: Collection, query: &Query) -> Result<Vec<Document>, AppError> {
        let mut found: Vec<Document> = self
            .collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| query.matches(d)).cloned().collect())
            .unwrap_or_default();

        found.sort_by(|a, b| query.compare(a, b));
        Ok(found)
    }

    async fn count(&self, collection: Collection) -> Result<u64, AppError> {
        Ok(self
            .collections
            .get(&collection)
            .map(|docs| docs.len() as u64)
            .unwrap_or(0))
    }
}
