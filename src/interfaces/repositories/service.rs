use async_trait::async_trait;

use crate::{
    db::document_store::{Collection, Query},
    entities::service::Service,
    errors::AppError,
    repositories::document_repo::DocumentRepo,
};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn insert_services(&self, services: &[Service]) -> Result<u64, AppError>;
    async fn list_services(&self) -> Result<Vec<Service>, AppError>;
}

#[async_trait]
impl ServiceRepository for DocumentRepo {
    async fn insert_services(&self, services: &[Service]) -> Result<u64, AppError> {
        self.insert_all(Collection::Services, services).await
    }

    async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        self.find(Collection::Services, &Query::all()).await
    }
}
