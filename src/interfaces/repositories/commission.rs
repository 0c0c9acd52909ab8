use async_trait::async_trait;

use crate::{
    db::document_store::Collection,
    entities::commission::Commission,
    errors::AppError,
    repositories::document_repo::DocumentRepo,
};

#[async_trait]
pub trait CommissionRepository: Send + Sync {
    async fn create_commission(&self, commission: &Commission) -> Result<(), AppError>;
}

#[async_trait]
impl CommissionRepository for DocumentRepo {
    async fn create_commission(&self, commission: &Commission) -> Result<(), AppError> {
        self.insert(Collection::Commissions, commission).await
    }
}
