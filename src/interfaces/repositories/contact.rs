use async_trait::async_trait;

use crate::{
    db::document_store::Collection,
    entities::contact::Contact,
    errors::AppError,
    repositories::document_repo::DocumentRepo,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, contact: &Contact) -> Result<(), AppError>;
}

#[async_trait]
impl ContactRepository for DocumentRepo {
    async fn create_contact(&self, contact: &Contact) -> Result<(), AppError> {
        self.insert(Collection::Contacts, contact).await
    }
}
