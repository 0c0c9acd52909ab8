use async_trait::async_trait;

use crate::{
    db::document_store::Collection,
    entities::newsletter::NewsletterSubscription,
    errors::AppError,
    repositories::document_repo::DocumentRepo,
};

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Fails with `AppError::Conflict` when the address is already subscribed.
    async fn create_subscription(&self, subscription: &NewsletterSubscription) -> Result<(), AppError>;
}

#[async_trait]
impl NewsletterRepository for DocumentRepo {
    async fn create_subscription(&self, subscription: &NewsletterSubscription) -> Result<(), AppError> {
        self.insert(Collection::Newsletter, subscription).await
    }
}
