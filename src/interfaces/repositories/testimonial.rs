use async_trait::async_trait;

use crate::{
    db::document_store::{Collection, Query},
    entities::testimonial::{Testimonial, TestimonialStatus},
    errors::AppError,
    repositories::document_repo::DocumentRepo,
};

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Fails with `AppError::Conflict` while the email already has a
    /// pending or approved testimonial.
    async fn create_testimonial(&self, testimonial: &Testimonial) -> Result<(), AppError>;
    async fn insert_testimonials(&self, testimonials: &[Testimonial]) -> Result<u64, AppError>;
    async fn list_testimonials_by_status(&self, status: TestimonialStatus) -> Result<Vec<Testimonial>, AppError>;
}

#[async_trait]
impl TestimonialRepository for DocumentRepo {
    async fn create_testimonial(&self, testimonial: &Testimonial) -> Result<(), AppError> {
        self.insert(Collection::Testimonials, testimonial).await
    }

    async fn insert_testimonials(&self, testimonials: &[Testimonial]) -> Result<u64, AppError> {
        self.insert_all(Collection::Testimonials, testimonials).await
    }

    async fn list_testimonials_by_status(&self, status: TestimonialStatus) -> Result<Vec<Testimonial>, AppError> {
        let query = Query::all()
            .eq("status", status.as_str())
            .newest_first("createdAt");
        self.find(Collection::Testimonials, &query).await
    }
}
