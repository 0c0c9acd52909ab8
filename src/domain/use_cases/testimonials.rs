use tracing::info;

use crate::{
    email::{outbound::Notifier, templates},
    entities::testimonial::{NewTestimonialRequest, Testimonial, TestimonialCreatedResponse, TestimonialStatus},
    errors::AppError,
    repositories::testimonial::TestimonialRepository,
};

const DUPLICATE_MESSAGE: &str = "You have already submitted a testimonial. Only one testimonial per email address is allowed.";

pub struct TestimonialHandler<R>
where
    R: TestimonialRepository,
{
    pub testimonial_repo: R,
    notifier: Notifier,
}

impl<R> TestimonialHandler<R>
where
    R: TestimonialRepository,
{
    pub fn new(testimonial_repo: R, notifier: Notifier) -> Self {
        TestimonialHandler { testimonial_repo, notifier }
    }

    /// Approved testimonials, newest first
    pub async fn list_published(&self) -> Result<Vec<Testimonial>, AppError> {
        self.testimonial_repo
            .list_testimonials_by_status(TestimonialStatus::Approved)
            .await
    }

    /// Stores a pending testimonial and asks the operator to review it.
    pub async fn submit_testimonial(&self, request: NewTestimonialRequest) -> Result<TestimonialCreatedResponse, AppError> {
        let testimonial = Testimonial::try_from(request)?;

        self.testimonial_repo
            .create_testimonial(&testimonial)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => AppError::Conflict(DUPLICATE_MESSAGE.to_string()),
                _ => e,
            })?;
        info!(id = %testimonial.id, rating = testimonial.rating, "Testimonial submitted for review");

        let email_error = self
            .notifier
            .enqueue(templates::testimonial_review(&testimonial, self.notifier.operator()))
            .err()
            .map(|e| e.to_string());

        Ok(TestimonialCreatedResponse {
            success: true,
            message: "Thank you for your testimonial! It will be published after review.".to_string(),
            data: testimonial,
            email_error,
        })
    }
}
