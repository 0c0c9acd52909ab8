use tracing::info;

use crate::{
    email::{outbound::Notifier, templates},
    entities::newsletter::{NewsletterRequest, NewsletterResponse, NewsletterSubscription},
    errors::AppError,
    repositories::newsletter::NewsletterRepository,
};

pub struct NewsletterHandler<R>
where
    R: NewsletterRepository,
{
    pub newsletter_repo: R,
    notifier: Notifier,
}

impl<R> NewsletterHandler<R>
where
    R: NewsletterRepository,
{
    pub fn new(newsletter_repo: R, notifier: Notifier) -> Self {
        NewsletterHandler { newsletter_repo, notifier }
    }

    pub async fn subscribe(&self, request: NewsletterRequest) -> Result<NewsletterResponse, AppError> {
        let subscription = NewsletterSubscription::try_from(request)
            .map_err(|e| AppError::InvalidSubmission(vec![e]))?;

        self.newsletter_repo
            .create_subscription(&subscription)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => AppError::Conflict("This email is already subscribed to our newsletter".to_string()),
                _ => e,
            })?;
        info!(id = %subscription.id, "Newsletter subscription created");

        let email_error = self
            .notifier
            .enqueue(templates::newsletter_welcome(&subscription))
            .err()
            .map(|e| e.to_string());

        Ok(NewsletterResponse {
            success: true,
            message: "Successfully subscribed to newsletter!".to_string(),
            data: subscription,
            email_error,
        })
    }
}
