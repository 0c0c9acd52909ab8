use tracing::info;

use crate::{
    email::{outbound::Notifier, templates},
    entities::commission::{CommissionCreatedResponse, CommissionSubmission},
    errors::AppError,
    repositories::commission::CommissionRepository,
};

pub struct CommissionHandler<R>
where
    R: CommissionRepository,
{
    pub commission_repo: R,
    notifier: Notifier,
}

impl<R> CommissionHandler<R>
where
    R: CommissionRepository,
{
    pub fn new(commission_repo: R, notifier: Notifier) -> Self {
        CommissionHandler { commission_repo, notifier }
    }

    /// Validates the whole submission (fields and files) before storing
    /// anything, then queues a confirmation to the client.
    pub async fn submit_commission(&self, submission: CommissionSubmission) -> Result<CommissionCreatedResponse, AppError> {
        let commission = submission
            .into_commission()
            .map_err(AppError::InvalidSubmission)?;

        self.commission_repo.create_commission(&commission).await?;
        info!(
            id = %commission.id,
            service_type = %commission.service_type,
            references = commission.reference_images.len(),
            "Commission request stored"
        );

        let email_error = self
            .notifier
            .enqueue(templates::commission_confirmation(&commission))
            .err()
            .map(|e| e.to_string());

        Ok(CommissionCreatedResponse {
            success: true,
            message: "Commission request submitted successfully! We'll be in touch soon.".to_string(),
            data: commission,
            email_error,
        })
    }
}
