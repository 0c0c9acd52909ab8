use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::email::outbound::{NotificationError, OutboundEmail};

/// A transactional-email backend. Returns the provider's message id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<String, NotificationError>;
}

/// Stand-in used when no provider API key is configured: the message is
/// written to the log instead of being sent.
#[derive(Debug, Default, Clone)]
pub struct LogOnlyProvider;

#[async_trait]
impl EmailProvider for LogOnlyProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<String, NotificationError> {
        let id = format!("log-{}", Uuid::new_v4());
        info!(
            id = %id,
            to = ?email.to,
            subject = %email.subject,
            "Email provider not configured; logging message instead of sending"
        );
        Ok(id)
    }
}
