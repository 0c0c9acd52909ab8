use std::sync::Arc;

use tokio::sync::mpsc::Receiver;

use crate::email::{
    outbound::{NotificationError, OutboundEmail},
    provider::EmailProvider,
};

/// Drains the notification queue until every `Notifier` is dropped. Each
/// message gets exactly one delivery attempt.
pub async fn start_notification_dispatcher(mut rx: Receiver<OutboundEmail>, provider: Arc<dyn EmailProvider>) {
    tracing::info!("Notification dispatcher started");

    while let Some(email) = rx.recv().await {
        let _ = deliver(provider.as_ref(), &email).await;
    }

    tracing::info!("Notification queue closed; dispatcher stopped");
}

pub async fn deliver(provider: &dyn EmailProvider, email: &OutboundEmail) -> Result<String, NotificationError> {
    match provider.send(email).await {
        Ok(id) => {
            tracing::info!(id = %id, to = ?email.to, subject = %email.subject, "Email sent");
            Ok(id)
        }
        Err(e) => {
            tracing::error!(to = ?email.to, subject = %email.subject, "Email delivery failed: {}", e);
            Err(e)
        }
    }
}
