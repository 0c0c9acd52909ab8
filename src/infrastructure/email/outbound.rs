use derive_more::Display;
use tokio::sync::mpsc::{self, error::TrySendError};

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Debug, Display, PartialEq)]
pub enum NotificationError {
    #[display("Notification queue is full")]
    QueueFull,

    #[display("Notification queue is closed")]
    QueueClosed,

    #[display("Email client error: {_0}")]
    Client(String),

    #[display("Email provider rejected the message: {_0}")]
    Provider(String),

    #[display("Email transport error: {_0}")]
    Transport(String),
}

impl std::error::Error for NotificationError {}

/// Producer half of the notification queue. Handlers enqueue and move on;
/// the dispatcher task owns delivery.
#[derive(Clone, Debug)]
pub struct Notifier {
    sender: mpsc::Sender<OutboundEmail>,
    operator: String,
}

impl Notifier {
    /// Creates the bounded queue. `operator` receives inquiry and review mail.
    pub fn channel(capacity: usize, operator: impl Into<String>) -> (Self, mpsc::Receiver<OutboundEmail>) {
        let (sender, receiver) = mpsc::channel(capacity);
        let notifier = Notifier {
            sender,
            operator: operator.into(),
        };
        (notifier, receiver)
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Never waits: a full or closed queue is reported, not retried.
    pub fn enqueue(&self, email: OutboundEmail) -> Result<(), NotificationError> {
        let subject = email.subject.clone();
        self.sender.try_send(email).map_err(|e| {
            let err = match e {
                TrySendError::Full(_) => NotificationError::QueueFull,
                TrySendError::Closed(_) => NotificationError::QueueClosed,
            };
            tracing::warn!(subject = %subject, "Email not queued: {}", err);
            err
        })
    }
}
