use tracing::info;

use crate::{
    email::{outbound::Notifier, templates},
    entities::contact::{Contact, ContactForm, ContactResponse},
    errors::AppError,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
    notifier: Notifier,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R, notifier: Notifier) -> Self {
        ContactHandler { contact_repo, notifier }
    }

    /// Stores the message, then queues the operator notification. The
    /// response is a success whatever happens to the email.
    pub async fn submit_contact(&self, form: ContactForm) -> Result<ContactResponse, AppError> {
        let contact = Contact::try_from(form)?;

        self.contact_repo.create_contact(&contact).await?;
        info!(id = %contact.id, "Contact message stored");

        let email_error = self
            .notifier
            .enqueue(templates::contact_inquiry(&contact, self.notifier.operator()))
            .err()
            .map(|e| e.to_string());

        let message = match email_error {
            None => "Message sent successfully!",
            Some(_) => "Message saved but email failed to send",
        };

        Ok(ContactResponse {
            success: true,
            message: message.to_string(),
            email_error,
        })
    }
}
