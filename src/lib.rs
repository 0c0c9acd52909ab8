use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{extractors, handlers, middlewares, repositories, routes};
pub use infrastructure::{db, email, utils};

use db::document_store::DocumentStore;
use email::outbound::Notifier;
use repositories::document_repo::DocumentRepo;
use use_cases::{
    artworks::ArtworkHandler, blog::BlogPostHandler, commissions::CommissionHandler,
    contact::ContactHandler, newsletter::NewsletterHandler, services::ServiceHandler,
    testimonials::TestimonialHandler,
};

pub type AppArtworkHandler = ArtworkHandler<DocumentRepo>;
pub type AppTestimonialHandler = TestimonialHandler<DocumentRepo>;
pub type AppServiceHandler = ServiceHandler<DocumentRepo>;
pub type AppBlogHandler = BlogPostHandler<DocumentRepo>;
pub type AppContactHandler = ContactHandler<DocumentRepo>;
pub type AppCommissionHandler = CommissionHandler<DocumentRepo>;
pub type AppNewsletterHandler = NewsletterHandler<DocumentRepo>;

pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub artwork_handler: AppArtworkHandler,
    pub testimonial_handler: AppTestimonialHandler,
    pub service_handler: AppServiceHandler,
    pub blog_handler: AppBlogHandler,
    pub contact_handler: AppContactHandler,
    pub commission_handler: AppCommissionHandler,
    pub newsletter_handler: AppNewsletterHandler,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, notifier: Notifier) -> Self {
        let repo = DocumentRepo::new(store.clone());

        AppState {
            store,
            artwork_handler: ArtworkHandler::new(repo.clone()),
            testimonial_handler: TestimonialHandler::new(repo.clone(), notifier.clone()),
            service_handler: ServiceHandler::new(repo.clone()),
            blog_handler: BlogPostHandler::new(repo.clone()),
            contact_handler: ContactHandler::new(repo.clone(), notifier.clone()),
            commission_handler: CommissionHandler::new(repo.clone(), notifier.clone()),
            newsletter_handler: NewsletterHandler::new(repo, notifier),
        }
    }
}
