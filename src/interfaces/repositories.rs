pub mod document_repo;
pub mod artwork;
pub mod testimonial;
pub mod service;
pub mod blog_post;
pub mod contact;
pub mod commission;
pub mod newsletter;
