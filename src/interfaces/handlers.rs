pub mod artworks;
pub mod testimonials;
pub mod services;
pub mod blog_posts;
pub mod contact;
pub mod commissions;
pub mod newsletter;
pub mod home;
pub mod system;
pub mod json_error;
