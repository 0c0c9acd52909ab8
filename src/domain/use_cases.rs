pub mod artworks;
pub mod testimonials;
pub mod services;
pub mod blog;
pub mod contact;
pub mod commissions;
pub mod newsletter;
pub mod seed;
