pub mod outbound;
pub mod provider;
pub mod resend;
pub mod templates;
