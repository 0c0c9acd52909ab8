pub mod validators;
pub mod artwork;
pub mod testimonial;
pub mod service;
pub mod blog_post;
pub mod contact;
pub mod commission;
pub mod newsletter;

use serde::Serialize;

/// `{ success: true, data }` envelope used by the list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        ListResponse { success: true, data }
    }
}

/// `{ success: true, data }` envelope for a single created record.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> CreatedResponse<T> {
    pub fn new(data: T) -> Self {
        CreatedResponse { success: true, data }
    }
}
