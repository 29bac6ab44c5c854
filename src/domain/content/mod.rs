pub mod dto;
pub mod handler;
pub mod prompt;
pub mod service;

pub use dto::{ContentType, LinkedInRequest, LinkedInResponse};
pub use handler::linkedin_handler;
pub use service::{ContentService, PostRequest};
