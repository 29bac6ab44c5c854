pub mod dto;
pub mod handler;
pub mod service;

pub use dto::{TranscriptMessage, TranscriptRequest, TranscriptResponse};
pub use handler::transcript_handler;
pub use service::format_transcript;
