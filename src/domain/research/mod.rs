pub mod client;
pub mod dto;
pub mod handler;
pub mod service;

pub use client::{PerplexityClient, ResearchClient, ResearchClientTrait};
pub use dto::{ResearchDocument, ResearchRequest, ResearchResponse};
pub use handler::research_handler;
pub use service::ResearchService;
