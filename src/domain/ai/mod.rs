pub mod client;

pub use client::{AiClient, AiClientTrait, OpenAiClient};
