use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const PERPLEXITY_API_URL: &str = "https://api.perplexity.ai/chat/completions";
const PERPLEXITY_MODEL: &str = "sonar";
const PERPLEXITY_TEMPERATURE: f32 = 0.7;

/// 리서치 호출 타임아웃 (초)
const RESEARCH_TIMEOUT_SECS: u64 = 60;

const RESEARCH_SYSTEM_PROMPT: &str = r#"You are an expert researcher for a podcast host. Your goal is to take a keyword, do deep research, and write a SINGLE, comprehensive context document that a voice agent can use to host a conversational podcast.

Do NOT return a list of topics. Return ONE deep-dive context based on the keyword.

Structure your response as a JSON object with the following keys:
- "title": A catchy title for the segment.
- "deep_context": A detailed 3-5 paragraph summary of the topic, background, and current relevance.
- "key_insights": An array of 3-5 bullet points representing counter-intuitive or "insider" knowledge.
- "discussion_points": An array of 5 questions or headers to guide the flow of conversation.
- "sources": An array of strings citing where the info came from (if available/hallucinated, keep it general).

The content should be high-quality, specific, and tailored for a smart audience."#;

/// 리서치 클라이언트 인터페이스
///
/// 외부 검색/답변 API 호출을 추상화합니다. 모델이 생성한 원문 텍스트를 그대로 반환합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ResearchClientTrait: Send + Sync {
    async fn research(&self, keyword: &str) -> Result<String, AppError>;
}

pub type ResearchClient = Arc<dyn ResearchClientTrait>;

/// Perplexity API 클라이언트 구현체
#[derive(Clone)]
pub struct PerplexityClient {
    http: Client,
    api_key: Option<String>,
}

impl PerplexityClient {
    pub fn new(api_key: Option<String>) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(RESEARCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build research client: {}", e)))?;

        Ok(Self { http, api_key })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}

#[async_trait::async_trait]
impl ResearchClientTrait for PerplexityClient {
    async fn research(&self, keyword: &str) -> Result<String, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(AppError::ResearchNotConfigured)?;

        let body = ChatRequest {
            model: PERPLEXITY_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: RESEARCH_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Research this topic comprehensively: '{}'", keyword),
                },
            ],
            temperature: PERPLEXITY_TEMPERATURE,
        };

        let response = self
            .http
            .post(PERPLEXITY_API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ResearchApiError(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::ResearchApiError(e.to_string()))?;

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::ResearchApiError(format!("invalid response body: {}", e)))?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::ResearchApiError("response contained no choices".to_string()))
    }
}
