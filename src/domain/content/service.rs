use rand::Rng;

use super::dto::ContentType;
use super::prompt::{
    base_rules, choose_content_type, choose_template, render_post_prompt, SYSTEM_PROMPT,
};
use crate::domain::ai::client::{build_system_message, build_user_message, AiClient};
use crate::error::AppError;

/// LinkedIn 글 생성 입력
#[derive(Debug, Clone)]
pub struct PostRequest<'a> {
    pub topic: &'a str,
    pub user_name: &'a str,
    pub transcript: &'a str,
    pub writing_style: &'a str,
    pub content_type: Option<ContentType>,
}

/// 트랜스크립트 기반 소셜 콘텐츠 생성 서비스
#[derive(Clone)]
pub struct ContentService {
    ai_client: AiClient,
}

impl ContentService {
    pub fn new(ai_client: AiClient) -> Self {
        Self { ai_client }
    }

    /// 최종 프롬프트 생성 (글 유형/템플릿은 `rng`로 선택)
    pub fn build_post_prompt<R: Rng + ?Sized>(request: &PostRequest<'_>, rng: &mut R) -> String {
        let content_type = request
            .content_type
            .unwrap_or_else(|| choose_content_type(rng));
        let template = choose_template(rng, content_type);

        tracing::debug!(
            content_type = ?content_type,
            template = template.map(|t| t.name).unwrap_or("general"),
            "LinkedIn template selected"
        );

        let rules = base_rules(request.user_name, request.writing_style, request.transcript);
        render_post_prompt(&rules, request.topic, template.as_ref())
    }

    /// LinkedIn 글 생성
    pub async fn generate_linkedin_post(&self, request: PostRequest<'_>) -> Result<String, AppError> {
        let prompt = Self::build_post_prompt(&request, &mut rand::thread_rng());

        let messages = vec![
            build_system_message(SYSTEM_PROMPT)?,
            build_user_message(&prompt)?,
        ];

        let post = self.ai_client.complete(messages).await?;

        Ok(post.trim().to_string())
    }
}
