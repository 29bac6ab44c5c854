use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pipeline::SessionInput;
use super::settings::SessionConfig;

pub const DEFAULT_TOPIC_TITLE: &str = "General Discussion";
pub const DEFAULT_USER_NAME: &str = "Guest";

/// 에이전트 설정 요청 DTO
///
/// 프론트엔드 버전에 따라 `topic_title`/`topic`, `userName`/`user_name`이
/// 섞여 들어오므로 모두 받아서 우선순위대로 해석합니다.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AgentConfigRequest {
    #[schema(example = "Pricing Power")]
    pub topic_title: Option<String>,

    /// `topic_title`이 없을 때 사용하는 단순 문자열 주제
    pub topic: Option<String>,

    pub global_context: Option<String>,

    pub why_this_matters: Option<String>,

    pub key_questions: Option<Vec<String>>,

    pub user_name: Option<String>,

    #[serde(rename = "userName")]
    #[schema(example = "Sam")]
    pub user_name_camel: Option<String>,
}

impl AgentConfigRequest {
    pub fn resolved_topic_title(&self) -> String {
        first_non_empty(&[&self.topic_title, &self.topic])
            .unwrap_or(DEFAULT_TOPIC_TITLE)
            .to_string()
    }

    pub fn resolved_user_name(&self) -> String {
        first_non_empty(&[&self.user_name_camel, &self.user_name])
            .unwrap_or(DEFAULT_USER_NAME)
            .to_string()
    }

    /// 기본값을 적용해 파이프라인 입력으로 변환
    pub fn into_session_input(self) -> SessionInput {
        let topic_title = self.resolved_topic_title();
        let user_name = self.resolved_user_name();

        SessionInput {
            topic_title,
            global_context: self.global_context.unwrap_or_default(),
            why_this_matters: self.why_this_matters.unwrap_or_default(),
            key_questions: self.key_questions.unwrap_or_default(),
            user_name,
        }
    }
}

fn first_non_empty<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .filter_map(Option::as_deref)
        .find(|value| !value.is_empty())
}

/// 에이전트 설정 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfigResponse {
    /// think 단계 프롬프트와 동일한 시스템 프롬프트
    pub system_prompt: String,

    #[schema(example = "Pricing Power")]
    pub topic_title: String,

    #[schema(example = "Sam")]
    pub user_name: String,

    /// 음성 에이전트 `Settings` 메시지
    #[serde(rename = "deepgramConfig")]
    #[schema(value_type = Object)]
    pub session_config: SessionConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_defaults_for_empty_body() {
        // Arrange
        let request: AgentConfigRequest = serde_json::from_str("{}").unwrap();

        // Act
        let input = request.into_session_input();

        // Assert
        assert_eq!(input.topic_title, "General Discussion");
        assert_eq!(input.user_name, "Guest");
        assert!(input.global_context.is_empty());
        assert!(input.why_this_matters.is_empty());
        assert!(input.key_questions.is_empty());
    }

    #[test]
    fn should_prefer_topic_title_over_topic() {
        let request: AgentConfigRequest =
            serde_json::from_str(r#"{"topic_title": "Pricing", "topic": "Other"}"#).unwrap();

        assert_eq!(request.resolved_topic_title(), "Pricing");
    }

    #[test]
    fn should_fall_back_to_topic_when_title_empty() {
        let request: AgentConfigRequest =
            serde_json::from_str(r#"{"topic_title": "", "topic": "Hiring"}"#).unwrap();

        assert_eq!(request.resolved_topic_title(), "Hiring");
    }

    #[test]
    fn should_prefer_camel_case_user_name() {
        let request: AgentConfigRequest =
            serde_json::from_str(r#"{"user_name": "snake", "userName": "Camel"}"#).unwrap();

        assert_eq!(request.resolved_user_name(), "Camel");
    }

    #[test]
    fn should_accept_null_optional_fields() {
        let request: AgentConfigRequest = serde_json::from_str(
            r#"{"topic": "AI", "global_context": null, "key_questions": null}"#,
        )
        .unwrap();

        let input = request.into_session_input();

        assert_eq!(input.topic_title, "AI");
        assert!(input.global_context.is_empty());
        assert!(input.key_questions.is_empty());
    }
}
