//! 에이전트 설정 파이프라인
//!
//! `build_context` → `build_prompt` → `assemble_config` 세 단계를 고정된 순서로
//! 실행합니다. 각 단계는 레코드를 값으로 받아 자신이 담당하는 필드만 채운
//! 새 레코드를 반환합니다.

use super::context::{format_context, ContextBlocks};
use super::dto::AgentConfigResponse;
use super::prompt::compose_prompt;
use super::settings::{assemble_session_config, SessionConfig, VoiceCredentials};

/// 파이프라인 입력값 (기본값은 호출자가 미리 적용)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInput {
    pub topic_title: String,
    pub global_context: String,
    pub why_this_matters: String,
    pub key_questions: Vec<String>,
    pub user_name: String,
}

/// 단계를 거치며 채워지는 요청 단위 레코드
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRequest {
    pub topic_title: String,
    pub global_context: String,
    pub why_this_matters: String,
    pub key_questions: Vec<String>,
    pub user_name: String,
    /// `build_context` 전용
    pub blocks: ContextBlocks,
    /// `build_prompt` 전용
    pub system_prompt: String,
    /// `assemble_config` 전용
    pub session_config: Option<SessionConfig>,
}

impl SessionRequest {
    pub fn new(input: SessionInput) -> Self {
        Self {
            topic_title: input.topic_title,
            global_context: input.global_context,
            why_this_matters: input.why_this_matters,
            key_questions: input.key_questions,
            user_name: input.user_name,
            blocks: ContextBlocks::default(),
            system_prompt: String::new(),
            session_config: None,
        }
    }

    /// 공개 응답 필드만 남깁니다.
    fn into_output(self) -> Result<AgentConfigResponse, PipelineError> {
        let session_config = self
            .session_config
            .ok_or(PipelineError::MissingOutput("session_config"))?;

        Ok(AgentConfigResponse {
            system_prompt: self.system_prompt,
            topic_title: self.topic_title,
            user_name: self.user_name,
            session_config,
        })
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("pipeline finished without producing {0}")]
    MissingOutput(&'static str),
}

type Stage = fn(SessionRequest, &VoiceCredentials) -> SessionRequest;

const STAGES: [(&str, Stage); 3] = [
    ("build_context", build_context as Stage),
    ("build_prompt", build_prompt as Stage),
    ("assemble_config", assemble_config as Stage),
];

fn build_context(request: SessionRequest, _credentials: &VoiceCredentials) -> SessionRequest {
    let blocks = format_context(
        &request.global_context,
        &request.why_this_matters,
        &request.key_questions,
    );
    SessionRequest { blocks, ..request }
}

fn build_prompt(request: SessionRequest, _credentials: &VoiceCredentials) -> SessionRequest {
    let system_prompt = compose_prompt(&request.topic_title, &request.user_name, &request.blocks);
    SessionRequest {
        system_prompt,
        ..request
    }
}

fn assemble_config(request: SessionRequest, credentials: &VoiceCredentials) -> SessionRequest {
    let session_config = assemble_session_config(
        &request.system_prompt,
        &request.topic_title,
        &request.user_name,
        credentials,
    );
    SessionRequest {
        session_config: Some(session_config),
        ..request
    }
}

/// 주제 정보로부터 시스템 프롬프트와 음성 에이전트 설정을 생성합니다.
pub fn build_agent_config(
    input: SessionInput,
    credentials: &VoiceCredentials,
) -> Result<AgentConfigResponse, PipelineError> {
    let request = STAGES
        .iter()
        .fold(SessionRequest::new(input), |request, &(name, stage)| {
            tracing::debug!(stage = name, "Running agent config stage");
            stage(request, credentials)
        });

    request.into_output()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(global_context: &str, questions: &[&str]) -> SessionInput {
        SessionInput {
            topic_title: "Pricing Power".to_string(),
            global_context: global_context.to_string(),
            why_this_matters: String::new(),
            key_questions: questions.iter().map(|q| q.to_string()).collect(),
            user_name: "Sam".to_string(),
        }
    }

    #[test]
    fn new_record_should_start_with_empty_derived_fields() {
        let request = SessionRequest::new(input("ctx", &["q"]));

        assert_eq!(request.blocks, ContextBlocks::default());
        assert!(request.system_prompt.is_empty());
        assert!(request.session_config.is_none());
    }

    #[test]
    fn build_context_should_only_write_blocks() {
        // Arrange
        let before = SessionRequest::new(input("ctx", &["q"]));

        // Act
        let after = build_context(before.clone(), &VoiceCredentials::default());

        // Assert
        assert!(!after.blocks.context_block.is_empty());
        assert!(!after.blocks.questions_block.is_empty());
        assert_eq!(after.system_prompt, before.system_prompt);
        assert_eq!(after.session_config, before.session_config);
        assert_eq!(after.topic_title, before.topic_title);
    }

    #[test]
    fn build_prompt_should_only_write_system_prompt() {
        // Arrange
        let credentials = VoiceCredentials::default();
        let before = build_context(SessionRequest::new(input("ctx", &[])), &credentials);

        // Act
        let after = build_prompt(before.clone(), &credentials);

        // Assert
        assert!(after.system_prompt.contains("ctx"));
        assert_eq!(after.blocks, before.blocks);
        assert!(after.session_config.is_none());
    }

    #[test]
    fn stages_should_run_in_fixed_order() {
        let names: Vec<&str> = STAGES.iter().map(|(name, _)| *name).collect();

        assert_eq!(names, vec!["build_context", "build_prompt", "assemble_config"]);
    }

    #[test]
    fn should_fail_projection_when_config_stage_skipped() {
        // Arrange
        let credentials = VoiceCredentials::default();
        let request = build_prompt(
            build_context(SessionRequest::new(input("", &[])), &credentials),
            &credentials,
        );

        // Act
        let result = request.into_output();

        // Assert
        assert_eq!(
            result.unwrap_err(),
            PipelineError::MissingOutput("session_config")
        );
    }

    #[test]
    fn think_prompt_should_equal_system_prompt() {
        let output =
            build_agent_config(input("ctx", &["Why now?"]), &VoiceCredentials::default()).unwrap();

        assert_eq!(output.session_config.agent.think.prompt, output.system_prompt);
    }
}
