use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::AppError;
use crate::response::ErrorResponse;
use crate::AppState;

use super::dto::{AgentConfigRequest, AgentConfigResponse};
use super::pipeline::build_agent_config;

/// 음성 에이전트 설정 생성
///
/// 주제와 리서치 정보로 인터뷰 진행자 프롬프트를 만들고
/// 음성 에이전트 `Settings` 메시지로 감싸 반환합니다.
#[utoipa::path(
    post,
    path = "/agent-config",
    tag = "Agent",
    request_body = AgentConfigRequest,
    responses(
        (status = 200, description = "설정 생성 성공", body = AgentConfigResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 500, description = "서버 에러", body = ErrorResponse)
    )
)]
pub async fn agent_config_handler(
    State(state): State<AppState>,
    request: Result<Json<AgentConfigRequest>, JsonRejection>,
) -> Result<Json<AgentConfigResponse>, AppError> {
    let Json(request) = request?;

    let input = request.into_session_input();
    tracing::info!(
        topic_title = %input.topic_title,
        has_context = !input.global_context.is_empty(),
        question_count = input.key_questions.len(),
        "Agent config request received"
    );

    let response = build_agent_config(input, &state.voice_credentials)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(
        prompt_length = response.system_prompt.len(),
        "Agent config assembled"
    );

    Ok(Json(response))
}
