use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::domain::agent::dto::DEFAULT_USER_NAME;
use crate::error::AppError;
use crate::response::ErrorResponse;
use crate::AppState;

use super::dto::{LinkedInRequest, LinkedInResponse};
use super::prompt::DEFAULT_WRITING_STYLE;
use super::service::PostRequest;

/// 트랜스크립트 기반 LinkedIn 글 생성
#[utoipa::path(
    post,
    path = "/generate-linkedin",
    tag = "Content",
    request_body = LinkedInRequest,
    responses(
        (status = 200, description = "생성 성공", body = LinkedInResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 429, description = "AI 호출 한도 초과", body = ErrorResponse),
        (status = 502, description = "AI 호출 실패", body = ErrorResponse),
        (status = 503, description = "AI 일시 장애", body = ErrorResponse)
    )
)]
pub async fn linkedin_handler(
    State(state): State<AppState>,
    request: Result<Json<LinkedInRequest>, JsonRejection>,
) -> Result<Json<LinkedInResponse>, AppError> {
    let Json(request) = request?;

    tracing::info!(
        transcript_length = request.transcript.len(),
        content_type = ?request.content_type,
        "LinkedIn request received"
    );

    request.validate()?;

    let user_name = request
        .user_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_USER_NAME);
    let writing_style = request
        .writing_style
        .as_deref()
        .unwrap_or(DEFAULT_WRITING_STYLE);

    let linkedin = state
        .content_service
        .generate_linkedin_post(PostRequest {
            topic: &request.topic,
            user_name,
            transcript: &request.transcript,
            writing_style,
            content_type: request.content_type,
        })
        .await?;

    tracing::info!(post_length = linkedin.len(), "LinkedIn post generated");

    Ok(Json(LinkedInResponse { linkedin }))
}
