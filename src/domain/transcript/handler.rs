use axum::{extract::rejection::JsonRejection, Json};

use crate::domain::agent::dto::{DEFAULT_TOPIC_TITLE, DEFAULT_USER_NAME};
use crate::error::AppError;
use crate::response::ErrorResponse;

use super::dto::{TranscriptRequest, TranscriptResponse};
use super::service::format_transcript;

/// 인터뷰 트랜스크립트 포맷
#[utoipa::path(
    post,
    path = "/transcript",
    tag = "Transcript",
    request_body = TranscriptRequest,
    responses(
        (status = 200, description = "포맷 성공", body = TranscriptResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse)
    )
)]
pub async fn transcript_handler(
    request: Result<Json<TranscriptRequest>, JsonRejection>,
) -> Result<Json<TranscriptResponse>, AppError> {
    let Json(request) = request?;

    let topic = non_empty_or(request.topic.as_deref(), DEFAULT_TOPIC_TITLE);
    let user_name = non_empty_or(request.user_name.as_deref(), DEFAULT_USER_NAME);

    tracing::info!(
        message_count = request.messages.len(),
        duration_secs = request.duration.unwrap_or(0),
        "Transcript request received"
    );

    let response = format_transcript(
        topic,
        user_name,
        &request.messages,
        request.duration.unwrap_or(0),
    );

    Ok(Json(response))
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(default)
}
