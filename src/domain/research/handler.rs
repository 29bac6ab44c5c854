use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::error::AppError;
use crate::response::ErrorResponse;
use crate::AppState;

use super::dto::{ResearchRequest, ResearchResponse};

/// 키워드 리서치
///
/// 외부 검색/답변 API로 진행자용 리서치 문서를 생성합니다.
#[utoipa::path(
    post,
    path = "/api/research",
    tag = "Research",
    request_body = ResearchRequest,
    responses(
        (status = 200, description = "리서치 성공", body = ResearchResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 500, description = "리서치 미설정", body = ErrorResponse),
        (status = 502, description = "리서치 API 실패", body = ErrorResponse)
    )
)]
pub async fn research_handler(
    State(state): State<AppState>,
    request: Result<Json<ResearchRequest>, JsonRejection>,
) -> Result<Json<ResearchResponse>, AppError> {
    let Json(request) = request?;
    request.validate()?;

    tracing::info!(keyword = %request.keyword, "Research request received");

    let output = state.research_service.research_topic(&request.keyword).await?;

    tracing::info!(
        insight_count = output
            .get("key_insights")
            .and_then(serde_json::Value::as_array)
            .map_or(0, Vec::len),
        "Research completed"
    );

    Ok(Json(ResearchResponse { output }))
}
