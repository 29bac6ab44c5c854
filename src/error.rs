use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::ValidationErrors;

use crate::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    ValidationError(String),

    #[error("invalid JSON body: {0}")]
    JsonParseFailed(String),

    #[error("OpenAI authentication failed")]
    OpenAiAuthError,

    #[error("OpenAI rate limit exceeded")]
    OpenAiRateLimitError,

    #[error("OpenAI temporarily unavailable")]
    OpenAiTemporaryError,

    #[error("OpenAI error: {0}")]
    OpenAiError(String),

    #[error("PERPLEXITY_API_KEY is not set")]
    ResearchNotConfigured,

    #[error("research API error: {0}")]
    ResearchApiError(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::OpenAiAuthError => "AI_001",
            AppError::OpenAiRateLimitError => "AI_002",
            AppError::OpenAiTemporaryError => "AI_003",
            AppError::OpenAiError(_) => "AI_004",
            AppError::ResearchNotConfigured => "RESEARCH_001",
            AppError::ResearchApiError(_) => "RESEARCH_002",
            AppError::Internal(_) => "COMMON500",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::OpenAiAuthError => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::OpenAiRateLimitError => StatusCode::TOO_MANY_REQUESTS,
            AppError::OpenAiTemporaryError => StatusCode::SERVICE_UNAVAILABLE,
            AppError::OpenAiError(_) => StatusCode::BAD_GATEWAY,
            AppError::ResearchNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ResearchApiError(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에 노출되는 메시지
    ///
    /// 외부 API의 원본 에러 내용은 로그에만 남깁니다.
    pub fn message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::JsonParseFailed(msg) => format!("Invalid request body: {}", msg),
            AppError::OpenAiAuthError => "AI service authentication failed.".to_string(),
            AppError::OpenAiRateLimitError => {
                "AI service rate limit exceeded. Please try again later.".to_string()
            }
            AppError::OpenAiTemporaryError => {
                "AI service is temporarily unavailable. Please try again later.".to_string()
            }
            AppError::OpenAiError(_) => "AI service request failed.".to_string(),
            AppError::ResearchNotConfigured => "Research service is not configured.".to_string(),
            AppError::ResearchApiError(_) => "Research service request failed.".to_string(),
            AppError::Internal(_) => "Internal server error.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(code, error = %self, "Request failed");
        } else {
            tracing::warn!(code, error = %self, "Request rejected");
        }

        (status, Json(ErrorResponse::new(code, self.message()))).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}
