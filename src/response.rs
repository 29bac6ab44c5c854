use serde::Serialize;
use utoipa::ToSchema;

/// 에러 응답 형식
///
/// ```json
/// {
///   "isSuccess": false,
///   "code": "COMMON400",
///   "message": "...",
///   "result": null
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// 성공 여부 (에러 시 항상 false)
    #[schema(example = false)]
    pub is_success: bool,

    /// 에러 코드
    #[schema(example = "COMMON400")]
    pub code: String,

    /// 에러 메시지
    #[schema(example = "Invalid request body.")]
    pub message: String,

    /// 항상 null
    pub result: Option<()>,
}

impl ErrorResponse {
    /// 에러 응답 생성
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_format() {
        let response = ErrorResponse::new("RESEARCH_001", "Research service is not configured.");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["isSuccess"], false);
        assert_eq!(json["code"], "RESEARCH_001");
        assert_eq!(json["message"], "Research service is not configured.");
        assert!(json["result"].is_null());
    }
}
