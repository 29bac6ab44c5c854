use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;
use validator::Validate;

/// 리서치 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResearchRequest {
    #[validate(length(min = 1, message = "keyword is required"))]
    #[schema(example = "pricing power")]
    pub keyword: String,
}

/// 음성 진행자가 참고할 단일 리서치 문서
///
/// 모델이 돌려준 JSON 객체는 필드 형태와 상관없이 그대로 전달되며,
/// 이 타입은 문서화된 기본 형태와 파싱 실패 시의 대체 문서를 나타냅니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ResearchDocument {
    pub title: String,

    /// 3~5 문단 분량의 배경 설명
    pub deep_context: String,

    pub key_insights: Vec<String>,

    pub discussion_points: Vec<String>,

    pub sources: Vec<String>,
}

impl ResearchDocument {
    /// 모델이 JSON을 돌려주지 않았을 때 원문을 그대로 담는 문서
    pub fn fallback(keyword: &str, raw_content: &str) -> Self {
        Self {
            title: format!("Research on {}", keyword),
            deep_context: raw_content.to_string(),
            ..Self::default()
        }
    }
}

impl From<ResearchDocument> for Value {
    fn from(document: ResearchDocument) -> Self {
        json!({
            "title": document.title,
            "deep_context": document.deep_context,
            "key_insights": document.key_insights,
            "discussion_points": document.discussion_points,
            "sources": document.sources,
        })
    }
}

/// 리서치 응답 DTO (프론트엔드는 `output` 키를 기대함)
#[derive(Debug, Serialize, ToSchema)]
pub struct ResearchResponse {
    #[schema(value_type = ResearchDocument)]
    pub output: Value,
}
