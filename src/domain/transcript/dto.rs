use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 대화 한 턴
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TranscriptMessage {
    /// `user` 또는 `assistant` (그 외와 null은 진행자로 취급)
    #[serde(default)]
    #[schema(example = "user")]
    pub role: Option<String>,

    #[serde(default)]
    #[schema(example = "Honestly, most teams underprice.")]
    pub content: Option<String>,
}

/// 트랜스크립트 포맷 요청 DTO
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRequest {
    #[schema(example = "Pricing Power")]
    pub topic: Option<String>,

    #[schema(example = "Sam")]
    pub user_name: Option<String>,

    #[serde(default)]
    pub messages: Vec<TranscriptMessage>,

    /// 세션 길이 (초)
    #[schema(example = 312)]
    pub duration: Option<i64>,
}

/// 후속 단계에서 채워질 소셜 콘텐츠 자리
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct GeneratedContent {
    pub linkedin: String,
    pub twitter: String,
}

/// 트랜스크립트 포맷 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResponse {
    pub success: bool,

    pub topic: String,

    pub user_name: String,

    /// 예: `5 min 12 sec`
    #[schema(example = "5 min 12 sec")]
    pub duration: String,

    /// 화자 라벨이 붙은 본문
    pub transcript: String,

    pub content: GeneratedContent,
}
