use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// LinkedIn 글 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    /// 개인 경험담
    PersonalStory,
    /// 업무 인사이트
    CareerChallenge,
    /// 템플릿 없는 일반 글 (알 수 없는 값도 여기로)
    #[serde(other)]
    General,
}

/// LinkedIn 글 생성 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInRequest {
    #[validate(length(min = 1, message = "topic is required"))]
    #[schema(example = "Pricing Power")]
    pub topic: String,

    #[schema(example = "Sam")]
    pub user_name: Option<String>,

    #[validate(length(min = 1, message = "transcript is required"))]
    pub transcript: String,

    #[schema(example = "authentic, professional")]
    pub writing_style: Option<String>,

    /// 지정하지 않으면 personal-story / career-challenge 중 무작위
    pub content_type: Option<ContentType>,
}

/// LinkedIn 글 생성 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct LinkedInResponse {
    pub linkedin: String,
}
