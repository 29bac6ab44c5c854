use serde_json::Value;

use super::client::ResearchClient;
use super::dto::ResearchDocument;
use crate::error::AppError;

/// 주제 리서치 서비스
#[derive(Clone)]
pub struct ResearchService {
    client: ResearchClient,
}

impl ResearchService {
    pub fn new(client: ResearchClient) -> Self {
        Self { client }
    }

    /// 키워드 하나로 리서치 문서를 생성합니다.
    pub async fn research_topic(&self, keyword: &str) -> Result<Value, AppError> {
        let content = self.client.research(keyword).await?;
        Ok(parse_research_document(keyword, &content))
    }
}

/// 모델 응답을 문서로 파싱 (```json 코드 펜스 허용)
///
/// JSON 객체면 필드 형태를 검사하지 않고 그대로 반환하고,
/// JSON이 아니거나 객체가 아니면 원문을 담은 대체 문서를 반환합니다.
pub fn parse_research_document(keyword: &str, content: &str) -> Value {
    let mut clean = content.trim();
    if let Some(rest) = clean.strip_prefix("```json") {
        clean = rest;
    }
    if let Some(rest) = clean.strip_suffix("```") {
        clean = rest;
    }

    match serde_json::from_str::<Value>(clean.trim()) {
        Ok(document) if document.is_object() => document,
        Ok(_) => {
            tracing::warn!("Research response was not a JSON object, using raw content");
            ResearchDocument::fallback(keyword, content).into()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Research response was not valid JSON, using raw content");
            ResearchDocument::fallback(keyword, content).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::research::client::MockResearchClientTrait;
    use serde_json::json;
    use std::sync::Arc;

    const DOCUMENT_JSON: &str = r#"{
        "title": "The Pricing Power Paradox",
        "deep_context": "Companies rarely test price.",
        "key_insights": ["Most firms never raise prices"],
        "discussion_points": ["When did you last raise prices?"],
        "sources": ["Industry surveys"]
    }"#;

    #[test]
    fn should_parse_plain_json_document() {
        let document = parse_research_document("pricing", DOCUMENT_JSON);

        assert_eq!(document["title"], "The Pricing Power Paradox");
        assert_eq!(document["key_insights"], json!(["Most firms never raise prices"]));
    }

    #[test]
    fn should_strip_json_code_fence() {
        // Arrange
        let content = format!("```json\n{}\n```", DOCUMENT_JSON);

        // Act
        let document = parse_research_document("pricing", &content);

        // Assert
        assert_eq!(document["deep_context"], "Companies rarely test price.");
        assert_eq!(document["sources"], json!(["Industry surveys"]));
    }

    #[test]
    fn should_keep_document_with_null_field() {
        // Arrange
        let content = r#"{"title": "Pricing Paradox", "deep_context": "Context.", "key_insights": ["a"], "sources": null}"#;

        // Act
        let document = parse_research_document("pricing", content);

        // Assert
        assert_eq!(document["title"], "Pricing Paradox");
        assert_eq!(document["key_insights"], json!(["a"]));
        assert!(document["sources"].is_null());
    }

    #[test]
    fn should_keep_object_shaped_sources() {
        // Arrange
        let content = r#"{"title": "Pricing Paradox", "key_insights": ["a"], "sources": [{"name": "HBR", "url": "https://hbr.org"}]}"#;

        // Act
        let document = parse_research_document("pricing", content);

        // Assert
        assert_eq!(document["title"], "Pricing Paradox");
        assert_eq!(document["sources"][0]["name"], "HBR");
        assert_eq!(document["key_insights"], json!(["a"]));
    }

    #[test]
    fn should_pass_through_partial_document() {
        let document = parse_research_document("pricing", r#"{"title": "Only title"}"#);

        assert_eq!(document, json!({ "title": "Only title" }));
    }

    #[test]
    fn should_fall_back_to_raw_content_for_prose() {
        // Arrange
        let content = "Pricing power is the ability to raise prices without losing customers.";

        // Act
        let document = parse_research_document("pricing power", content);

        // Assert
        assert_eq!(document["title"], "Research on pricing power");
        assert_eq!(document["deep_context"], content);
        assert_eq!(document["key_insights"], json!([]));
        assert_eq!(document["sources"], json!([]));
    }

    #[test]
    fn should_fall_back_for_non_object_json() {
        let document = parse_research_document("pricing", r#"["just", "a", "list"]"#);

        assert_eq!(document["title"], "Research on pricing");
        assert_eq!(document["deep_context"], r#"["just", "a", "list"]"#);
    }

    #[tokio::test]
    async fn should_research_topic_through_client() {
        // Arrange
        let mut mock = MockResearchClientTrait::new();
        mock.expect_research()
            .withf(|keyword| keyword == "pricing")
            .times(1)
            .returning(|_| Ok(DOCUMENT_JSON.to_string()));
        let service = ResearchService::new(Arc::new(mock));

        // Act
        let document = service.research_topic("pricing").await.unwrap();

        // Assert
        assert_eq!(document["title"], "The Pricing Power Paradox");
    }

    #[tokio::test]
    async fn should_propagate_client_error() {
        let mut mock = MockResearchClientTrait::new();
        mock.expect_research()
            .returning(|_| Err(AppError::ResearchNotConfigured));
        let service = ResearchService::new(Arc::new(mock));

        let result = service.research_topic("pricing").await;

        assert!(matches!(result, Err(AppError::ResearchNotConfigured)));
    }
}
