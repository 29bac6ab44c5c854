pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod response;
pub mod shutdown;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::AppConfig;
use domain::agent::VoiceCredentials;
use domain::content::ContentService;
use domain::research::{PerplexityClient, ResearchService};
use error::AppError;

// Re-exports for integration tests
pub use domain::ai::{AiClient, AiClientTrait, OpenAiClient};
pub use domain::research::{ResearchClient, ResearchClientTrait};

/// 애플리케이션 공유 상태
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub voice_credentials: VoiceCredentials,
    pub content_service: ContentService,
    pub research_service: ResearchService,
}

impl AppState {
    /// 실제 외부 API 클라이언트로 상태 생성
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let ai_client: AiClient = Arc::new(OpenAiClient::new(&config.openai_api_key));
        let research_client: ResearchClient =
            Arc::new(PerplexityClient::new(config.perplexity_api_key.clone())?);

        Ok(Self::with_clients(config, ai_client, research_client))
    }

    /// 주어진 클라이언트로 상태 생성 (테스트에서 mock 주입용)
    pub fn with_clients(
        config: AppConfig,
        ai_client: AiClient,
        research_client: ResearchClient,
    ) -> Self {
        Self {
            voice_credentials: VoiceCredentials::new(config.elevenlabs_api_key.clone()),
            content_service: ContentService::new(ai_client),
            research_service: ResearchService::new(research_client),
            config,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::health::handler::health_check,
        domain::agent::handler::agent_config_handler,
        domain::transcript::handler::transcript_handler,
        domain::content::handler::linkedin_handler,
        domain::research::handler::research_handler,
    ),
    components(
        schemas(
            domain::health::dto::HealthStatus,
            domain::agent::dto::AgentConfigRequest,
            domain::agent::dto::AgentConfigResponse,
            domain::transcript::dto::TranscriptMessage,
            domain::transcript::dto::TranscriptRequest,
            domain::transcript::dto::GeneratedContent,
            domain::transcript::dto::TranscriptResponse,
            domain::content::dto::ContentType,
            domain::content::dto::LinkedInRequest,
            domain::content::dto::LinkedInResponse,
            domain::research::dto::ResearchRequest,
            domain::research::dto::ResearchDocument,
            domain::research::dto::ResearchResponse,
            response::ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "헬스체크 API"),
        (name = "Agent", description = "음성 에이전트 세션 설정 API"),
        (name = "Transcript", description = "인터뷰 트랜스크립트 API"),
        (name = "Content", description = "LinkedIn 글 생성 API"),
        (name = "Research", description = "주제 리서치 API")
    )
)]
pub struct ApiDoc;

/// 라우터 생성
///
/// `metrics_handle`이 있으면 `/metrics`에서 Prometheus 포맷으로 노출합니다.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(domain::health::health_check))
        .route(
            "/agent-config",
            post(domain::agent::agent_config_handler),
        )
        .route(
            "/transcript",
            post(domain::transcript::transcript_handler),
        )
        .route(
            "/generate-linkedin",
            post(domain::content::linkedin_handler),
        )
        .route(
            "/api/research",
            post(domain::research::research_handler),
        );

    if let Some(handle) = metrics_handle {
        router = router.route("/metrics", get(move || async move { handle.render() }));
    }

    // 타임아웃(408) 응답도 요청 추적 대상
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::from_fn(global::request_tracing))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// 허용 origin 목록 기반 CORS 설정 (credentials 허용)
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// 테스트용 라우터 생성 (mock 클라이언트 주입)
pub fn create_test_router_with_mock<A, R>(ai_client: A, research_client: R) -> Router
where
    A: AiClientTrait + 'static,
    R: ResearchClientTrait + 'static,
{
    let config = AppConfig {
        elevenlabs_api_key: Some("test-elevenlabs-key".to_string()),
        ..AppConfig::default()
    };
    create_test_router_with_config(config, ai_client, research_client)
}

/// 설정을 지정한 테스트용 라우터 생성
pub fn create_test_router_with_config<A, R>(
    config: AppConfig,
    ai_client: A,
    research_client: R,
) -> Router
where
    A: AiClientTrait + 'static,
    R: ResearchClientTrait + 'static,
{
    let state = AppState::with_clients(config, Arc::new(ai_client), Arc::new(research_client));
    create_router(state, None)
}
