use std::env;

/// 프론트엔드 개발 서버 기본 origin 목록
const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:5174",
    "http://localhost:3000",
];

/// 애플리케이션 설정
///
/// 프로세스 시작 시 한 번만 환경 변수에서 읽어 들이고,
/// 이후에는 `AppState`를 통해 각 도메인에 값으로 전달합니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub request_timeout_secs: u64,
    pub cors_allowed_origins: Vec<String>,

    // AI Service
    pub openai_api_key: String,

    // Voice agent (speak stage)
    pub elevenlabs_api_key: Option<String>,

    // Research
    pub perplexity_api_key: Option<String>,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| default_origins());

        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!(
                "OPENAI_API_KEY 환경변수가 설정되지 않았습니다. LinkedIn 글 생성이 실패합니다."
            );
            String::new()
        });

        let elevenlabs_api_key = env::var("ELEVENLABS_API_KEY").ok();
        if elevenlabs_api_key.is_none() {
            tracing::warn!(
                "ELEVENLABS_API_KEY 환경변수가 설정되지 않았습니다. 음성 세션 설정에 빈 키가 포함됩니다."
            );
        }

        let perplexity_api_key = env::var("PERPLEXITY_API_KEY").ok();

        Ok(Self {
            server_host,
            server_port,
            request_timeout_secs,
            cors_allowed_origins,
            openai_api_key,
            elevenlabs_api_key,
            perplexity_api_key,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            request_timeout_secs: 90,
            cors_allowed_origins: default_origins(),
            openai_api_key: String::new(),
            elevenlabs_api_key: None,
            perplexity_api_key: None,
        }
    }
}

fn default_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
}

/// 쉼표로 구분된 origin 목록 파싱 (빈 항목은 무시)
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid request timeout")]
    InvalidTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_comma_separated_origins() {
        let origins = parse_origins("https://a.example, https://b.example");

        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn should_skip_empty_origin_entries() {
        let origins = parse_origins(" ,https://a.example,,");

        assert_eq!(origins, vec!["https://a.example"]);
    }

    #[test]
    fn default_config_should_use_local_dev_origins() {
        let config = AppConfig::default();

        assert_eq!(config.cors_allowed_origins.len(), 3);
        assert!(config
            .cors_allowed_origins
            .contains(&"http://localhost:5173".to_string()));
        assert_eq!(config.server_port, 8000);
        assert!(config.elevenlabs_api_key.is_none());
    }
}
