//! 음성 인터뷰 에이전트 설정 도메인
//!
//! ## 구조
//! - `context`: 리서치 필드 → 프롬프트 블록
//! - `prompt`: 인터뷰 진행자 시스템 프롬프트
//! - `settings`: 음성 에이전트 `Settings` 메시지
//! - `pipeline`: 세 단계를 순서대로 실행

pub mod context;
pub mod dto;
pub mod handler;
pub mod pipeline;
pub mod prompt;
pub mod settings;

pub use dto::{AgentConfigRequest, AgentConfigResponse};
pub use handler::agent_config_handler;
pub use pipeline::{build_agent_config, PipelineError, SessionInput};
pub use settings::VoiceCredentials;
