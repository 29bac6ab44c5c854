//! 실시간 음성 에이전트 플랫폼(Deepgram Voice Agent v1)의 `Settings` 메시지
//!
//! 순수 데이터만 조립하며 실제 세션 연결은 프론트엔드와 음성 플랫폼이 담당합니다.

use serde::Serialize;

const SETTINGS_MESSAGE_TYPE: &str = "Settings";
const AGENT_LANGUAGE: &str = "en";

const AUDIO_ENCODING: &str = "linear16";
pub const INPUT_SAMPLE_RATE: u32 = 16_000;
pub const OUTPUT_SAMPLE_RATE: u32 = 24_000;
const OUTPUT_CONTAINER: &str = "none";

const LISTEN_PROVIDER: &str = "deepgram";
const LISTEN_MODEL: &str = "nova-3";

const THINK_PROVIDER: &str = "open_ai";
const THINK_MODEL: &str = "gpt-5.2";

const SPEAK_PROVIDER: &str = "eleven_labs";
const SPEAK_MODEL_ID: &str = "eleven_turbo_v2_5";
const SPEAK_ENDPOINT_URL: &str =
    "https://api.elevenlabs.io/v1/text-to-speech/ljX1ZrXuDIIRVcmiVSyR";

/// speak 단계 외부 TTS 호출에 필요한 자격 증명
///
/// 프로세스 시작 시 `AppConfig`에서 한 번 읽어 전달합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCredentials {
    pub elevenlabs_api_key: Option<String>,
}

impl VoiceCredentials {
    pub fn new(elevenlabs_api_key: Option<String>) -> Self {
        Self { elevenlabs_api_key }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionConfig {
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub audio: AudioSettings,
    pub agent: AgentSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioSettings {
    pub input: AudioFormat,
    pub output: AudioFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioFormat {
    pub encoding: &'static str,
    pub sample_rate: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentSettings {
    pub language: &'static str,
    pub greeting: String,
    pub listen: ListenSettings,
    pub think: ThinkSettings,
    pub speak: SpeakSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderModel {
    #[serde(rename = "type")]
    pub provider_type: &'static str,
    pub model: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListenSettings {
    pub provider: ProviderModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThinkSettings {
    pub provider: ProviderModel,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakSettings {
    pub provider: SpeakProvider,
    pub endpoint: SpeakEndpoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakProvider {
    #[serde(rename = "type")]
    pub provider_type: &'static str,
    pub model_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakEndpoint {
    pub url: &'static str,
    pub headers: SpeakHeaders,
}

/// 키가 없으면 `null`로 직렬화되고, 실패는 TTS 호출 시점에 발생합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakHeaders {
    #[serde(rename = "xi-api-key")]
    pub xi_api_key: Option<String>,
}

/// 에이전트 첫 인사말
pub fn greeting(topic_title: &str, user_name: &str) -> String {
    format!(
        "Hey {}, welcome. Let's get into it — I want your real take on {}. ",
        user_name, topic_title
    )
}

/// 완성된 프롬프트를 음성 에이전트 설정으로 감쌉니다. 프롬프트는 수정하지 않습니다.
pub fn assemble_session_config(
    system_prompt: &str,
    topic_title: &str,
    user_name: &str,
    credentials: &VoiceCredentials,
) -> SessionConfig {
    SessionConfig {
        message_type: SETTINGS_MESSAGE_TYPE,
        audio: AudioSettings {
            input: AudioFormat {
                encoding: AUDIO_ENCODING,
                sample_rate: INPUT_SAMPLE_RATE,
                container: None,
            },
            output: AudioFormat {
                encoding: AUDIO_ENCODING,
                sample_rate: OUTPUT_SAMPLE_RATE,
                container: Some(OUTPUT_CONTAINER),
            },
        },
        agent: AgentSettings {
            language: AGENT_LANGUAGE,
            greeting: greeting(topic_title, user_name),
            listen: ListenSettings {
                provider: ProviderModel {
                    provider_type: LISTEN_PROVIDER,
                    model: LISTEN_MODEL,
                },
            },
            think: ThinkSettings {
                provider: ProviderModel {
                    provider_type: THINK_PROVIDER,
                    model: THINK_MODEL,
                },
                prompt: system_prompt.to_string(),
            },
            speak: SpeakSettings {
                provider: SpeakProvider {
                    provider_type: SPEAK_PROVIDER,
                    model_id: SPEAK_MODEL_ID,
                },
                endpoint: SpeakEndpoint {
                    url: SPEAK_ENDPOINT_URL,
                    headers: SpeakHeaders {
                        xi_api_key: credentials.elevenlabs_api_key.clone(),
                    },
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials(key: Option<&str>) -> VoiceCredentials {
        VoiceCredentials::new(key.map(str::to_string))
    }

    #[test]
    fn should_serialize_field_exact_settings_payload() {
        // Arrange
        let config =
            assemble_session_config("PROMPT", "Pricing Power", "Sam", &credentials(Some("xi-key")));

        // Act
        let json = serde_json::to_value(&config).unwrap();

        // Assert
        assert_eq!(
            json,
            json!({
                "type": "Settings",
                "audio": {
                    "input": { "encoding": "linear16", "sample_rate": 16000 },
                    "output": { "encoding": "linear16", "sample_rate": 24000, "container": "none" }
                },
                "agent": {
                    "language": "en",
                    "greeting": "Hey Sam, welcome. Let's get into it — I want your real take on Pricing Power. ",
                    "listen": { "provider": { "type": "deepgram", "model": "nova-3" } },
                    "think": {
                        "provider": { "type": "open_ai", "model": "gpt-5.2" },
                        "prompt": "PROMPT"
                    },
                    "speak": {
                        "provider": { "type": "eleven_labs", "model_id": "eleven_turbo_v2_5" },
                        "endpoint": {
                            "url": "https://api.elevenlabs.io/v1/text-to-speech/ljX1ZrXuDIIRVcmiVSyR",
                            "headers": { "xi-api-key": "xi-key" }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn should_embed_null_key_when_credential_missing() {
        // Act
        let config = assemble_session_config("PROMPT", "Topic", "Guest", &credentials(None));
        let json = serde_json::to_value(&config).unwrap();

        // Assert
        let headers = &json["agent"]["speak"]["endpoint"]["headers"];
        assert!(headers.as_object().unwrap().contains_key("xi-api-key"));
        assert!(headers["xi-api-key"].is_null());
    }

    #[test]
    fn should_not_emit_container_for_input_stream() {
        let config = assemble_session_config("PROMPT", "Topic", "Guest", &credentials(None));
        let json = serde_json::to_value(&config).unwrap();

        assert!(json["audio"]["input"].get("container").is_none());
    }

    #[test]
    fn should_interpolate_user_and_topic_into_greeting() {
        assert_eq!(
            greeting("Hiring", "Jo"),
            "Hey Jo, welcome. Let's get into it — I want your real take on Hiring. "
        );
    }
}
