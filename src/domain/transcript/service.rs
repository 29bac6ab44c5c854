use super::dto::{GeneratedContent, TranscriptMessage, TranscriptResponse};

/// AI 진행자 화자 라벨
pub const HOST_SPEAKER: &str = "Alex (AI Host)";

const USER_ROLE: &str = "user";

/// 대화 메시지를 사람이 읽을 수 있는 트랜스크립트로 변환합니다.
///
/// 내용이 비어 있는 메시지는 건너뛰고, 각 발화는 빈 줄로 구분합니다.
pub fn format_transcript(
    topic: &str,
    user_name: &str,
    messages: &[TranscriptMessage],
    duration_secs: i64,
) -> TranscriptResponse {
    let transcript = messages
        .iter()
        .filter_map(|message| {
            let content = message.content.as_deref().unwrap_or_default().trim();
            if content.is_empty() {
                return None;
            }
            let speaker = if message.role.as_deref() == Some(USER_ROLE) {
                user_name
            } else {
                HOST_SPEAKER
            };
            Some(format!("{}: {}", speaker, content))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    TranscriptResponse {
        success: true,
        topic: topic.to_string(),
        user_name: user_name.to_string(),
        duration: format_duration(duration_secs),
        transcript,
        content: GeneratedContent::default(),
    }
}

/// 음수도 내림 나눗셈으로 처리합니다. (-5초 → `-1 min 55 sec`)
fn format_duration(secs: i64) -> String {
    format!("{} min {} sec", secs.div_euclid(60), secs.rem_euclid(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: &str, content: Option<&str>) -> TranscriptMessage {
        TranscriptMessage {
            role: Some(role.to_string()),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn should_label_speakers_and_separate_with_blank_line() {
        // Arrange
        let messages = vec![
            message("assistant", Some("What is your real position?")),
            message("user", Some("  Most teams underprice.  ")),
        ];

        // Act
        let result = format_transcript("Pricing Power", "Sam", &messages, 0);

        // Assert
        assert_eq!(
            result.transcript,
            "Alex (AI Host): What is your real position?\n\nSam: Most teams underprice."
        );
    }

    #[test]
    fn should_skip_blank_and_missing_content() {
        let messages = vec![
            message("user", Some("   ")),
            message("assistant", None),
            message("user", Some("Kept.")),
        ];

        let result = format_transcript("Topic", "Sam", &messages, 0);

        assert_eq!(result.transcript, "Sam: Kept.");
    }

    #[test]
    fn should_treat_unknown_role_as_host() {
        let messages = vec![message("system", Some("Hello"))];

        let result = format_transcript("Topic", "Sam", &messages, 0);

        assert_eq!(result.transcript, "Alex (AI Host): Hello");
    }

    #[test]
    fn should_treat_missing_role_as_host() {
        let messages = vec![TranscriptMessage {
            role: None,
            content: Some("Welcome back.".to_string()),
        }];

        let result = format_transcript("Topic", "Sam", &messages, 0);

        assert_eq!(result.transcript, "Alex (AI Host): Welcome back.");
    }

    #[test]
    fn should_floor_negative_duration() {
        assert_eq!(format_duration(-5), "-1 min 55 sec");
        assert_eq!(format_duration(-120), "-2 min 0 sec");
    }

    #[test]
    fn should_format_duration_in_minutes_and_seconds() {
        assert_eq!(format_duration(312), "5 min 12 sec");
        assert_eq!(format_duration(0), "0 min 0 sec");
        assert_eq!(format_duration(59), "0 min 59 sec");
    }

    #[test]
    fn should_return_empty_content_placeholders() {
        let result = format_transcript("Topic", "Sam", &[], 60);

        assert!(result.success);
        assert!(result.transcript.is_empty());
        assert!(result.content.linkedin.is_empty());
        assert!(result.content.twitter.is_empty());
        assert_eq!(result.duration, "1 min 0 sec");
    }
}
