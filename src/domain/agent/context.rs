//! 리서치 필드를 프롬프트에 삽입할 텍스트 블록으로 변환합니다.

const CONTEXT_HEADER: &str = "WHAT YOU ALREADY KNOW ABOUT THIS TOPIC (from research — use this to challenge, validate, and go deeper, never to lecture):";

const WHY_HEADER: &str = "WHY THIS TOPIC IS URGENT RIGHT NOW (use this as the tension you bring into the room — the stakes that make this conversation matter):";

const QUESTIONS_HEADER: &str = "ANGLES TO COVER (these are territories, not a script — work each one in naturally based on where the conversation goes, and NEVER ask about an angle already covered):";

/// 프롬프트에 삽입되는 세 개의 블록
///
/// 원본 필드가 비어 있으면 해당 블록도 빈 문자열입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextBlocks {
    pub context_block: String,
    pub why_block: String,
    pub questions_block: String,
}

/// 세 개의 리서치 필드로부터 블록 생성
pub fn format_context(
    global_context: &str,
    why_this_matters: &str,
    key_questions: &[String],
) -> ContextBlocks {
    ContextBlocks {
        context_block: labeled_section(CONTEXT_HEADER, global_context),
        why_block: labeled_section(WHY_HEADER, why_this_matters),
        questions_block: bullet_section(QUESTIONS_HEADER, key_questions),
    }
}

fn labeled_section(header: &str, body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    format!("\n{}\n{}", header, body)
}

/// 항목 순서 그대로 `- <item>` 목록을 만듭니다. 중복 제거는 하지 않습니다.
fn bullet_section(header: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let bullets = items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n");
    format!("\n{}\n{}", header, bullets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_empty_blocks_for_empty_research() {
        // Act
        let blocks = format_context("", "", &[]);

        // Assert
        assert_eq!(blocks, ContextBlocks::default());
    }

    #[test]
    fn should_append_global_context_verbatim_after_header() {
        // Arrange
        let context = "Margins are shrinking across SaaS.\nSecond line.";

        // Act
        let blocks = format_context(context, "", &[]);

        // Assert
        assert!(blocks.context_block.starts_with("\nWHAT YOU ALREADY KNOW"));
        assert!(blocks
            .context_block
            .ends_with(":\nMargins are shrinking across SaaS.\nSecond line."));
        assert!(blocks.why_block.is_empty());
        assert!(blocks.questions_block.is_empty());
    }

    #[test]
    fn should_build_why_block_only_when_present() {
        let blocks = format_context("", "Rates just moved.", &[]);

        assert!(blocks.why_block.starts_with("\nWHY THIS TOPIC IS URGENT RIGHT NOW"));
        assert!(blocks.why_block.ends_with("\nRates just moved."));
        assert!(blocks.context_block.is_empty());
    }

    #[test]
    fn should_render_questions_as_bullets_in_input_order() {
        // Arrange
        let questions = vec!["Why now?".to_string(), "What changed?".to_string()];

        // Act
        let blocks = format_context("", "", &questions);

        // Assert
        assert!(blocks.questions_block.starts_with("\nANGLES TO COVER"));
        assert!(blocks
            .questions_block
            .ends_with(":\n- Why now?\n- What changed?"));
    }

    #[test]
    fn should_keep_duplicate_questions() {
        let questions = vec!["Same?".to_string(), "Same?".to_string()];

        let blocks = format_context("", "", &questions);

        assert_eq!(blocks.questions_block.matches("- Same?").count(), 2);
    }
}
