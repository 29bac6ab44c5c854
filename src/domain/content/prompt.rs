//! LinkedIn 글 생성 프롬프트
//!
//! 공통 작성 규칙(base rules)에 글 유형별 구조 템플릿 하나를 붙여 최종 프롬프트를 만듭니다.
//! 템플릿 선택은 주입된 난수 생성기로 하므로 테스트에서는 시드를 고정합니다.

use rand::Rng;

use super::dto::ContentType;

/// 시스템 메시지
pub const SYSTEM_PROMPT: &str = "You are a world-class LinkedIn ghostwriter.";

pub const DEFAULT_WRITING_STYLE: &str = "authentic, professional";

/// 글 구조 템플릿
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostTemplate {
    pub name: &'static str,
    pub structure: &'static str,
    pub example_flow: Option<&'static str>,
    /// 프롬프트 마지막 지시문
    pub closing: &'static str,
}

const WRITE_NOW: &str = "WRITE THE POST NOW in this style using the transcript:";

pub const PERSONAL_STORY_TEMPLATES: [PostTemplate; 4] = [
    PostTemplate {
        name: "Linear Personal Story (Action-First)",
        closing: "WRITE THE POST NOW in this style used the transcripts:",
        structure: "Strong action statement (NO timeframe - dive right in)

What was happening (context from transcript)

The turning point

What changed/The Insight

Outcome (specific, from transcript)

Reflection question",
        example_flow: Some(
            "\"My team was losing 30 minutes daily...
Everyone knew what they did...
Built a simple bot...
Result: Team saves 2.5 hours weekly...
Sometimes the best tools solve memory problems...
What's one process you automated?\"",
        ),
    },
    PostTemplate {
        name: "Reverse Reveal Story",
        closing: WRITE_NOW,
        structure: "Bold outcome statement (what happened/result - NO timeframe)

Wait, how? (create curiosity)

Flashback to situation (context from transcript)

What was actually done (specific action)

Why it worked (key insight)

Closing thought",
        example_flow: Some(
            "\"I almost didn't pitch this $15K project.
Why? Spreadsheet said $8K.
But I realized...
Quoted $15K. They said yes.
Clients price by risk, not effort.
What's a project you underpriced?\"",
        ),
    },
    PostTemplate {
        name: "Before/After Contrast",
        closing: WRITE_NOW,
        structure: "Used to [old behavior mentioned in transcript]
Now [new behavior/insight]

The shift happened when [catalyst]

Before state (describe the pain)

After state (describe improvement)

The one thing that made difference

Question for readers",
        example_flow: Some(
            "\"Used to spend 4 hours on outreach.
Now I spend 45 mins.
The shift: Automation.
Before: Manual, exhausting.
After: Automatic, personalized.
Best automation handles data, not relationships.
What manual task are you doing?\"",
        ),
    },
    PostTemplate {
        name: "Vulnerable/Honest Confession",
        closing: WRITE_NOW,
        structure: "Honest confession or mistake (from transcript - NO timeframe)

Why this mattered (stakes/emotion)

What was tried first (struggle)

What actually worked (solution)

Key learning

Empowering question",
        example_flow: Some(
            "\"I quoted $5K for $8K work.
Felt relief, not excitement.
Optimizing for comfort over growth.
Next pitch: $12K. Uncomfortable.
But discomfort is a compass.
What are you undercharging for?\"",
        ),
    },
];

pub const CAREER_CHALLENGE_TEMPLATES: [PostTemplate; 4] = [
    PostTemplate {
        name: "Pattern Recognition (Insight)",
        closing: WRITE_NOW,
        structure: "I kept noticing [pattern from transcript] (NO specific timeframe)

Every time [trigger], [result] happened

The real issue was [deep insight]

How to approach it (solution)

What's still a work in progress

Question for others",
        example_flow: None,
    },
    PostTemplate {
        name: "Moment of Clarity",
        closing: WRITE_NOW,
        structure: "Specific moment that changed perspective (from transcript)

Here's what happened (scene setting)

The realization (specific insight)

Why it wasn't obvious before

What is done differently now

Invitation for others to share",
        example_flow: None,
    },
    PostTemplate {
        name: "Problem-Agitate-Solve",
        closing: WRITE_NOW,
        structure: "The problem (clear, relatable - NO timeframe)

Why it got worse (agitate the pain from transcript)

Failed attempts (what didn't work)

What finally worked (specific solution)

Current state (honest results)

Question for others",
        example_flow: None,
    },
    PostTemplate {
        name: "Contrarian Take",
        closing: WRITE_NOW,
        structure: "Unpopular opinion about [topic]

Why conventional wisdom says opposite

Experience proving it wrong (from transcript)

Why this approach works

When it might NOT work (nuance)

Open question for debate",
        example_flow: None,
    },
];

/// 글 유형이 지정되지 않은 경우 무작위로 선택
pub fn choose_content_type<R: Rng + ?Sized>(rng: &mut R) -> ContentType {
    if rng.gen_bool(0.5) {
        ContentType::PersonalStory
    } else {
        ContentType::CareerChallenge
    }
}

/// 글 유형에 맞는 템플릿 하나를 균등 확률로 선택 (General은 템플릿 없음)
pub fn choose_template<R: Rng + ?Sized>(
    rng: &mut R,
    content_type: ContentType,
) -> Option<PostTemplate> {
    let templates: &[PostTemplate] = match content_type {
        ContentType::PersonalStory => &PERSONAL_STORY_TEMPLATES,
        ContentType::CareerChallenge => &CAREER_CHALLENGE_TEMPLATES,
        ContentType::General => return None,
    };
    Some(templates[rng.gen_range(0..templates.len())])
}

/// 공통 작성 규칙
pub fn base_rules(user_name: &str, writing_style: &str, transcript: &str) -> String {
    format!(
        r#"
YOU ARE: A LinkedIn ghostwriter writing for {user_name}.

SOURCE MATERIAL:
You are writing based on the provided PODCAST TRANSCRIPT.
- Do NOT invent stories.
- Extract the specific story, insight, or lesson from the transcript that fits the selected template.
- Use the guest's/speaker's actual words and phrasing where possible for authenticity.

WRITING VOICE: {writing_style}
TRANSCRIPT CONTEXT: The speaker is {user_name} (or the guest). Write from their perspective ("I").

PROFESSIONAL PERSONAL VOICE:
✓ Use "I/me/my" naturally
✓ Share specific details from the transcript (numbers, tools, specific moments)
✓ Sound polished but conversational (like advising a colleague)
✓ Show authentic experience, not generic advice

CRITICAL - OPENING LINE VARIETY:
❌ DO NOT start with "[Time period] ago, I..." unless essential
❌ DO NOT force timeframes into every opening
✓ Vary openings:
  - Start with action: "I quoted $8K..."
  - Start with realization: "My manager called me out..."
  - Start with contrast: "Used to X, now I Y"
  - Start with pattern: "Every time I do X..."
  - Start with NO timeframe

❌ AVOID:
- Corporate buzzwords: "leveraged", "synergized", "optimized"
- Repetitive patterns: "Last month/week/year, I..."
- Guru speak: "Here's what nobody tells you"
- Generic advice: "Always do X"

FORMATTING:
- Short lines (10-20 words max)
- Blank line after every 2-3 sentences
- Natural paragraph flow
- End with: "Found this valuable? Feel free to repost ♻️" (unless template says otherwise)

TRANSCRIPT:
{transcript}
"#
    )
}

/// 작성 규칙 + 템플릿으로 최종 사용자 프롬프트 생성
pub fn render_post_prompt(base_rules: &str, topic: &str, template: Option<&PostTemplate>) -> String {
    let Some(template) = template else {
        return format!(
            r#"{base_rules}

Write a professional personal LinkedIn post about: "{topic}" based on the transcript.

Keep it authentic, specific, and use the voice guidelines above.

REMEMBER: Vary your opening line. Don't start with a timeframe unless it's truly essential."#
        );
    };

    let example = template
        .example_flow
        .map(|flow| format!("\n\nEXAMPLE FLOW:\n{}", flow))
        .unwrap_or_default();

    format!(
        r#"{base_rules}

TEMPLATE: {name}

Write about: "{topic}" (Based on the Transcript)

STRUCTURE:
{structure}{example}

{closing}"#,
        name = template.name,
        structure = template.structure,
        closing = template.closing,
    )
}
