//! Post-processing for model output before it reaches the user.
//!
//! Removes AI self-disclosure phrasing and the markdown fence the model
//! sometimes wraps the whole answer in. Fences inside the text are kept.

use std::sync::LazyLock;

use regex::Regex;

/// Phrases a model uses to announce itself. Matched case-insensitively.
const DISCLOSURE_PHRASES: &[&str] = &[
    "As an AI language model",
    "As a language model",
    "As an AI assistant",
    "As an AI model",
    "As an AI",
    "I am an AI language model",
    "I'm an AI language model",
    "I am an AI assistant",
    "I'm an AI assistant",
    "I am an AI",
    "I'm an AI",
    "Being an AI",
    "作为一个AI语言模型",
    "作为一个人工智能语言模型",
    "作为AI语言模型",
    "作为人工智能助手",
    "作为一个AI助手",
    "作为AI助手",
    "作为一个AI",
    "作为AI",
    "我是一个AI语言模型",
    "我是一个人工智能",
    "我是一个AI",
    "我是AI",
];

/// Sanitizes raw model text. Never fails; empty input yields an empty string.
pub fn sanitize(raw: &str) -> String {
    let text = strip_outer_fences(raw.trim());
    let text = strip_disclosures(text);
    let text = collapse_blank_lines(&text);
    text.trim().to_string()
}

/// Removes a fence line at the very start and, only then, a bare fence at the very end.
fn strip_outer_fences(text: &str) -> &str {
    static OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\A```[A-Za-z0-9_+-]*[ \t]*(?:\r?\n|\z)").expect("valid regex")
    });
    static CLOSE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?:\A|\n)[ \t]*```[ \t]*\z").expect("valid regex"));

    let Some(open) = OPEN_RE.find(text) else {
        return text;
    };
    let text = &text[open.end()..];
    match CLOSE_RE.find(text) {
        Some(close) => text[..close.start()].trim(),
        None => text.trim(),
    }
}

fn strip_disclosures(text: &str) -> String {
    static DISCLOSURE_RE: LazyLock<Regex> = LazyLock::new(|| {
        // Longest first so "As an AI language model" wins over "As an AI".
        let mut phrases: Vec<&str> = DISCLOSURE_PHRASES.to_vec();
        phrases.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
        let alternation = |ascii: bool| {
            phrases
                .iter()
                .filter(|p| p.is_ascii() == ascii)
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|")
        };
        // English phrases must stand as whole words ("As an airline" is not a match).
        // Word boundaries are meaningless between CJK characters, so those match bare.
        let pattern = format!(
            r"(?i)(?:\b(?:{})\b|(?:{}))[ \t]*[,，:：]?[ \t]*",
            alternation(true),
            alternation(false)
        );
        Regex::new(&pattern).expect("valid regex")
    });

    DISCLOSURE_RE.replace_all(text, "").into_owned()
}

fn collapse_blank_lines(text: &str) -> String {
    static MULTI_BLANK_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("valid regex"));

    MULTI_BLANK_RE.replace_all(text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n\t "), "");
    }

    #[test]
    fn test_plain_text_only_trimmed() {
        assert_eq!(sanitize("  Dear Ms. Chen,\n\nThank you.  "), "Dear Ms. Chen,\n\nThank you.");
    }

    #[test]
    fn test_every_phrase_removed() {
        for phrase in DISCLOSURE_PHRASES {
            let input = format!("{phrase}, here is your letter.");
            let output = sanitize(&input);
            assert_eq!(output, "here is your letter.", "phrase: {phrase}");
        }
    }

    #[test]
    fn test_words_starting_with_ai_are_kept() {
        for input in [
            "As an airline operations analyst, I cut delays 20%.",
            "I'm an aid worker with ten years in the field.",
            "Being an aide to the CFO taught me budgeting.",
            "I am an aircraft mechanic.",
        ] {
            assert_eq!(sanitize(input), input);
        }
    }

    #[test]
    fn test_phrase_inside_longer_word_is_kept() {
        let input = "The team has an AI roadmap.";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_phrases_removed_case_insensitively() {
        assert_eq!(sanitize("AS AN AI LANGUAGE MODEL, I wrote this."), "I wrote this.");
        assert_eq!(sanitize("as an ai: Hello"), "Hello");
    }

    #[test]
    fn test_longest_phrase_wins() {
        assert_eq!(sanitize("As an AI language model, Hello"), "Hello");
    }

    #[test]
    fn test_chinese_phrase_with_full_width_comma() {
        assert_eq!(
            sanitize("作为一个AI语言模型，我为您写了这封信。"),
            "我为您写了这封信。"
        );
    }

    #[test]
    fn test_phrase_in_middle_of_text() {
        let input = "Dear team,\nI'm an AI, but I am excited to apply.";
        assert_eq!(sanitize(input), "Dear team,\nbut I am excited to apply.");
    }

    #[test]
    fn test_outer_fence_with_language_tag_stripped() {
        assert_eq!(
            sanitize("```markdown\nSubject: Hello\n\nHi Ana,\n```"),
            "Subject: Hello\n\nHi Ana,"
        );
    }

    #[test]
    fn test_trailing_code_block_keeps_closing_fence() {
        let input = "Example query:\n```sql\nSELECT 1;\n```";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_opening_fence_without_closing_fence_stripped() {
        assert_eq!(sanitize("```text\nHi Ana,\nThanks."), "Hi Ana,\nThanks.");
    }

    #[test]
    fn test_outer_bare_fence_stripped() {
        assert_eq!(sanitize("```\nBody text\n```\n"), "Body text");
    }

    #[test]
    fn test_interior_fence_preserved() {
        let input = "Here is a snippet:\n```rust\nfn main() {}\n```\nThanks.";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_only_outer_fences_removed_when_interior_present() {
        let input = "```\nIntro\n```js\nlet x = 1;\n```\nOutro\n```";
        assert_eq!(sanitize(input), "Intro\n```js\nlet x = 1;\n```\nOutro");
    }

    #[test]
    fn test_blank_lines_collapsed_after_removal() {
        let input = "Hello\n\nAs an AI\n\n\nWorld";
        assert_eq!(sanitize(input), "Hello\n\nWorld");
    }

    #[test]
    fn test_deterministic() {
        let input = "```\nAs an AI, hi\n```";
        assert_eq!(sanitize(input), sanitize(input));
    }
}
