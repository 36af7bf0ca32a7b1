//! Title, meta description, summary and search-result preview generation.

use crate::domain::models::{GooglePreview, PREVIEW_URL};
use crate::text::segment;

const TITLE_LINE_MAX_CHARS: usize = 100;
const TITLE_LINE_MIN_CHARS: usize = 10;
const TITLE_SCAN_LINES: usize = 3;
const TITLE_DISPLAY_LIMIT: usize = 60;
const DESCRIPTION_BUDGET: usize = 155;
const SUMMARY_BUDGET: usize = 200;

const PREVIEW_TITLE_LIMIT: usize = 60;
const PREVIEW_TITLE_CUT: usize = 57;
const PREVIEW_DESC_LIMIT: usize = 160;
const PREVIEW_DESC_CUT: usize = 157;

/// Derive a title candidate from the leading lines, falling back to the
/// first sentence. Always non-empty for non-empty input.
pub fn extract_title(text: &str) -> String {
    for line in text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(TITLE_SCAN_LINES)
    {
        let len = line.chars().count();
        if len < TITLE_LINE_MAX_CHARS && len > TITLE_LINE_MIN_CHARS && !line.ends_with('.') {
            return line.to_string();
        }
    }

    let sentences = segment::sentences(text);
    if let Some(first) = sentences.first() {
        if first.chars().count() <= TITLE_DISPLAY_LIMIT {
            return first.to_string();
        }
        return format!("{}...", segment::clip(first, PREVIEW_TITLE_CUT));
    }

    if text.chars().count() > TITLE_DISPLAY_LIMIT {
        format!("{}...", segment::clip(text, TITLE_DISPLAY_LIMIT))
    } else {
        text.to_string()
    }
}

/// Build a meta description by greedily packing sentences under the
/// character budget, leaving room for an ellipsis.
pub fn generate_description(text: &str) -> String {
    let packed = pack_sentences(text, DESCRIPTION_BUDGET);
    if packed.is_empty() {
        return format!("{}...", segment::clip(text, DESCRIPTION_BUDGET));
    }
    if packed.chars().count() > DESCRIPTION_BUDGET {
        return format!("{}...", segment::clip(&packed, DESCRIPTION_BUDGET - 3));
    }
    packed
}

/// Extractive summary carried in the report's `rawText` field.
pub fn generate_summary(text: &str) -> String {
    if segment::sentences(text).is_empty() {
        return if text.chars().count() > SUMMARY_BUDGET {
            format!("{}...", segment::clip(text, SUMMARY_BUDGET))
        } else {
            text.to_string()
        };
    }

    let packed = pack_sentences(text, SUMMARY_BUDGET);
    if packed.is_empty() {
        format!("{}...", segment::clip(text, SUMMARY_BUDGET))
    } else {
        packed
    }
}

/// Greedy sentence packing: append whole sentences (with a joining space)
/// while the accumulated length stays within the budget, stop at the first
/// sentence that would exceed it.
fn pack_sentences(text: &str, budget: usize) -> String {
    let mut out = String::new();
    let mut out_chars = 0;

    for sentence in segment::sentences(text) {
        let len = sentence.chars().count();
        if out_chars + len > budget {
            break;
        }
        out.push_str(sentence);
        out.push(' ');
        out_chars += len + 1;
    }

    out.trim_end().to_string()
}

/// Synthesize the search-result preview. Truncation flags reflect the
/// original lengths, not the truncated strings.
pub fn build_preview(title: &str, description: &str) -> GooglePreview {
    let title_truncated = title.chars().count() > PREVIEW_TITLE_LIMIT;
    let description_truncated = description.chars().count() > PREVIEW_DESC_LIMIT;

    GooglePreview {
        title: if title_truncated {
            format!("{}...", segment::clip(title, PREVIEW_TITLE_CUT))
        } else {
            title.to_string()
        },
        url: PREVIEW_URL.to_string(),
        description: if description_truncated {
            format!("{}...", segment::clip(description, PREVIEW_DESC_CUT))
        } else {
            description.to_string()
        },
        title_truncated,
        description_truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_a_qualifying_leading_line() {
        let text = "A Guide to Better Coffee\n\nSome paragraph about coffee beans.";
        assert_eq!(extract_title(text), "A Guide to Better Coffee");
    }

    #[test]
    fn title_skips_short_lines_and_lines_ending_in_a_period() {
        // "Intro." ends with a period and "Short" is under the 10-char
        // minimum, so the third line wins
        let text = "Intro.\nShort\nThe Actual Headline Here\nBody text follows.";
        assert_eq!(extract_title(text), "The Actual Headline Here");
    }

    #[test]
    fn title_falls_back_to_the_first_sentence() {
        let text = "This is a sentence acting as the opener. More text after it.";
        assert_eq!(extract_title(text), "This is a sentence acting as the opener.");
    }

    #[test]
    fn overlong_first_sentence_is_truncated_for_the_title() {
        let long_sentence = format!("{} end.", "word ".repeat(30).trim_end());
        let title = extract_title(&long_sentence);
        assert_eq!(title.chars().count(), 60);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn description_packs_whole_sentences_under_budget() {
        let text = "First sentence here. Second sentence follows. \
                    Third one is also included maybe. Fourth sentence is long enough \
                    that it will not fit under the one hundred fifty five character budget at all.";
        let description = generate_description(text);
        assert!(description.chars().count() <= 155);
        assert!(description.starts_with("First sentence here."));
        assert!(description.ends_with('.'));
    }

    #[test]
    fn description_falls_back_when_no_sentence_fits() {
        let text = format!("{}.", "a".repeat(400));
        let description = generate_description(&text);
        assert_eq!(description.chars().count(), 158);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn summary_packs_sentences_under_200_chars() {
        let text = "Short opener. Another short sentence.";
        assert_eq!(generate_summary(text), "Short opener. Another short sentence.");
    }

    #[test]
    fn preview_flags_follow_original_lengths() {
        let exact = "t".repeat(60);
        let preview = build_preview(&exact, "fine description");
        assert!(!preview.title_truncated);
        assert_eq!(preview.title, exact);

        let over = "t".repeat(61);
        let preview = build_preview(&over, "fine description");
        assert!(preview.title_truncated);
        assert_eq!(preview.title.chars().count(), 60);
        assert_eq!(preview.title, format!("{}...", "t".repeat(57)));

        let long_desc = "d".repeat(161);
        let preview = build_preview("ok title", &long_desc);
        assert!(preview.description_truncated);
        assert_eq!(preview.description.chars().count(), 160);
        assert_eq!(preview.url, "yoursite.com");
    }
}
