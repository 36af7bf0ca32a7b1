//! Rule-driven recommendation generation.
//!
//! The policy is an ordered table of predicate/builder rules evaluated in
//! a fixed declared order; ids are assigned sequentially over whatever
//! matched, and the list is capped. Every text field is a fixed template
//! with literal substitution, so identical input always produces an
//! identical list.

use crate::domain::models::{Category, Effort, Impact, Recommendation};
use crate::text::segment;

const MAX_RECOMMENDATIONS: usize = 8;

const TITLE_MIN_CHARS: usize = 30;
const TITLE_MAX_CHARS: usize = 60;
const DESCRIPTION_MIN_CHARS: usize = 120;
const MIN_WORD_COUNT: usize = 300;
const READABILITY_FLOOR: f64 = 50.0;

/// Signals the rules evaluate; assembled once by the orchestrator.
pub struct RuleContext<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub keywords: &'a [String],
    pub word_count: usize,
    pub readability: f64,
    pub h1_count: u32,
    pub h2_count: u32,
}

/// A recommendation before its sequential id is known.
struct Draft {
    title: String,
    description: String,
    impact: Impact,
    effort: Effort,
    category: Category,
    priority: u8,
    fix_suggestion: String,
}

impl Draft {
    fn into_recommendation(self, id: u32) -> Recommendation {
        Recommendation {
            id,
            title: self.title,
            description: self.description,
            impact: self.impact,
            effort: self.effort,
            category: self.category,
            priority: self.priority,
            actionable: true,
            fix_suggestion: self.fix_suggestion,
        }
    }
}

type Rule = fn(&RuleContext) -> Option<Draft>;

/// Declared evaluation order; position decides which rules survive the cap.
const RULES: &[Rule] = &[
    title_length,
    description_length,
    primary_keyword,
    content_length,
    readability,
    heading_structure,
];

pub fn generate(ctx: &RuleContext) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter_map(|rule| rule(ctx))
        .take(MAX_RECOMMENDATIONS)
        .zip(1u32..)
        .map(|(draft, id)| draft.into_recommendation(id))
        .collect()
}

fn title_length(ctx: &RuleContext) -> Option<Draft> {
    let len = ctx.title.chars().count();
    if len < TITLE_MIN_CHARS {
        Some(Draft {
            title: "Optimize Title Length".to_string(),
            description: "Your title is too short. Expand it to 30-60 characters to include \
                          more relevant keywords and improve search visibility."
                .to_string(),
            impact: Impact::High,
            effort: Effort::QuickFix,
            category: Category::Technical,
            priority: 1,
            fix_suggestion: format!(
                "Expand your current title '{}' by adding descriptive keywords or your \
                 brand name to reach 30-60 characters.",
                ctx.title
            ),
        })
    } else if len > TITLE_MAX_CHARS {
        Some(Draft {
            title: "Shorten Title Tag".to_string(),
            description: "Your title is too long and may be truncated in search results. \
                          Keep it between 30-60 characters for optimal display."
                .to_string(),
            impact: Impact::High,
            effort: Effort::QuickFix,
            category: Category::Technical,
            priority: 1,
            fix_suggestion: format!(
                "Shorten your title to approximately: '{}...'",
                segment::clip(ctx.title, 50)
            ),
        })
    } else {
        None
    }
}

fn description_length(ctx: &RuleContext) -> Option<Draft> {
    if ctx.description.chars().count() >= DESCRIPTION_MIN_CHARS {
        return None;
    }
    Some(Draft {
        title: "Expand Meta Description".to_string(),
        description: "Your meta description is too short. Aim for 120-160 characters to \
                      give searchers a fuller summary of the page."
            .to_string(),
        impact: Impact::Medium,
        effort: Effort::QuickFix,
        category: Category::Technical,
        priority: 2,
        fix_suggestion: "Extend the description with a concrete benefit or call to action \
                         until it reaches 120-160 characters."
            .to_string(),
    })
}

fn primary_keyword(ctx: &RuleContext) -> Option<Draft> {
    let keyword = ctx.keywords.first()?;
    Some(Draft {
        title: format!("Optimize for '{}'", keyword),
        description: format!(
            "Ensure your primary keyword '{}' appears in your title, first paragraph, \
             and naturally throughout the content.",
            keyword
        ),
        impact: Impact::High,
        effort: Effort::Moderate,
        category: Category::Keywords,
        priority: 1,
        fix_suggestion: format!(
            "1. Include '{kw}' in your title\n2. Mention '{kw}' in the first paragraph\n\
             3. Use it in 2-3 subheadings\n4. Include variations throughout content",
            kw = keyword
        ),
    })
}

fn content_length(ctx: &RuleContext) -> Option<Draft> {
    if ctx.word_count >= MIN_WORD_COUNT {
        return None;
    }
    Some(Draft {
        title: "Increase Content Length".to_string(),
        description: "Add more valuable content to reach at least 300 words. Longer content \
                      typically ranks better and provides more value to readers."
            .to_string(),
        impact: Impact::High,
        effort: Effort::Moderate,
        category: Category::Content,
        priority: 1,
        fix_suggestion: "Add sections covering: examples, benefits, step-by-step \
                         instructions, FAQs, or related tips to expand your content \
                         meaningfully."
            .to_string(),
    })
}

fn readability(ctx: &RuleContext) -> Option<Draft> {
    if ctx.readability >= READABILITY_FLOOR {
        return None;
    }
    Some(Draft {
        title: "Improve Content Readability".to_string(),
        description: "Break up long sentences and use more common words to make your \
                      content easier to read and understand."
            .to_string(),
        impact: Impact::Medium,
        effort: Effort::Moderate,
        category: Category::Content,
        priority: 2,
        fix_suggestion: "1. Split sentences longer than 20 words\n2. Replace complex words \
                         with simpler alternatives\n3. Add bullet points for lists\n4. Keep \
                         paragraphs to 3-4 sentences max"
            .to_string(),
    })
}

fn heading_structure(ctx: &RuleContext) -> Option<Draft> {
    if ctx.h1_count > 0 || ctx.h2_count > 0 {
        return None;
    }
    Some(Draft {
        title: "Add Content Structure".to_string(),
        description: "No clear headings were detected. Break the content into sections \
                      with descriptive headings so readers and search engines can scan it."
            .to_string(),
        impact: Impact::Medium,
        effort: Effort::QuickFix,
        category: Category::Content,
        priority: 2,
        fix_suggestion: "Add one main heading summarizing the page topic and a subheading \
                         for each major section."
            .to_string(),
    })
}
