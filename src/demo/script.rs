//! The fixed research script played by every demo run
//!
//! Nothing here depends on the submitted prompt: every run reveals the same
//! five steps and streams the same response.

use super::model::{FileAction, ProcessStep, SourceRecord};
use crate::types::{FileActionKind, SourceKind, StepStatus};

/// Prompt the input line starts with
pub const DEFAULT_PROMPT: &str =
    "Who are my competitors & tell me about their products & what others think of them.";

/// Markdown streamed into the assistant message once all steps complete
pub const FINAL_RESPONSE: &str = "\
Based on the comprehensive research from YC directory, competitor sites, and social sentiment analysis (Reddit/X), here is a summary of your competitive landscape.

**Key Competitors Identified:**
*   **Acme Corp**: Dominates the enterprise segment. Strength in reliability.
*   **Beta Inc**: Focusing on bottom-up adoption. Very strong developer community.

**Product Gaps & Opportunities:**
Users on Reddit frequently complain about the *complexity* of Acme's onboarding. There is a clear opening for a \"Simpler, Faster\" alternative in this niche.

**Action Plan:**
1.  Target the specific subreddit threads identified in `user-reviews.csv`.
2.  Launch a comparison landing page highlighting \"Setup in 5 minutes\".
3.  Review the full breakdown in **Market Research.md**.";

/// Number of steps in the script
pub const STEP_COUNT: usize = 5;

fn step(
    id: &str,
    title: &str,
    subtext: &str,
    file_action: (FileActionKind, &str),
    sources: Vec<SourceRecord>,
    url: Option<&str>,
) -> ProcessStep {
    let (kind, file_name) = file_action;
    ProcessStep {
        id: id.to_string(),
        title: title.to_string(),
        subtext: subtext.to_string(),
        file_action: Some(FileAction {
            kind,
            file_name: file_name.to_string(),
        }),
        sources,
        url: url.map(str::to_string),
        status: StepStatus::Pending,
    }
}

/// Build the five steps, all pending
pub fn research_steps() -> Vec<ProcessStep> {
    vec![
        step(
            "1",
            "Searched YC Startups directory about \"my niche\"",
            "Listed Competitors",
            (FileActionKind::Created, "Competitors.csv"),
            vec![SourceRecord::new(
                "s1",
                "YC Startup Directory",
                SourceKind::Database,
                Some("ycombinator.com/companies"),
            )],
            None,
        ),
        step(
            "2",
            "Browsing \"https://competitor1.com\"",
            "Listed 'Competitor Product'",
            (FileActionKind::Created, "Competitor-products.csv"),
            vec![SourceRecord::new(
                "s2",
                "https://competitor1.com",
                SourceKind::Web,
                Some("https://competitor1.com"),
            )],
            Some("https://competitor1.com"),
        ),
        step(
            "3",
            "Browsing \"https://competitor2.com\"",
            "Listed 'Competitor Product 2'",
            (FileActionKind::Updated, "Competitor-products.csv"),
            vec![SourceRecord::new(
                "s3",
                "https://competitor2.com",
                SourceKind::Web,
                Some("https://competitor2.com"),
            )],
            Some("https://competitor2.com"),
        ),
        step(
            "4",
            "Browsing X, Reddit for Competitor Products",
            "Listed 12000 Posts",
            (FileActionKind::Created, "user-reviews.csv"),
            vec![
                SourceRecord::new(
                    "s4",
                    "Why is Acme Corp so expensive? - r/SaaS",
                    SourceKind::Reddit,
                    Some("reddit.com"),
                ),
                SourceRecord::new(
                    "s5",
                    "Beta Inc just crushed it with the new update! 🚀",
                    SourceKind::X,
                    Some("twitter.com"),
                ),
                SourceRecord::new(
                    "s6",
                    "Anyone else having issues with Acme onboarding?",
                    SourceKind::Reddit,
                    Some("reddit.com"),
                ),
            ],
            None,
        ),
        step(
            "5",
            "Generating Research summary",
            "Generated Research summary",
            (FileActionKind::Created, "Market Research.md"),
            Vec::new(),
            None,
        ),
    ]
}

/// Total sources a full run surfaces
pub fn total_sources() -> usize {
    research_steps().iter().map(|s| s.sources.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_has_five_pending_steps() {
        let steps = research_steps();
        assert_eq!(steps.len(), STEP_COUNT);
        assert!(steps.iter().all(|s| s.status == StepStatus::Pending));
        let ids: Vec<&str> = steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_every_step_has_a_file_action() {
        assert!(research_steps().iter().all(|s| s.file_action.is_some()));
    }

    #[test]
    fn test_total_sources() {
        assert_eq!(total_sources(), 6);
    }

    #[test]
    fn test_response_has_no_surrounding_whitespace() {
        assert_eq!(FINAL_RESPONSE, FINAL_RESPONSE.trim());
        assert!(FINAL_RESPONSE.starts_with("Based on the comprehensive research"));
        assert!(FINAL_RESPONSE.ends_with("**Market Research.md**."));
    }
}
