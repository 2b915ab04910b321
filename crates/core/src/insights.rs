//! Keyword heuristics over scraped website text.
//!
//! Produces a short list of strategic hints for the operator and for
//! generation prompts. Each case-insensitive keyword match adds one canned
//! sentence; output order is fixed.

use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on the number of insights returned.
pub const MAX_INSIGHTS: usize = 4;

struct KeywordInsight {
    pattern: &'static str,
    insight: &'static str,
}

const KEYWORD_INSIGHTS: [KeywordInsight; 4] = [
    KeywordInsight {
        pattern: r"(?i)warranty|guarantee",
        insight: "Emphasize the warranty and guarantee to lower the perceived risk of buying",
    },
    KeywordInsight {
        pattern: r"(?i)professional|team",
        insight: "Highlight the expertise of the professional team behind the products",
    },
    KeywordInsight {
        pattern: r"(?i)review|star",
        insight: "Use customer reviews and star ratings as social proof",
    },
    KeywordInsight {
        pattern: r"(?i)premium|quality",
        insight: "Position the products around premium quality and craftsmanship",
    },
];

/// Compiled keyword matchers, in the same order as [`KEYWORD_INSIGHTS`].
static MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KEYWORD_INSIGHTS
        .iter()
        .map(|k| Regex::new(k.pattern).expect("valid regex"))
        .collect()
});

/// Derive up to [`MAX_INSIGHTS`] insights from website text.
///
/// Keyword insights come first in keyword order, followed by two
/// brand-generic sentences, then the list is truncated. Empty content
/// yields only the generic sentences.
pub fn extract_insights(content: &str, brand_name: &str) -> Vec<String> {
    let mut insights: Vec<String> = KEYWORD_INSIGHTS
        .iter()
        .zip(MATCHERS.iter())
        .filter(|(_, re)| re.is_match(content))
        .map(|(k, _)| k.insight.to_string())
        .collect();

    insights.push(format!(
        "Keep {brand_name}'s voice consistent and recognizable across every email"
    ));
    insights.push("Lead with customer benefits rather than product features".to_string());

    insights.truncate(MAX_INSIGHTS);
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_yields_generic_insights() {
        let insights = extract_insights("", "Acme");
        assert_eq!(insights.len(), 2);
        assert!(insights[0].contains("Acme"));
    }

    #[test]
    fn matches_are_case_insensitive_and_ordered() {
        let insights = extract_insights("Read our REVIEWS. Lifetime Warranty included.", "Acme");
        assert_eq!(insights.len(), 4);
        assert!(insights[0].contains("warranty"));
        assert!(insights[1].contains("reviews"));
        assert!(insights[2].contains("Acme"));
    }

    #[test]
    fn never_more_than_four() {
        let text = "warranty professional review premium";
        let insights = extract_insights(text, "Acme");
        assert_eq!(insights.len(), MAX_INSIGHTS);
        assert!(insights.iter().all(|i| !i.contains("Acme")));
    }

    #[test]
    fn deterministic() {
        let text = "Our team offers premium quality";
        assert_eq!(extract_insights(text, "Acme"), extract_insights(text, "Acme"));
    }
}
