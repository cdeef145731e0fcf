//! Placeholder content synthesis for trend topics.

/// Ordered fragment-to-template table. First fragment found in the
/// lowercased topic wins; `{topic}` is replaced with the cleaned topic text.
const FRAGMENT_TEMPLATES: &[(&str, &str)] = &[
    (
        "election",
        "Breaking: Major developments in {topic}. Citizens actively participating in democratic process.",
    ),
    (
        "flood",
        "Emergency update on {topic}. Relief operations underway, stay safe and follow official guidelines.",
    ),
    (
        "dharma",
        "Spiritual discourse on {topic}. Ancient wisdom for modern times.",
    ),
    (
        "football",
        "Exciting match updates for {topic}. Team performance analysis and fan reactions.",
    ),
    (
        "bollywood",
        "Latest entertainment news about {topic}. Celebrity updates and movie reviews.",
    ),
    (
        "batra",
        "Tribute to heroes in {topic}. Remembering courage and sacrifice for the nation.",
    ),
];

const FALLBACK_TEMPLATE: &str =
    "Trending discussion about {topic}. Join the conversation and share your thoughts.";

/// Produce a canned descriptive sentence for a topic.
///
/// Strips `#` markers, matches the result case-insensitively against the
/// ordered fragment table, and falls back to a generic sentence embedding the
/// topic when nothing matches. Deterministic and total.
#[must_use]
pub fn synthesize_content(topic: &str) -> String {
    let clean = topic.replace('#', "");
    let lower = clean.to_lowercase();

    let template = FRAGMENT_TEMPLATES
        .iter()
        .find(|(fragment, _)| lower.contains(fragment))
        .map_or(FALLBACK_TEMPLATE, |(_, template)| template);

    template.replace("{topic}", &clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn election_fragment_selects_election_template() {
        let content = synthesize_content("#DelhiElection2024");
        assert!(content.starts_with("Breaking: Major developments in DelhiElection2024."));
    }

    #[test]
    fn fragment_match_is_case_insensitive() {
        let content = synthesize_content("#BOLLYWOOD");
        assert!(content.starts_with("Latest entertainment news about BOLLYWOOD."));
    }

    #[test]
    fn first_fragment_in_table_order_wins() {
        // Contains both "election" and "flood"; "election" is listed first.
        let content = synthesize_content("#ElectionFloodCoverage");
        assert!(content.starts_with("Breaking:"), "got: {content}");
    }

    #[test]
    fn unmatched_topic_falls_back_to_generic_template() {
        let content = synthesize_content("#weekendvibes");
        assert_eq!(
            content,
            "Trending discussion about weekendvibes. Join the conversation and share your thoughts."
        );
    }

    #[test]
    fn marker_is_stripped_from_embedded_topic() {
        let content = synthesize_content("#flood");
        assert!(!content.contains('#'));
        assert!(content.contains("flood"));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let a = synthesize_content("#CricketFever");
        let b = synthesize_content("#CricketFever");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_topic_still_produces_the_fallback() {
        let content = synthesize_content("");
        assert!(content.starts_with("Trending discussion about ."));
    }
}
