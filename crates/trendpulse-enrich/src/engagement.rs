//! Heuristic engagement scoring for trending topics.

use crate::count::parse_count;

/// Topic substrings that signal an actively developing story.
const URGENCY_KEYWORDS: &[&str] = &["election", "breaking", "urgent", "live", "update", "news"];

/// Topic substrings that signal regional interest. Overlaps in spirit with
/// the relevance classifier's list but is tuned for scoring, not filtering.
const REGION_KEYWORDS: &[&str] = &[
    "india", "indian", "bharath", "delhi", "mumbai", "modi", "bjp", "congress",
];

/// Parsed-count divisor for the volume bonus. Undocumented heuristic kept
/// as-is for behavioral compatibility.
const COUNT_DIVISOR: f64 = 10_000.0;

/// Compute the engagement score for a topic on a 1–10 scale.
///
/// Additive heuristic starting from a base of 1.0:
/// - volume: `min(5, max(0, count / 10000 * 2))` when the parsed count is
///   positive;
/// - +1.5 for an urgency keyword, +1.0 for a region keyword (both matched on
///   the lowercased topic);
/// - +0.5 for topics longer than 15 characters;
/// - +0.5 when the topic carries a year or attention marker
///   (`2024`, `2023`, `!`, `@`).
///
/// The total is clamped to `[1.0, 10.0]` and rounded to 2 decimal places.
/// Deterministic and total: malformed counts contribute nothing and the
/// floor of 1.0 always holds.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score_engagement(topic: &str, raw_count: &str) -> f64 {
    let mut score = 1.0_f64;

    let count = parse_count(raw_count);
    if count > 0 {
        score += (count as f64 / COUNT_DIVISOR * 2.0).clamp(0.0, 5.0);
    }

    let lower = topic.to_lowercase();

    if URGENCY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        score += 1.5;
    }

    if REGION_KEYWORDS.iter().any(|k| lower.contains(k)) {
        score += 1.0;
    }

    if topic.chars().count() > 15 {
        score += 0.5;
    }

    if ["2024", "2023", "!", "@"].iter().any(|m| topic.contains(m)) {
        score += 0.5;
    }

    (score.clamp(1.0, 10.0) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_give_the_base_score() {
        assert_eq!(score_engagement("", ""), 1.0);
    }

    #[test]
    fn missing_count_gives_the_base_score() {
        assert_eq!(score_engagement("#short", "N/A"), 1.0);
    }

    #[test]
    fn urgency_keyword_adds_one_and_a_half() {
        // base 1.0 + urgency 1.5, no other bonuses apply
        assert_eq!(score_engagement("#breaking", "N/A"), 2.5);
    }

    #[test]
    fn every_urgency_keyword_scores_at_least_two_and_a_half() {
        for k in URGENCY_KEYWORDS {
            let score = score_engagement(&format!("#{k}"), "N/A");
            assert!(score >= 2.5, "keyword {k} scored {score}");
        }
    }

    #[test]
    fn region_keyword_adds_one() {
        assert_eq!(score_engagement("#modi", "N/A"), 2.0);
    }

    #[test]
    fn length_bonus_counts_chars_not_bytes() {
        // 16 Devanagari chars, no keywords: base 1.0 + length 0.5
        let topic = "कखगघङचछजझञटठडढणत";
        assert_eq!(topic.chars().count(), 16);
        assert_eq!(score_engagement(topic, "N/A"), 1.5);
    }

    #[test]
    fn year_marker_adds_half() {
        assert_eq!(score_engagement("#expo2023", "N/A"), 1.5);
        assert_eq!(score_engagement("#wow!", "N/A"), 1.5);
    }

    #[test]
    fn volume_bonus_caps_at_five() {
        // 50,000 posts: 50000/10000*2 = 10, capped at 5
        let score = score_engagement("#short", "50K");
        assert_eq!(score, 6.0);
    }

    #[test]
    fn small_count_contributes_proportionally() {
        // 5,000 posts: 5000/10000*2 = 1.0
        assert_eq!(score_engagement("#short", "5K"), 2.0);
    }

    #[test]
    fn combined_bonuses_match_expected_sum() {
        // base 1.0 + volume 5 (capped) + urgency 1.5 + length 0.5 + marker 0.5
        assert_eq!(score_engagement("#BreakingNews2024", "50K"), 8.5);
    }

    #[test]
    fn score_never_leaves_the_one_to_ten_range() {
        let cases = [
            ("", ""),
            ("#BreakingNewsLiveUpdateIndia2024!", "9,999M"),
            ("#abc", "garbage"),
            ("@!#$%", "N/A"),
            ("#भारत", "1.2M"),
        ];
        for (topic, count) in cases {
            let score = score_engagement(topic, count);
            assert!(
                (1.0..=10.0).contains(&score),
                "score {score} out of range for {topic:?}/{count:?}"
            );
        }
    }

    #[test]
    fn malformed_count_degrades_to_no_volume_bonus() {
        assert_eq!(score_engagement("#breaking", "abc"), 2.5);
    }
}
