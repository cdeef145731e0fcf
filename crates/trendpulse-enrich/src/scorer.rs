//! Lexicon scorer producing polarity values for trend text.

/// Word weights tuned for trending-news hashtags.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("win", 0.4),
    ("wins", 0.4),
    ("victory", 0.5),
    ("champion", 0.5),
    ("champions", 0.5),
    ("celebration", 0.4),
    ("festival", 0.4),
    ("happy", 0.5),
    ("joy", 0.5),
    ("love", 0.5),
    ("great", 0.4),
    ("best", 0.5),
    ("success", 0.4),
    ("proud", 0.4),
    ("pride", 0.4),
    ("welcome", 0.3),
    ("peace", 0.4),
    ("blessed", 0.4),
    ("congratulations", 0.5),
    ("tribute", 0.2),
    // Negative signals
    ("flood", -0.5),
    ("floods", -0.5),
    ("death", -0.6),
    ("dead", -0.6),
    ("attack", -0.6),
    ("terror", -0.7),
    ("scam", -0.6),
    ("fraud", -0.6),
    ("crisis", -0.5),
    ("ban", -0.4),
    ("banned", -0.4),
    ("protest", -0.3),
    ("riot", -0.6),
    ("riots", -0.6),
    ("violence", -0.6),
    ("tragedy", -0.6),
    ("disaster", -0.6),
    ("emergency", -0.4),
    ("war", -0.5),
    ("corruption", -0.5),
    ("arrest", -0.4),
    ("murder", -0.7),
];

/// Score a text string with the lexicon, returning a polarity in `[-1.0, 1.0]`.
///
/// The tokenizer splits on whitespace, trims punctuation, and additionally
/// breaks CamelCase runs so compound hashtags like `IndiaWins` contribute
/// their inner words. Empty or unknown text scores `0.0`.
#[must_use]
pub fn lexicon_score(text: &str) -> f64 {
    let mut score = 0.0_f64;
    for token in tokenize(text) {
        for &(lex_word, weight) in LEXICON {
            if token == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

/// Lowercased word tokens: whitespace-separated, punctuation trimmed,
/// CamelCase runs split at lower-to-upper boundaries.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
        if trimmed.is_empty() {
            continue;
        }

        let mut current = String::new();
        let mut prev_lower = false;
        for c in trimmed.chars() {
            if c.is_uppercase() && prev_lower && !current.is_empty() {
                tokens.push(std::mem::take(&mut current).to_lowercase());
            }
            prev_lower = c.is_lowercase();
            current.push(c);
        }
        if !current.is_empty() {
            tokens.push(current.to_lowercase());
        }
    }
    tokens
}
