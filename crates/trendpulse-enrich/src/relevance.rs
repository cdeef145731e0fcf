//! Regional relevance classification for trend strings.

/// Locale-identifying terms matched case-insensitively as substrings.
const REGION_TERMS: &[&str] = &[
    "india",
    "bharat",
    "hindu",
    "delhi",
    "mumbai",
    "bangalore",
    "chennai",
    "kolkata",
];

/// Returns true when `text` looks related to the target region: either it
/// contains a Devanagari code point (U+0900–U+097F), or its lowercased form
/// contains one of the [`REGION_TERMS`].
///
/// Unmatched input simply returns false; there is no error path.
#[must_use]
pub fn is_regionally_relevant(text: &str) -> bool {
    if text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c)) {
        return true;
    }

    let lower = text.to_lowercase();
    REGION_TERMS.iter().any(|term| lower.contains(term))
}
