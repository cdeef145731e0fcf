//! Search-link generation for extracted topics.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Build a Twitter search URL for a topic, percent-encoding the query so
/// the `#` marker survives as `%23`.
#[must_use]
pub fn search_link(topic: &str) -> String {
    format!(
        "https://twitter.com/search?q={}",
        utf8_percent_encode(topic, NON_ALPHANUMERIC)
    )
}
