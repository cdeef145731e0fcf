//! Normalization of human-readable magnitude strings into integers.

/// Convert a count string like `"25K"`, `"2.1M"`, or `"1,234"` to an integer.
///
/// `"N/A"` and the empty string yield 0. Thousands separators are stripped.
/// A case-insensitive `M` suffix multiplies the numeric prefix by 1,000,000
/// and `K` by 1,000 — both computed in floating point before truncation so
/// fractional prefixes like `"2.1M"` come out as 2,100,000. Anything else is
/// reduced to its digits and parsed directly.
///
/// Malformed input degrades silently to 0; this function never fails.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_count(count_str: &str) -> i64 {
    if count_str.is_empty() || count_str == "N/A" {
        return 0;
    }

    let cleaned = count_str.replace(',', "");
    let upper = cleaned.to_uppercase();

    // Saturating float-to-int cast keeps absurd inputs finite.
    fn scaled(raw: &str, multiplier: f64) -> i64 {
        match raw.trim().parse::<f64>() {
            #[allow(clippy::cast_possible_truncation)]
            Ok(n) if n.is_finite() && n > 0.0 => (n * multiplier) as i64,
            _ => 0,
        }
    }

    if upper.contains('M') {
        scaled(&upper.replace('M', ""), 1_000_000.0)
    } else if upper.contains('K') {
        scaled(&upper.replace('K', ""), 1_000.0)
    } else {
        let digits: String = cleaned.chars().filter(char::is_ascii_digit).collect();
        digits.parse::<i64>().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_available_is_zero() {
        assert_eq!(parse_count("N/A"), 0);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn plain_thousands_suffix() {
        assert_eq!(parse_count("25K"), 25_000);
    }

    #[test]
    fn lowercase_suffix_accepted() {
        assert_eq!(parse_count("25k"), 25_000);
        assert_eq!(parse_count("2.1m"), 2_100_000);
    }

    #[test]
    fn fractional_millions_multiply_before_truncation() {
        assert_eq!(parse_count("2.1M"), 2_100_000);
    }

    #[test]
    fn fractional_thousands() {
        assert_eq!(parse_count("1.5K"), 1_500);
    }

    #[test]
    fn thousands_separators_stripped() {
        assert_eq!(parse_count("1,234"), 1_234);
    }

    #[test]
    fn separator_with_suffix() {
        assert_eq!(parse_count("1,200K"), 1_200_000);
    }

    #[test]
    fn malformed_input_is_zero() {
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("K"), 0);
        assert_eq!(parse_count("M"), 0);
        assert_eq!(parse_count("..M"), 0);
    }

    #[test]
    fn negative_prefix_degrades_to_zero() {
        assert_eq!(parse_count("-2.1M"), 0);
    }

    #[test]
    fn plain_digits_with_noise() {
        assert_eq!(parse_count("~1234 tweets"), 1_234);
    }
}
