//! URL precondition for the analysis request

use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+").expect("URL pattern is valid"));

/// `true` when `input` starts with `http://` or `https://` followed by at
/// least one non-whitespace character
pub fn is_valid_url(input: &str) -> bool {
    URL_PATTERN.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_url("https://example.com/v/1"));
        assert!(is_valid_url("http://x"));
        assert!(is_valid_url("https://youtu.be/abc and trailing words"));
    }

    #[test]
    fn rejects_everything_else() {
        for input in [
            "",
            "not-a-url",
            "example.com",
            "ftp://example.com",
            "https://",
            "https:// example.com",
            " https://example.com",
            "HTTPS://example.com",
        ] {
            assert!(!is_valid_url(input), "accepted {:?}", input);
        }
    }

    proptest! {
        #[test]
        fn inputs_without_scheme_prefix_are_rejected(s in "\\PC*") {
            prop_assume!(!s.starts_with("http://") && !s.starts_with("https://"));
            prop_assert!(!is_valid_url(&s));
        }

        #[test]
        fn any_non_space_tail_is_accepted(tail in "[^\\s]{1,40}", secure in any::<bool>()) {
            let scheme = if secure { "https://" } else { "http://" };
            let input = format!("{}{}", scheme, tail);
            prop_assert!(is_valid_url(&input));
        }
    }
}
