use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating hashtag names.
    /// Must be alphanumeric or underscore, no spaces or punctuation.
    /// - Valid: "beach", "street_food", "Bangkok2024"
    /// - Invalid: "beach life", "#beach", "café"
    pub static ref HASHTAG_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashtag_regex_valid() {
        assert!(HASHTAG_REGEX.is_match("beach"));
        assert!(HASHTAG_REGEX.is_match("street_food"));
        assert!(HASHTAG_REGEX.is_match("Bangkok2024"));
        assert!(HASHTAG_REGEX.is_match("_hidden"));
    }

    #[test]
    fn test_hashtag_regex_invalid() {
        assert!(!HASHTAG_REGEX.is_match("beach life")); // space
        assert!(!HASHTAG_REGEX.is_match("#beach")); // punctuation
        assert!(!HASHTAG_REGEX.is_match("beach-life")); // hyphen
        assert!(!HASHTAG_REGEX.is_match("")); // empty
    }
}
