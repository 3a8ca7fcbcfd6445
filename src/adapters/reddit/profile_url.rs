//! Profile URL parsing. Accepts `reddit.com/user/<name>` and `reddit.com/u/<name>` forms.

use crate::domain::DomainError;
use regex::Regex;
use std::sync::LazyLock;

static PROFILE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"reddit\.com/user/([^/]+)").expect("static user pattern"),
        Regex::new(r"reddit\.com/u/([^/]+)").expect("static u pattern"),
    ]
});

/// Extract the username from a Reddit profile URL.
pub fn extract_username(profile_url: &str) -> Result<String, DomainError> {
    PROFILE_PATTERNS
        .iter()
        .find_map(|re| re.captures(profile_url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| DomainError::InvalidProfileUrl(profile_url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_forms() {
        assert_eq!(
            extract_username("https://www.reddit.com/user/kojied/").unwrap(),
            "kojied"
        );
        assert_eq!(
            extract_username("https://reddit.com/u/Hungry-Move-6603").unwrap(),
            "Hungry-Move-6603"
        );
        assert_eq!(
            extract_username("old.reddit.com/user/spez/comments").unwrap(),
            "spez"
        );
    }

    #[test]
    fn test_rejects_non_profile_urls() {
        let err = extract_username("https://www.reddit.com/r/rust/").unwrap_err();
        assert!(matches!(err, DomainError::InvalidProfileUrl(_)));
        assert!(extract_username("kojied").is_err());
    }
}
