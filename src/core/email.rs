use regex::Regex;
use std::sync::LazyLock;

// Shape check only: something@something.something, no whitespace, one '@'.
// U+FEFF counts as whitespace here, regex's \s leaves it out.
static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern")
});

pub fn validate_email(email: &str) -> bool {
    EMAIL_FORMAT.is_match(email)
}

pub fn validate_optional_email(email: &str) -> bool {
    email
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
        || validate_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("first.last@sub.example.org"));
        assert!(validate_email("x@y.z"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert!(!validate_email("a\u{FEFF}b@c.com"));
        assert!(!validate_email("\u{FEFF}a@b.com"));
        assert!(validate_optional_email("\u{FEFF}"));
    }

    #[test]
    fn test_validate_email_is_permissive() {
        assert!(validate_email("a@b.c.d"));
        assert!(validate_email("!#$%@weird.tld1"));
    }

    #[test]
    fn test_validate_optional_email() {
        assert!(validate_optional_email(""));
        assert!(validate_optional_email(" \t"));
        assert!(!validate_optional_email("nobody"));
    }
}
