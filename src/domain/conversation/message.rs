//! Screening of free-text user messages before they leave the service.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::ValidationError;

/// Longest message accepted from a user, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

static SUSPICIOUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<script>|DROP TABLE|DELETE FROM|--").expect("screening pattern is a valid regex")
});

/// A trimmed user message that passed screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage(String);

impl UserMessage {
    /// Screens a raw message: non-blank, bounded length, no markup or
    /// statement fragments.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("message"));
        }
        if trimmed.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ValidationError::too_long("message", MAX_MESSAGE_CHARS));
        }
        if SUSPICIOUS.is_match(trimmed) {
            return Err(ValidationError::invalid_format(
                "message",
                "contains forbidden content",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Truncates to at most `max` characters on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_questions() {
        let msg = UserMessage::parse("  Where should I go in July?  ").unwrap();
        assert_eq!(msg.as_str(), "Where should I go in July?");
    }

    #[test]
    fn rejects_blank_messages() {
        assert!(UserMessage::parse("   ").is_err());
    }

    #[test]
    fn rejects_overlong_messages() {
        assert!(UserMessage::parse(&"a".repeat(MAX_MESSAGE_CHARS)).is_ok());
        assert!(UserMessage::parse(&"a".repeat(MAX_MESSAGE_CHARS + 1)).is_err());
    }

    #[test]
    fn rejects_markup_and_statement_fragments_case_insensitively() {
        for msg in ["<SCRIPT>alert(1)", "x; drop table users", "delete from x", "a -- b"] {
            assert!(UserMessage::parse(msg).is_err(), "{msg} should be rejected");
        }
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("Hôpital", 2), "Hô");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
