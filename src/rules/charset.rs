//! Presence and character-class rules. The empty string satisfies every class.

use super::RuleOutcome;

pub fn not_empty(value: &str) -> RuleOutcome {
    RuleOutcome::require(!value.is_empty(), "cannot be blank")
}

pub fn digit(value: &str) -> RuleOutcome {
    RuleOutcome::require(
        value.chars().all(|c| c.is_ascii_digit()),
        "must contain digits only",
    )
}

pub fn alpha(value: &str) -> RuleOutcome {
    RuleOutcome::require(
        value.chars().all(|c| c.is_ascii_alphabetic()),
        "must contain English letters only",
    )
}

pub fn alphanumeric(value: &str) -> RuleOutcome {
    RuleOutcome::require(
        value.chars().all(|c| c.is_ascii_alphanumeric()),
        "must contain English letters and digits only",
    )
}

pub fn ascii(value: &str) -> RuleOutcome {
    RuleOutcome::require(value.is_ascii(), "must contain ASCII characters only")
}

pub fn printable_ascii(value: &str) -> RuleOutcome {
    RuleOutcome::require(
        value.chars().all(|c| matches!(c, ' '..='~')),
        "must contain printable ASCII characters only",
    )
}

/// Non-letters pass; any letter with an uppercase form fails.
pub fn lower_case(value: &str) -> RuleOutcome {
    RuleOutcome::require(value == value.to_lowercase(), "must be in lower case")
}

/// Non-letters pass; any letter with a lowercase form fails.
pub fn upper_case(value: &str) -> RuleOutcome {
    RuleOutcome::require(value == value.to_uppercase(), "must be in upper case")
}

#[cfg(test)]
#[path = "charset_tests.rs"]
mod tests;
