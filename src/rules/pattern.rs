use regex::Regex;

use super::RuleOutcome;

/// Matches the value against a caller-supplied regular expression.
///
/// The expression is not anchored implicitly; use `^...$` to constrain the whole value.
pub fn matches(pattern: &str, value: &str) -> RuleOutcome {
    let Ok(regex) = Regex::new(pattern) else {
        return RuleOutcome::ArgumentFail(format!(
            "--pattern is not a valid regular expression: {pattern}"
        ));
    };

    if value.is_empty() {
        return RuleOutcome::Passed;
    }
    RuleOutcome::require(regex.is_match(value), "must be in a valid format")
}

/// Exact, case-sensitive membership in a comma-separated list. Entries are not trimmed.
pub fn one_of(enumeration: &str, value: &str) -> RuleOutcome {
    let allowed: Vec<&str> = enumeration.split(',').collect();
    if allowed.contains(&value) {
        RuleOutcome::Passed
    } else {
        RuleOutcome::ValidationFail(format!("must be one of [{}]", allowed.join(", ")))
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
