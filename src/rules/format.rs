//! Parameterless format predicates. An empty value passes every format check.

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use super::RuleOutcome;

static INTEGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(?:0|[1-9][0-9]*)$").expect("Invalid regex"));

static FLOAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][-+]?[0-9]+)?$")
        .expect("Invalid regex")
});

static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{1,63}|xn--[a-z0-9]{1,59})$",
    )
    .expect("Invalid regex")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("Invalid regex")
});

const MAX_DOMAIN_LENGTH: usize = 255;
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;
const HYPHENATED_UUID_LENGTH: usize = 36;

fn format_rule(value: &str, valid: impl FnOnce(&str) -> bool, issue: &str) -> RuleOutcome {
    if value.is_empty() {
        return RuleOutcome::Passed;
    }
    RuleOutcome::require(valid(value), issue)
}

pub fn integer(value: &str) -> RuleOutcome {
    format_rule(value, |v| INTEGER_REGEX.is_match(v), "must be an integer number")
}

/// Accepts integers too.
pub fn float(value: &str) -> RuleOutcome {
    format_rule(value, |v| FLOAT_REGEX.is_match(v), "must be a floating point number")
}

/// Absolute URLs only; a scheme is required.
pub fn url(value: &str) -> RuleOutcome {
    format_rule(value, |v| url::Url::parse(v).is_ok(), "must be a valid URL")
}

/// A dotted host name; single-label names such as `localhost` are rejected.
pub fn domain(value: &str) -> RuleOutcome {
    format_rule(
        value,
        |v| v.len() <= MAX_DOMAIN_LENGTH && DOMAIN_REGEX.is_match(v),
        "must be a valid domain",
    )
}

pub fn email(value: &str) -> RuleOutcome {
    format_rule(
        value,
        |v| {
            let local_ok = v
                .split_once('@')
                .is_some_and(|(local, _)| local.len() <= MAX_EMAIL_LOCAL_LENGTH);
            v.len() <= MAX_EMAIL_LENGTH && local_ok && EMAIL_REGEX.is_match(v)
        },
        "must be a valid email address",
    )
}

/// Semantic version with an optional leading `v`.
pub fn semver(value: &str) -> RuleOutcome {
    format_rule(
        value,
        |v| {
            let version = v.strip_prefix('v').unwrap_or(v);
            semver::Version::parse(version).is_ok()
        },
        "must be a valid semantic version",
    )
}

/// Hyphenated UUID in either letter case.
pub fn uuid(value: &str) -> RuleOutcome {
    format_rule(
        value,
        |v| v.len() == HYPHENATED_UUID_LENGTH && uuid::Uuid::try_parse(v).is_ok(),
        "must be a valid UUID",
    )
}

/// Standard alphabet with canonical padding.
pub fn base64(value: &str) -> RuleOutcome {
    format_rule(value, |v| STANDARD.decode(v).is_ok(), "must be encoded in Base64")
}

pub fn json(value: &str) -> RuleOutcome {
    format_rule(
        value,
        |v| serde_json::from_str::<serde_json::Value>(v).is_ok(),
        "must be in valid JSON format",
    )
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
