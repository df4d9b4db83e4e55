//! Rule evaluation.
//!
//! Every supported check is a [`Rule`] descriptor in the fixed-order [`RULES`] table.
//! [`RuleSet::evaluate`] walks the table once, skips unconfigured rules, and routes
//! each outcome into a [`Report`]. Rules never see each other's outcomes.

mod charset;
mod format;
mod length;
mod numeric;
mod pattern;
mod timestamp;

pub use length::LengthBound;
pub use numeric::NumericBound;
pub use timestamp::TimestampLayout;

use tracing::debug;

use crate::report::Report;
use crate::value::Value;

/// Result of running one rule against the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Passed,
    /// The value failed a correctly specified rule.
    ValidationFail(String),
    /// The rule parameter itself was malformed; the content check did not run.
    ArgumentFail(String),
}

impl RuleOutcome {
    /// `Passed` when `ok` holds, otherwise a validation failure with `issue`.
    #[must_use]
    pub fn require(ok: bool, issue: &str) -> Self {
        if ok {
            Self::Passed
        } else {
            Self::ValidationFail(issue.to_string())
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Parameters for every supported rule.
///
/// A string parameter is configured when non-empty; a flag is configured when `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RuleSet {
    pub min: String,
    pub max: String,
    pub exact_length: String,
    pub min_length: String,
    pub max_length: String,
    pub not_empty: bool,
    pub digit: bool,
    pub alpha: bool,
    pub alphanumeric: bool,
    pub ascii: bool,
    pub printable_ascii: bool,
    pub lower_case: bool,
    pub upper_case: bool,
    pub int: bool,
    pub float: bool,
    pub url: bool,
    pub domain: bool,
    pub email: bool,
    pub semver: bool,
    pub uuid: bool,
    pub base64: bool,
    pub json: bool,
    pub pattern: String,
    pub enumeration: String,
    pub timestamp: String,
}

impl RuleSet {
    /// Runs every configured rule once, in table order, against the unmasked value.
    #[must_use]
    pub fn evaluate(&self, value: &Value) -> Report {
        let mut report = Report::new();
        for rule in self.configured_rules() {
            let outcome = (rule.evaluate)(self, value.unmasked());
            debug!(rule = rule.name, ?outcome, "Rule evaluated");
            report.record(outcome);
        }
        report
    }

    /// The configured subset of [`RULES`], in evaluation order.
    pub fn configured_rules(&self) -> impl Iterator<Item = &'static Rule> + '_ {
        RULES.iter().filter(|rule| (rule.is_configured)(self))
    }
}

/// One independently configurable check.
pub struct Rule {
    /// The command-line flag that configures this rule, without leading dashes.
    pub name: &'static str,
    pub is_configured: fn(&RuleSet) -> bool,
    pub evaluate: fn(&RuleSet, &str) -> RuleOutcome,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// All rules in evaluation order. Rendered issues follow this order.
pub static RULES: [Rule; 25] = [
    Rule {
        name: "min",
        is_configured: |r| !r.min.is_empty(),
        evaluate: |r, v| numeric::check(NumericBound::Min, &r.min, v),
    },
    Rule {
        name: "max",
        is_configured: |r| !r.max.is_empty(),
        evaluate: |r, v| numeric::check(NumericBound::Max, &r.max, v),
    },
    Rule {
        name: "exact-length",
        is_configured: |r| !r.exact_length.is_empty(),
        evaluate: |r, v| length::check(LengthBound::Exact, &r.exact_length, v),
    },
    Rule {
        name: "min-length",
        is_configured: |r| !r.min_length.is_empty(),
        evaluate: |r, v| length::check(LengthBound::Min, &r.min_length, v),
    },
    Rule {
        name: "max-length",
        is_configured: |r| !r.max_length.is_empty(),
        evaluate: |r, v| length::check(LengthBound::Max, &r.max_length, v),
    },
    Rule {
        name: "not-empty",
        is_configured: |r| r.not_empty,
        evaluate: |_, v| charset::not_empty(v),
    },
    Rule {
        name: "digit",
        is_configured: |r| r.digit,
        evaluate: |_, v| charset::digit(v),
    },
    Rule {
        name: "alpha",
        is_configured: |r| r.alpha,
        evaluate: |_, v| charset::alpha(v),
    },
    Rule {
        name: "alphanumeric",
        is_configured: |r| r.alphanumeric,
        evaluate: |_, v| charset::alphanumeric(v),
    },
    Rule {
        name: "ascii",
        is_configured: |r| r.ascii,
        evaluate: |_, v| charset::ascii(v),
    },
    Rule {
        name: "printable-ascii",
        is_configured: |r| r.printable_ascii,
        evaluate: |_, v| charset::printable_ascii(v),
    },
    Rule {
        name: "lower-case",
        is_configured: |r| r.lower_case,
        evaluate: |_, v| charset::lower_case(v),
    },
    Rule {
        name: "upper-case",
        is_configured: |r| r.upper_case,
        evaluate: |_, v| charset::upper_case(v),
    },
    Rule {
        name: "int",
        is_configured: |r| r.int,
        evaluate: |_, v| format::integer(v),
    },
    Rule {
        name: "float",
        is_configured: |r| r.float,
        evaluate: |_, v| format::float(v),
    },
    Rule {
        name: "url",
        is_configured: |r| r.url,
        evaluate: |_, v| format::url(v),
    },
    Rule {
        name: "domain",
        is_configured: |r| r.domain,
        evaluate: |_, v| format::domain(v),
    },
    Rule {
        name: "email",
        is_configured: |r| r.email,
        evaluate: |_, v| format::email(v),
    },
    Rule {
        name: "semver",
        is_configured: |r| r.semver,
        evaluate: |_, v| format::semver(v),
    },
    Rule {
        name: "uuid",
        is_configured: |r| r.uuid,
        evaluate: |_, v| format::uuid(v),
    },
    Rule {
        name: "base64",
        is_configured: |r| r.base64,
        evaluate: |_, v| format::base64(v),
    },
    Rule {
        name: "json",
        is_configured: |r| r.json,
        evaluate: |_, v| format::json(v),
    },
    Rule {
        name: "pattern",
        is_configured: |r| !r.pattern.is_empty(),
        evaluate: |r, v| pattern::matches(&r.pattern, v),
    },
    Rule {
        name: "enum",
        is_configured: |r| !r.enumeration.is_empty(),
        evaluate: |r, v| pattern::one_of(&r.enumeration, v),
    },
    Rule {
        name: "timestamp",
        is_configured: |r| !r.timestamp.is_empty(),
        evaluate: |r, v| timestamp::check(&r.timestamp, v),
    },
];

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
