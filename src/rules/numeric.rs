use std::fmt::Display;

use super::RuleOutcome;

/// Which side of the range a numeric bound constrains. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericBound {
    Min,
    Max,
}

impl NumericBound {
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Min => "--min",
            Self::Max => "--max",
        }
    }

    fn holds<T: PartialOrd>(self, value: &T, bound: &T) -> bool {
        match self {
            Self::Min => value >= bound,
            Self::Max => value <= bound,
        }
    }

    fn issue(self, bound: impl Display) -> String {
        match self {
            Self::Min => format!("must be no less than {bound}"),
            Self::Max => format!("must be no greater than {bound}"),
        }
    }
}

/// The numeric family a value parsed into.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Integer interpretation wins; float is the fallback.
    fn parse(s: &str) -> Option<Self> {
        s.parse::<i64>()
            .ok()
            .map(Self::Int)
            .or_else(|| parse_float(s).map(Self::Float))
    }
}

/// Parses a float, rejecting magnitudes that overflow to infinity.
///
/// Spelled-out infinities (`inf`, `-Infinity`) are still accepted.
fn parse_float(s: &str) -> Option<f64> {
    let parsed = s.parse::<f64>().ok()?;
    if parsed.is_finite() {
        return Some(parsed);
    }
    let unsigned = s.trim_start_matches(['+', '-']);
    let spelled = ["inf", "infinity", "nan"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word));
    spelled.then_some(parsed)
}

/// Compares `value` against `bound` within the value's numeric family.
///
/// The bound must parse in the same family as the value; an integer value is never
/// compared against a float bound.
pub fn check(kind: NumericBound, bound: &str, value: &str) -> RuleOutcome {
    match Number::parse(value) {
        Some(Number::Int(value)) => match bound.parse::<i64>() {
            Ok(bound) => compare(kind, value, bound),
            Err(_) => {
                RuleOutcome::ArgumentFail(format!("{} must be an integer number", kind.flag()))
            }
        },
        Some(Number::Float(value)) => match parse_float(bound) {
            Some(bound) => compare(kind, value, bound),
            None => RuleOutcome::ArgumentFail(format!(
                "{} must be a floating point number",
                kind.flag()
            )),
        },
        None => RuleOutcome::ArgumentFail(format!(
            "{} cannot validate non-numeric value",
            kind.flag()
        )),
    }
}

fn compare<T: PartialOrd + Display>(kind: NumericBound, value: T, bound: T) -> RuleOutcome {
    if kind.holds(&value, &bound) {
        RuleOutcome::Passed
    } else {
        RuleOutcome::ValidationFail(kind.issue(bound))
    }
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod tests;
