use super::RuleOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    Exact,
    Min,
    Max,
}

impl LengthBound {
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Exact => "--exact-length",
            Self::Min => "--min-length",
            Self::Max => "--max-length",
        }
    }

    const fn holds(self, length: i64, bound: i64) -> bool {
        match self {
            Self::Exact => length == bound,
            Self::Min => length >= bound,
            Self::Max => length <= bound,
        }
    }

    fn issue(self, bound: i64) -> String {
        match self {
            Self::Exact => format!("the length must be exactly {bound}"),
            Self::Min => format!("the length must be no less than {bound}"),
            Self::Max => format!("the length must be no more than {bound}"),
        }
    }
}

/// Checks the value's length in characters against an integer bound.
pub fn check(kind: LengthBound, bound: &str, value: &str) -> RuleOutcome {
    let Ok(bound) = bound.parse::<i64>() else {
        return RuleOutcome::ArgumentFail(format!("{} must be an integer number", kind.flag()));
    };

    let length = i64::try_from(value.chars().count()).unwrap_or(i64::MAX);
    if kind.holds(length, bound) {
        RuleOutcome::Passed
    } else {
        RuleOutcome::ValidationFail(kind.issue(bound))
    }
}

#[cfg(test)]
#[path = "length_tests.rs"]
mod tests;
