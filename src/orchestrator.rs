use tracing::debug;

use crate::error::{Result, ValidError};
use crate::output::Formatter;
use crate::rules::RuleSet;
use crate::value::Value;

/// Runs one evaluation: rules over the value, then rendering and formatting.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    pub value: Value,
    pub rules: RuleSet,
    pub formatter: Formatter,
}

impl Orchestrator {
    #[must_use]
    pub const fn new(value: Value, rules: RuleSet, formatter: Formatter) -> Self {
        Self {
            value,
            rules,
            formatter,
        }
    }

    /// Evaluates every configured rule once.
    ///
    /// # Errors
    /// Returns [`ValidError::Rejected`] carrying the formatted message when any rule
    /// failed or any rule parameter was malformed.
    pub fn orchestrate(&self) -> Result<()> {
        let report = self.rules.evaluate(&self.value);
        debug!(
            issues = report.issue_count(),
            validations = report.validations().len(),
            arguments = report.arguments().len(),
            "Evaluation finished"
        );

        let message = report.has_error().then(|| report.render(&self.value));
        match self.formatter.format(message.as_deref()) {
            Some(formatted) => Err(ValidError::Rejected(formatted)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
