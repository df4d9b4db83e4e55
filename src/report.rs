//! Collects rule failures from one evaluation pass and renders them as one message.
//!
//! Two channels are kept apart: validation issues (the value failed a rule) and
//! argument issues (a rule parameter was malformed). Insertion order is preserved in
//! both channels, and the value is masked only here, at render time.

use crate::rules::RuleOutcome;
use crate::value::Value;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    validations: Vec<String>,
    arguments: Vec<String>,
}

impl Report {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validations: Vec::new(),
            arguments: Vec::new(),
        }
    }

    pub fn record_validation(&mut self, issue: impl Into<String>) {
        self.validations.push(issue.into());
    }

    pub fn record_argument(&mut self, issue: impl Into<String>) {
        self.arguments.push(issue.into());
    }

    /// Routes one rule outcome to its channel. Passing outcomes are dropped.
    pub fn record(&mut self, outcome: RuleOutcome) {
        match outcome {
            RuleOutcome::Passed => {}
            RuleOutcome::ValidationFail(issue) => self.record_validation(issue),
            RuleOutcome::ArgumentFail(issue) => self.record_argument(issue),
        }
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.validations.is_empty() || !self.arguments.is_empty()
    }

    #[must_use]
    pub fn validations(&self) -> &[String] {
        &self.validations
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Total number of recorded issues across both channels.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.validations.len() + self.arguments.len()
    }

    /// Renders the combined message, or an empty string when nothing failed.
    ///
    /// Format: `Validation error: The specified <name> "<masked>" is invalid. Issues: a, b`
    /// and `Argument error: c, d`, joined by `"; "` with a single trailing period.
    #[must_use]
    pub fn render(&self, value: &Value) -> String {
        let mut sections = Vec::with_capacity(2);
        if !self.validations.is_empty() {
            sections.push(format!(
                "Validation error: The specified {} \"{}\" is invalid. Issues: {}",
                value.name(),
                value.masked(),
                self.validations.join(", ")
            ));
        }
        if !self.arguments.is_empty() {
            sections.push(format!("Argument error: {}", self.arguments.join(", ")));
        }

        if sections.is_empty() {
            return String::new();
        }
        format!("{}.", sections.join("; "))
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
