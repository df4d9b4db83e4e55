use clap::Parser;

use crate::orchestrator::Orchestrator;
use crate::output::{Formatter, OutputFormat};
use crate::rules::RuleSet;
use crate::value::Value;

#[derive(Parser, Debug, Default)]
#[command(name = "valid")]
#[command(version, about = "Validates that input values meet specified rules")]
#[command(long_about = "Validates that input values meet specified rules.\n\n\
    All configured rules run in one pass and every failure is reported together.\n\n\
    Exit codes:\n  \
    0 - The value satisfies every rule\n  \
    1 - Validation or argument error\n  \
    2 - Invalid command line\n\n\
    Set VALID_DEBUG=true to print debug logs to stderr.")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// The value to validate against the specified rules
    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<String>,

    /// The name of the value to include in error messages
    #[arg(long, allow_hyphen_values = true)]
    pub value_name: Option<String>,

    /// Masks the value in error messages to protect sensitive data
    #[arg(long)]
    pub mask_value: bool,

    /// Specifies the output format (default, github-actions)
    #[arg(long, default_value = "default")]
    pub format: String,

    /// Validates that the value is greater than or equal to the specified minimum
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Validates that the value is less than or equal to the specified maximum
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Validates that the length of value is exactly the specified number
    #[arg(long, allow_hyphen_values = true)]
    pub exact_length: Option<String>,

    /// Validates that the length of value is greater than or equal to the specified minimum
    #[arg(long, allow_hyphen_values = true)]
    pub min_length: Option<String>,

    /// Validates that the length of value is less than or equal to the specified maximum
    #[arg(long, allow_hyphen_values = true)]
    pub max_length: Option<String>,

    /// Validates that the value is not empty
    #[arg(long)]
    pub not_empty: bool,

    /// Validates that the value contains only digits (0-9)
    #[arg(long)]
    pub digit: bool,

    /// Validates that the value contains only English letters (a-zA-Z)
    #[arg(long)]
    pub alpha: bool,

    /// Validates that the value contains only English letters and digits (a-zA-Z0-9)
    #[arg(long)]
    pub alphanumeric: bool,

    /// Validates that the value contains only ASCII characters
    #[arg(long)]
    pub ascii: bool,

    /// Validates that the value contains only printable ASCII characters
    #[arg(long)]
    pub printable_ascii: bool,

    /// Validates that the value contains only lowercase Unicode letters
    #[arg(long)]
    pub lower_case: bool,

    /// Validates that the value contains only uppercase Unicode letters
    #[arg(long)]
    pub upper_case: bool,

    /// Validates that the value is an integer
    #[arg(long)]
    pub int: bool,

    /// Validates that the value is a floating-point number
    #[arg(long)]
    pub float: bool,

    /// Validates that the value is a valid URL
    #[arg(long)]
    pub url: bool,

    /// Validates that the value is a valid domain
    #[arg(long)]
    pub domain: bool,

    /// Validates that the value is a valid email address
    #[arg(long)]
    pub email: bool,

    /// Validates that the value is a valid semantic version
    #[arg(long)]
    pub semver: bool,

    /// Validates that the value is a valid UUID
    #[arg(long)]
    pub uuid: bool,

    /// Validates that the value is a valid Base64 string
    #[arg(long)]
    pub base64: bool,

    /// Validates that the value is a valid JSON string
    #[arg(long)]
    pub json: bool,

    /// Validates that the value matches the specified regular expression
    #[arg(long, allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Validates that the value matches one of the specified enumerations (comma-separated list)
    #[arg(long = "enum", allow_hyphen_values = true)]
    pub enumeration: Option<String>,

    /// Validates that the value matches the timestamp layout (rfc3339, datetime, date, or time)
    #[arg(long, allow_hyphen_values = true)]
    pub timestamp: Option<String>,
}

impl Cli {
    /// Splits parsed flags into the value, its rules, and the output style.
    #[must_use]
    pub fn into_orchestrator(self) -> Orchestrator {
        let value = Value::new(self.value.unwrap_or_default())
            .with_name(self.value_name.unwrap_or_default())
            .with_mask(self.mask_value);

        let rules = RuleSet {
            min: self.min.unwrap_or_default(),
            max: self.max.unwrap_or_default(),
            exact_length: self.exact_length.unwrap_or_default(),
            min_length: self.min_length.unwrap_or_default(),
            max_length: self.max_length.unwrap_or_default(),
            not_empty: self.not_empty,
            digit: self.digit,
            alpha: self.alpha,
            alphanumeric: self.alphanumeric,
            ascii: self.ascii,
            printable_ascii: self.printable_ascii,
            lower_case: self.lower_case,
            upper_case: self.upper_case,
            int: self.int,
            float: self.float,
            url: self.url,
            domain: self.domain,
            email: self.email,
            semver: self.semver,
            uuid: self.uuid,
            base64: self.base64,
            json: self.json,
            pattern: self.pattern.unwrap_or_default(),
            enumeration: self.enumeration.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
        };

        let formatter = Formatter::new(OutputFormat::from_name(&self.format));
        Orchestrator::new(value, rules, formatter)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
