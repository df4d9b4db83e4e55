pub mod cli;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod report;
pub mod rules;
pub mod value;

pub use error::{Result, ValidError};
pub use orchestrator::Orchestrator;
pub use report::Report;
pub use rules::{RuleOutcome, RuleSet};
pub use value::Value;

pub const APP_NAME: &str = "valid";

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
