#![allow(dead_code)]

/// Creates an `assert_cmd` Command for the valid binary.
#[macro_export]
macro_rules! valid {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("valid"))
    };
}

/// Builds the default-style validation message for an unnamed, unmasked value.
pub fn validation_message(value: &str, issues: &str) -> String {
    format!(
        "Error: Validation error: The specified value \"{value}\" is invalid. Issues: {issues}."
    )
}
