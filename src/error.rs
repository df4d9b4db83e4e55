use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidError {
    /// The value or its rule parameters were rejected. Displays the formatted message as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

impl ValidError {
    /// Returns the error variant name.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Rejected(_) => "Rejected",
            Self::Logging(_) => "Logging",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
