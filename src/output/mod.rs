use std::fmt;

/// Display style for the final error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Error: <message>`
    #[default]
    Default,
    /// `::error::<message>`, picked up as a workflow annotation by GitHub Actions.
    GithubActions,
}

impl OutputFormat {
    /// Resolves a style name. Unknown names fall back to [`OutputFormat::Default`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "github-actions" => Self::GithubActions,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Default => "Error: ",
            Self::GithubActions => "::error::",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::GithubActions => f.write_str("github-actions"),
        }
    }
}

/// Renders an aggregated error message in the configured style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        self.format
    }

    /// `None` passes through untouched; a message gets the style's prefix.
    #[must_use]
    pub fn format(&self, message: Option<&str>) -> Option<String> {
        message.map(|message| format!("{}{message}", self.format.prefix()))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
