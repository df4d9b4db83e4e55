/// Label used in messages when no value name was given.
pub const DEFAULT_VALUE_NAME: &str = "value";

/// Redaction token shown in place of a masked value.
pub const MASKED_VALUE: &str = "***";

/// The input under validation.
///
/// Rules always see [`Value::unmasked`]; only error rendering uses [`Value::masked`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value {
    raw: String,
    name: Option<String>,
    mask: bool,
}

impl Value {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            name: None,
            mask: false,
        }
    }

    /// Sets the label used in error messages. An empty name falls back to the default.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    #[must_use]
    pub const fn with_mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_VALUE_NAME)
    }

    #[must_use]
    pub fn unmasked(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn masked(&self) -> &str {
        if self.mask { MASKED_VALUE } else { &self.raw }
    }

    #[must_use]
    pub const fn is_masked(&self) -> bool {
        self.mask
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
