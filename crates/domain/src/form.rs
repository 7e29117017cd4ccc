use feedback_relay_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Field rewritten with the application prefix before sending.
pub const DEFAULT_DESIGNATED_FIELD: &str = "subject";

/// Application name used when the form does not configure one.
pub const DEFAULT_APP_NAME: &str = "App";

/// One named text input of the feedback form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    name: NonEmptyString,
    value: String,
}

impl FormField {
    /// Creates a field with a validated name.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::new(name)?,
            value: value.into(),
        })
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

/// Ordered snapshot of the form inputs; becomes the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    fields: Vec<FormField>,
}

impl FormFields {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, keeping form order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) -> AppResult<()> {
        self.fields.push(FormField::new(name, value)?);
        Ok(())
    }

    /// Returns the value of the first field with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .map(FormField::value)
    }

    /// Replaces the value of the first field with the given name.
    ///
    /// Returns `false` when no such field exists.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name() == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Clears every value while keeping the fields themselves.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Iterates fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Prefixes a designated field value with the application identifier.
#[must_use]
pub fn prefixed_subject(app_name: &str, original: &str) -> String {
    format!("[{app_name} App Feedback] {original}")
}

/// Visual category of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Submission accepted.
    Success,
    /// Submission failed.
    Error,
    /// Submission blocked by the rate limiter.
    Warning,
}

impl StatusKind {
    /// Returns the stable identifier of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}
