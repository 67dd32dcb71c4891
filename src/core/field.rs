use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Identifier,
    Secret,
}

impl FieldId {
    pub const ALL: [FieldId; 2] = [FieldId::Identifier, FieldId::Secret];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Identifier => "identifier",
            FieldId::Secret => "secret",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Clean,
    Flagged,
}

/// A required field was left empty. Carried as data on the field and on the
/// submission, never returned as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    pub fn missing(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The message slot and the invalid marker are both read off `error`, so one
/// can never be set without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    id: FieldId,
    #[serde(skip)]
    value: String,
    error: Option<FieldError>,
}

impl FieldState {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            error: None,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_ref().map_or("", |err| err.message.as_str())
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    pub fn status(&self) -> FieldStatus {
        if self.is_invalid() {
            FieldStatus::Flagged
        } else {
            FieldStatus::Clean
        }
    }

    pub fn flag(&mut self, error: FieldError) {
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) -> bool {
        self.error.take().is_some()
    }
}
