use thiserror::Error;

/// A create or update was rejected before anything changed.
///
/// `fields` names every offending field (camelCase, as persisted) so the
/// caller can point at each input that needs fixing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} ({})", fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
    pub message: String,
}

impl ValidationError {
    pub fn missing(fields: Vec<&'static str>) -> Self {
        Self {
            fields,
            message: "Required fields are missing".to_string(),
        }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            fields: vec![field],
            message: message.into(),
        }
    }

    pub fn mentions(&self, field: &str) -> bool {
        self.fields.iter().any(|f| *f == field)
    }
}

/// Collects blank required fields while a draft is checked.
#[derive(Debug, Default)]
pub(crate) struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    pub(crate) fn text(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(field);
        }
        self
    }

    pub(crate) fn opt_text(self, field: &'static str, value: Option<&str>) -> Self {
        self.text(field, value.unwrap_or_default())
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::missing(self.missing))
        }
    }
}
