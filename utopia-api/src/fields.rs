//! Typed reads from the flat string maps used as request bodies.

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("Missing field: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {field}: {value}")]
    Invalid { field: &'static str, value: String },
}

pub struct FieldMap(HashMap<String, String>);

impl FieldMap {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self(map)
    }

    pub fn text(&self, name: &'static str) -> Result<String, FieldError> {
        self.0.get(name).cloned().ok_or(FieldError::Missing(name))
    }

    pub fn integer(&self, name: &'static str) -> Result<i32, FieldError> {
        let raw = self.0.get(name).ok_or(FieldError::Missing(name))?;
        raw.parse().map_err(|_| FieldError::Invalid {
            field: name,
            value: raw.clone(),
        })
    }

    /// Only the literals `true` and `false` are accepted.
    pub fn boolean(&self, name: &'static str) -> Result<bool, FieldError> {
        let raw = self.0.get(name).ok_or(FieldError::Missing(name))?;
        match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(FieldError::Invalid {
                field: name,
                value: raw.clone(),
            }),
        }
    }
}
