//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Nothing but whitespace was supplied
    #[error("Account data is empty")]
    EmptyInput,

    /// The input is not a JSON object; carries the parser message verbatim
    #[error("Invalid JSON: {0}")]
    MalformedSyntax(String),

    /// First required field (in check order) that is absent or falsy
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// The operator supplied no account identifier
    #[error("Account email is required")]
    EmptyIdentifier,
}

impl CoreError {
    /// Whether it is expected behavior (user input) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::EmptyInput
            | Self::MalformedSyntax(_)
            | Self::MissingField(_)
            | Self::EmptyIdentifier => true,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_code_and_details() {
        let value = serde_json::to_value(CoreError::MissingField("email".to_string())).unwrap();
        assert_eq!(value["code"], "MissingField");
        assert_eq!(value["details"], "email");
    }

    #[test]
    fn unit_variants_serialize_code_only() {
        let value = serde_json::to_value(CoreError::EmptyIdentifier).unwrap();
        assert_eq!(value["code"], "EmptyIdentifier");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn display_names_the_field() {
        let err = CoreError::MissingField("refreshToken".to_string());
        assert_eq!(err.to_string(), "Missing required field: refreshToken");
    }

    #[test]
    fn operator_errors_are_expected() {
        assert!(CoreError::EmptyInput.is_expected());
        assert!(CoreError::MalformedSyntax("eof".to_string()).is_expected());
    }
}
