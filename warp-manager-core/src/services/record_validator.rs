//! 凭证记录验证
//!
//! Parses operator-pasted text into a [`CredentialRecord`] and checks that every
//! required field is present, reporting the first one that is not.

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::{is_truthy, lookup, CredentialRecord, RecordField};
use crate::utils::mask_secret;

/// Stateless credential record validator.
pub struct RecordValidator;

impl RecordValidator {
    /// Validate raw record text.
    ///
    /// Checks run in [`RecordField::CHECK_ORDER`]; presence follows console
    /// truthiness, so `expirationTime: 0` counts as missing. The parsed record is
    /// returned untouched on success.
    pub fn validate(raw: &str) -> CoreResult<CredentialRecord> {
        if raw.trim().is_empty() {
            log::debug!("Rejected record: empty input");
            return Err(CoreError::EmptyInput);
        }

        let value: Value = serde_json::from_str(raw).map_err(|e| {
            // the input itself may hold tokens; only its size is logged
            log::debug!("Rejected record: {e} ({} bytes of input)", raw.len());
            CoreError::MalformedSyntax(e.to_string())
        })?;

        let Value::Object(object) = value else {
            return Err(CoreError::MalformedSyntax(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        };

        let record = CredentialRecord::from_object(object);
        Self::check_required(record.as_value())?;

        log::debug!(
            "Validated record for {} (access token {}, refresh token {})",
            record.email().unwrap_or("<non-text email>"),
            record.access_token().map_or_else(|| "***".to_string(), mask_secret),
            record.refresh_token().map_or_else(|| "***".to_string(), mask_secret),
        );
        Ok(record)
    }

    /// First required field that is absent or falsy, if any.
    pub fn first_missing(value: &Value) -> Option<RecordField> {
        RecordField::CHECK_ORDER
            .into_iter()
            .find(|field| !lookup(value, *field).is_some_and(is_truthy))
    }

    fn check_required(value: &Value) -> CoreResult<()> {
        match Self::first_missing(value) {
            Some(field) => {
                log::debug!("Rejected record: missing {field}");
                Err(CoreError::MissingField(field.as_str().to_string()))
            }
            None => Ok(()),
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
