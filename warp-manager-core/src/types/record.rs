//! 凭证记录类型定义

use std::fmt;

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Key of the nested token object.
pub const TOKEN_MANAGER_KEY: &str = "tokenManager";

/// Older exports name the nested token object `stsTokenManager`.
pub const LEGACY_TOKEN_MANAGER_KEY: &str = "stsTokenManager";

/// Lifetime given to the example record's access token (one hour).
const EXAMPLE_TOKEN_TTL_MS: i64 = 3_600_000;

/// Required fields of a credential record, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    /// Top-level `email`
    Email,
    /// Nested token object
    TokenManager,
    /// `tokenManager.accessToken`
    AccessToken,
    /// `tokenManager.refreshToken`
    RefreshToken,
    /// `tokenManager.expirationTime`
    ExpirationTime,
}

impl RecordField {
    /// Fields in the order the validator checks them. The first failure wins.
    pub const CHECK_ORDER: [Self; 5] = [
        Self::Email,
        Self::TokenManager,
        Self::AccessToken,
        Self::RefreshToken,
        Self::ExpirationTime,
    ];

    /// JSON key of the field, as reported in `MissingField`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::TokenManager => TOKEN_MANAGER_KEY,
            Self::AccessToken => "accessToken",
            Self::RefreshToken => "refreshToken",
            Self::ExpirationTime => "expirationTime",
        }
    }

    /// Whether the field lives inside the token object.
    pub const fn is_token_field(self) -> bool {
        matches!(
            self,
            Self::AccessToken | Self::RefreshToken | Self::ExpirationTime
        )
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Warp account credential record.
///
/// Holds the JSON object exactly as the operator supplied it, so serializing it
/// again keeps field order and any extra fields. Instances are only produced by
/// [`RecordValidator`](crate::RecordValidator) or [`CredentialRecord::example`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CredentialRecord {
    /// Always a JSON object.
    value: Value,
}

impl CredentialRecord {
    /// Wrap an already validated JSON object.
    pub(crate) fn from_object(object: Map<String, Value>) -> Self {
        Self {
            value: Value::Object(object),
        }
    }

    /// Sample record with placeholder tokens expiring an hour after `now_ms`.
    #[must_use]
    pub fn example(now_ms: i64) -> Self {
        let value = json!({
            "email": "example@warp.dev",
            TOKEN_MANAGER_KEY: {
                "accessToken": "example_access_token_here",
                "refreshToken": "example_refresh_token_here",
                "expirationTime": now_ms.saturating_add(EXAMPLE_TOKEN_TTL_MS),
            }
        });
        Self { value }
    }

    /// Look up a required field, resolving token fields through the token object.
    pub fn field(&self, field: RecordField) -> Option<&Value> {
        lookup(&self.value, field)
    }

    /// Account email, when it is a string.
    pub fn email(&self) -> Option<&str> {
        self.field(RecordField::Email).and_then(Value::as_str)
    }

    /// Access token, when it is a string.
    pub fn access_token(&self) -> Option<&str> {
        self.field(RecordField::AccessToken).and_then(Value::as_str)
    }

    /// Refresh token, when it is a string.
    pub fn refresh_token(&self) -> Option<&str> {
        self.field(RecordField::RefreshToken)
            .and_then(Value::as_str)
    }

    /// Expiration timestamp in milliseconds, when it is an integer.
    pub fn expiration_time(&self) -> Option<i64> {
        self.field(RecordField::ExpirationTime)
            .and_then(Value::as_i64)
    }

    /// The underlying JSON object.
    pub const fn as_value(&self) -> &Value {
        &self.value
    }
}

/// Pretty JSON with two-space indentation, input field order preserved.
impl fmt::Display for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.value)
    }
}

/// Resolve `field` against a record-shaped JSON value.
///
/// Token fields are read from `tokenManager`, falling back to `stsTokenManager`
/// when the former is absent or falsy.
pub(crate) fn lookup(record: &Value, field: RecordField) -> Option<&Value> {
    if field.is_token_field() {
        return token_manager(record).and_then(|tm| tm.get(field.as_str()));
    }
    match field {
        RecordField::TokenManager => token_manager(record),
        _ => record.get(field.as_str()),
    }
}

fn token_manager(record: &Value) -> Option<&Value> {
    [TOKEN_MANAGER_KEY, LEGACY_TOKEN_MANAGER_KEY]
        .into_iter()
        .filter_map(|key| record.get(key))
        .find(|value| is_truthy(value))
        .or_else(|| record.get(TOKEN_MANAGER_KEY))
}

/// Presence check with JavaScript truthiness: `null`, `false`, `""` and zero are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
