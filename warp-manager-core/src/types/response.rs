//! API 响应相关类型定义

use serde::{Deserialize, Serialize};

use super::CredentialRecord;

/// API 响应包装类型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 是否成功
    pub success: bool,
    /// 响应数据
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

/// Identifier-based command request (switch / delete).
///
/// `email` is optional: a missing value means the operator aborted entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountIdentifierRequest {
    /// 账户邮箱
    #[serde(default)]
    pub email: Option<String>,
}

/// Result of a successful validation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub email: Option<String>,
    pub expiration_time: Option<i64>,
}

impl From<&CredentialRecord> for ValidationReport {
    fn from(record: &CredentialRecord) -> Self {
        Self {
            valid: true,
            email: record.email().map(str::to_string),
            expiration_time: record.expiration_time(),
        }
    }
}
