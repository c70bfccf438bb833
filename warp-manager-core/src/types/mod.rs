//! 类型定义模块

mod command;
mod record;
mod response;

pub use command::{Command, Operation, OperationInfo, StoreObject};
pub use record::{CredentialRecord, RecordField, LEGACY_TOKEN_MANAGER_KEY, TOKEN_MANAGER_KEY};
pub use response::{AccountIdentifierRequest, ApiResponse, ValidationReport};

pub(crate) use record::{is_truthy, lookup};
