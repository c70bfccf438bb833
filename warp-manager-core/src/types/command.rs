//! 控制台命令相关类型定义

use std::fmt;

use serde::Serialize;

/// Console-addressable object of the external account store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StoreObject {
    /// Account records and the active selection
    #[serde(rename = "accountManager")]
    AccountManager,
    /// Storage-level maintenance
    #[serde(rename = "persistenceManager")]
    PersistenceManager,
}

impl StoreObject {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccountManager => "accountManager",
            Self::PersistenceManager => "persistenceManager",
        }
    }
}

impl fmt::Display for StoreObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation of the account store's fixed command surface.
///
/// Names and arity mirror the console API and are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    AddAccount,
    GetAccountList,
    GetActiveAccount,
    SetActiveAccount,
    DeleteAccount,
    BackupData,
    GetStorageStats,
    ClearAllData,
}

impl Operation {
    /// Every operation, in the order the page lists them.
    pub const ALL: [Self; 8] = [
        Self::AddAccount,
        Self::GetAccountList,
        Self::GetActiveAccount,
        Self::SetActiveAccount,
        Self::DeleteAccount,
        Self::BackupData,
        Self::GetStorageStats,
        Self::ClearAllData,
    ];

    /// Object the method is called on.
    pub const fn target(self) -> StoreObject {
        match self {
            Self::AddAccount
            | Self::GetAccountList
            | Self::GetActiveAccount
            | Self::SetActiveAccount
            | Self::DeleteAccount => StoreObject::AccountManager,
            Self::BackupData | Self::GetStorageStats | Self::ClearAllData => {
                StoreObject::PersistenceManager
            }
        }
    }

    /// Console method name.
    pub const fn method(self) -> &'static str {
        match self {
            Self::AddAccount => "addAccount",
            Self::GetAccountList => "getAccountList",
            Self::GetActiveAccount => "getActiveAccount",
            Self::SetActiveAccount => "setActiveAccount",
            Self::DeleteAccount => "deleteAccount",
            Self::BackupData => "backupData",
            Self::GetStorageStats => "getStorageStats",
            Self::ClearAllData => "clearAllData",
        }
    }

    /// Number of arguments the console method takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::AddAccount | Self::SetActiveAccount | Self::DeleteAccount => 1,
            _ => 0,
        }
    }

    /// Short operator-facing description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::AddAccount => "Add a credential record to the account store",
            Self::GetAccountList => "List stored accounts",
            Self::GetActiveAccount => "Show the active account",
            Self::SetActiveAccount => "Switch the active account by email",
            Self::DeleteAccount => "Delete an account by email",
            Self::BackupData => "Back up all account data",
            Self::GetStorageStats => "Show storage statistics",
            Self::ClearAllData => "Remove all stored account data",
        }
    }

    /// `object.method` as written in the console.
    pub fn qualified_name(self) -> String {
        format!("{}.{}", self.target(), self.method())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.target(), self.method())
    }
}

/// Catalogue entry exposed to the page and CLI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationInfo {
    pub operation: Operation,
    pub target: StoreObject,
    pub method: &'static str,
    pub arity: usize,
    pub description: &'static str,
}

impl From<Operation> for OperationInfo {
    fn from(operation: Operation) -> Self {
        Self {
            operation,
            target: operation.target(),
            method: operation.method(),
            arity: operation.arity(),
            description: operation.description(),
        }
    }
}

/// Rendered console text for the operator to run against the account store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    /// `object.method(argument)`, or an empty argument list for zero-arity calls.
    pub(crate) fn invoke(operation: Operation, argument: Option<&str>) -> Self {
        Self(format!("{operation}({})", argument.unwrap_or_default()))
    }

    /// Several console statements joined by newlines.
    pub(crate) fn script(lines: &[&str]) -> Self {
        Self(lines.join("\n"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Command {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
