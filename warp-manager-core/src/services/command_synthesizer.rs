//! Stateless façade rendering console commands for the account store.
//!
//! Every method on [`CommandSynthesizer`] is an associated function; no instance is needed.
//! Rendering is plain text substitution: record payloads are pretty JSON and
//! identifiers are wrapped in double quotes without further escaping.

use crate::error::{CoreError, CoreResult};
use crate::types::{Command, CredentialRecord, Operation};

/// Console statements of the diagnostic script offered on the page.
const SYSTEM_TEST_SCRIPT: [&str; 7] = [
    "// Warp Account Manager system test",
    "console.log(\"=== system test start ===\");",
    "const accounts = accountManager.getAccountList();",
    "console.log(\"account count:\", accounts.length);",
    "const stats = persistenceManager.getStorageStats();",
    "console.log(\"storage stats:\", stats);",
    "console.log(\"=== system test complete ===\");",
];

/// Entry point for rendering account store commands.
///
/// ```rust
/// use warp_manager_core::CommandSynthesizer;
///
/// let command = CommandSynthesizer::switch_account(Some("x@y.com")).unwrap();
/// assert_eq!(command.as_str(), r#"accountManager.setActiveAccount("x@y.com")"#);
/// ```
pub struct CommandSynthesizer;

impl CommandSynthesizer {
    /// `accountManager.addAccount(<record>)`.
    ///
    /// The record must already have passed validation; it is not checked again.
    pub fn add_account(record: &CredentialRecord) -> Command {
        Command::invoke(Operation::AddAccount, Some(&record.to_string()))
    }

    /// `accountManager.getAccountList()`.
    pub fn list_accounts() -> Command {
        Command::invoke(Operation::GetAccountList, None)
    }

    /// `accountManager.getActiveAccount()`.
    pub fn get_active_account() -> Command {
        Command::invoke(Operation::GetActiveAccount, None)
    }

    /// `accountManager.setActiveAccount("<email>")`.
    ///
    /// `None` means the operator aborted identifier entry.
    pub fn switch_account(email: Option<&str>) -> CoreResult<Command> {
        Self::with_identifier(Operation::SetActiveAccount, email)
    }

    /// `accountManager.deleteAccount("<email>")`.
    pub fn delete_account(email: Option<&str>) -> CoreResult<Command> {
        Self::with_identifier(Operation::DeleteAccount, email)
    }

    /// `persistenceManager.backupData()`.
    pub fn backup_data() -> Command {
        Command::invoke(Operation::BackupData, None)
    }

    /// `persistenceManager.getStorageStats()`.
    pub fn get_storage_stats() -> Command {
        Command::invoke(Operation::GetStorageStats, None)
    }

    /// `persistenceManager.clearAllData()`.
    pub fn clear_all_data() -> Command {
        Command::invoke(Operation::ClearAllData, None)
    }

    /// Multi-line script that lists accounts and prints storage statistics.
    pub fn system_test() -> Command {
        Command::script(&SYSTEM_TEST_SCRIPT)
    }

    fn with_identifier(operation: Operation, email: Option<&str>) -> CoreResult<Command> {
        let email = require_identifier(email)?;
        Ok(Command::invoke(operation, Some(&format!("\"{email}\""))))
    }
}

/// Reject an absent or empty account identifier.
pub(crate) fn require_identifier(email: Option<&str>) -> CoreResult<&str> {
    match email {
        Some(email) if !email.is_empty() => Ok(email),
        _ => Err(CoreError::EmptyIdentifier),
    }
}
