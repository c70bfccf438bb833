//! 账户存储抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::CredentialRecord;

/// Command surface of the external account store.
///
/// Implementations:
/// - [`ConsoleCommandStore`](crate::ConsoleCommandStore): renders each call as
///   console text for the operator to run by hand (`Output = Command`)
///
/// A client that talks to the store directly implements the same trait with its
/// own `Output`; [`AccountService`](crate::AccountService) validates input the
/// same way for either.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// What a call produces.
    type Output: Send;

    /// Add a validated credential record
    ///
    /// # Arguments
    /// * `record` - Record that already passed validation
    async fn add_account(&self, record: &CredentialRecord) -> CoreResult<Self::Output>;

    /// List stored accounts
    async fn get_account_list(&self) -> CoreResult<Self::Output>;

    /// Get the active account
    async fn get_active_account(&self) -> CoreResult<Self::Output>;

    /// Make an account active
    ///
    /// # Arguments
    /// * `email` - Non-empty account email
    async fn set_active_account(&self, email: &str) -> CoreResult<Self::Output>;

    /// Delete an account
    ///
    /// # Arguments
    /// * `email` - Non-empty account email
    async fn delete_account(&self, email: &str) -> CoreResult<Self::Output>;

    // === persistenceManager ===

    /// Back up all stored data
    async fn backup_data(&self) -> CoreResult<Self::Output>;

    /// Storage statistics
    async fn get_storage_stats(&self) -> CoreResult<Self::Output>;

    /// Remove all stored data
    async fn clear_all_data(&self) -> CoreResult<Self::Output>;
}
