//! 账户服务
//!
//! Validates operator input, then forwards it to an [`AccountStore`].

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::command_synthesizer::require_identifier;
use crate::services::RecordValidator;
use crate::traits::AccountStore;
use crate::types::CredentialRecord;

/// Validate-then-dispatch over an account store.
pub struct AccountService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: AccountStore + ?Sized> AccountService<S> {
    /// 创建账户服务实例
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate raw record text without dispatching it.
    pub fn validate(&self, raw: &str) -> CoreResult<CredentialRecord> {
        RecordValidator::validate(raw).inspect_err(log_rejection)
    }

    /// Validate a pasted record and add it to the store.
    pub async fn add_account(&self, raw: &str) -> CoreResult<S::Output> {
        let record = self.validate(raw)?;
        log::info!(
            "Adding account {}",
            record.email().unwrap_or("<non-text email>")
        );
        self.store.add_account(&record).await
    }

    /// List stored accounts.
    pub async fn list_accounts(&self) -> CoreResult<S::Output> {
        self.store.get_account_list().await
    }

    /// Show the active account.
    pub async fn active_account(&self) -> CoreResult<S::Output> {
        self.store.get_active_account().await
    }

    /// Switch the active account; `None` means the operator aborted entry.
    pub async fn switch_account(&self, email: Option<&str>) -> CoreResult<S::Output> {
        let email = require_identifier(email).inspect_err(log_rejection)?;
        log::info!("Switching active account to {email}");
        self.store.set_active_account(email).await
    }

    /// Delete an account; `None` means the operator aborted entry.
    pub async fn delete_account(&self, email: Option<&str>) -> CoreResult<S::Output> {
        let email = require_identifier(email).inspect_err(log_rejection)?;
        log::info!("Deleting account {email}");
        self.store.delete_account(email).await
    }

    /// Back up all account data.
    pub async fn backup_data(&self) -> CoreResult<S::Output> {
        self.store.backup_data().await
    }

    /// Storage statistics.
    pub async fn storage_stats(&self) -> CoreResult<S::Output> {
        self.store.get_storage_stats().await
    }

    /// Remove all stored data.
    pub async fn clear_all_data(&self) -> CoreResult<S::Output> {
        log::warn!("Rendering clear-all-data request");
        self.store.clear_all_data().await
    }
}

fn log_rejection(err: &CoreError) {
    if err.is_expected() {
        log::warn!("Rejected input: {err}");
    } else {
        log::error!("Rejected input: {err}");
    }
}
