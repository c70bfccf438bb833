//! Account store that answers every call with console text

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::services::CommandSynthesizer;
use crate::traits::AccountStore;
use crate::types::{Command, CredentialRecord};

/// [`AccountStore`] rendering each call as a [`Command`] for manual execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleCommandStore;

impl ConsoleCommandStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccountStore for ConsoleCommandStore {
    type Output = Command;

    async fn add_account(&self, record: &CredentialRecord) -> CoreResult<Command> {
        Ok(CommandSynthesizer::add_account(record))
    }

    async fn get_account_list(&self) -> CoreResult<Command> {
        Ok(CommandSynthesizer::list_accounts())
    }

    async fn get_active_account(&self) -> CoreResult<Command> {
        Ok(CommandSynthesizer::get_active_account())
    }

    async fn set_active_account(&self, email: &str) -> CoreResult<Command> {
        CommandSynthesizer::switch_account(Some(email))
    }

    async fn delete_account(&self, email: &str) -> CoreResult<Command> {
        CommandSynthesizer::delete_account(Some(email))
    }

    async fn backup_data(&self) -> CoreResult<Command> {
        Ok(CommandSynthesizer::backup_data())
    }

    async fn get_storage_stats(&self) -> CoreResult<Command> {
        Ok(CommandSynthesizer::get_storage_stats())
    }

    async fn clear_all_data(&self) -> CoreResult<Command> {
        Ok(CommandSynthesizer::clear_all_data())
    }
}
