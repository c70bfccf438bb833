//! Warp Account Manager Core Library
//!
//! Turns operator input into console commands for the external account store:
//! - Record validation (`RecordValidator`)
//! - Command synthesis (`CommandSynthesizer`)
//! - Validate-then-dispatch over an abstract store (`AccountService`)
//!
//! Nothing here performs I/O or keeps state between calls. The account store is
//! reached through the [`AccountStore`] trait, so the text renderer can be
//! replaced by a real client without touching validation.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{AccountService, CommandSynthesizer, ConsoleCommandStore, RecordValidator};
pub use traits::AccountStore;
pub use types::{Command, CredentialRecord, Operation, RecordField, StoreObject};
