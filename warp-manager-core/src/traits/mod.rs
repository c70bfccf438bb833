//! Account store abstraction trait definition

mod account_store;

pub use account_store::AccountStore;
