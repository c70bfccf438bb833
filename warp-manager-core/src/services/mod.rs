//! 业务逻辑服务层

mod account_service;
mod command_synthesizer;
mod console_command_store;
mod record_validator;

pub use account_service::AccountService;
pub use command_synthesizer::CommandSynthesizer;
pub use console_command_store::ConsoleCommandStore;
pub use record_validator::RecordValidator;
