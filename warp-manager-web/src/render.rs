//! One-shot rendering for the CLI subcommands

use std::io::Read;

use chrono::Utc;
use warp_manager_core::{CommandSynthesizer, CredentialRecord, RecordValidator};

use crate::cli::RenderCommand;
use crate::error::AppError;

/// Render the text a subcommand prints.
///
/// `input` supplies the record for `add-account` when no file is given.
pub fn render(command: &RenderCommand, input: &mut dyn Read) -> Result<String, AppError> {
    let text = match command {
        RenderCommand::AddAccount { file } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut raw = String::new();
                    input.read_to_string(&mut raw)?;
                    raw
                }
            };
            let record = RecordValidator::validate(&raw)?;
            CommandSynthesizer::add_account(&record).into_string()
        }
        RenderCommand::List => CommandSynthesizer::list_accounts().into_string(),
        RenderCommand::Active => CommandSynthesizer::get_active_account().into_string(),
        RenderCommand::Switch { email } => {
            CommandSynthesizer::switch_account(email.as_deref())?.into_string()
        }
        RenderCommand::Delete { email } => {
            CommandSynthesizer::delete_account(email.as_deref())?.into_string()
        }
        RenderCommand::Backup => CommandSynthesizer::backup_data().into_string(),
        RenderCommand::Stats => CommandSynthesizer::get_storage_stats().into_string(),
        RenderCommand::Clear => CommandSynthesizer::clear_all_data().into_string(),
        RenderCommand::SystemTest => CommandSynthesizer::system_test().into_string(),
        RenderCommand::Example => CredentialRecord::example(Utc::now().timestamp_millis()).to_string(),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{empty, Write};
    use warp_manager_core::CoreError;

    const RECORD: &str = r#"{"email":"a@b.com","tokenManager":{"accessToken":"AT","refreshToken":"RT","expirationTime":1700000000000}}"#;

    #[test]
    fn add_account_from_stdin() {
        let text = render(
            &RenderCommand::AddAccount { file: None },
            &mut RECORD.as_bytes(),
        )
        .unwrap();
        assert!(text.starts_with("accountManager.addAccount({\n"));
        assert!(text.contains("1700000000000"));
    }

    #[test]
    fn add_account_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RECORD.as_bytes()).unwrap();

        let command = RenderCommand::AddAccount {
            file: Some(file.path().to_path_buf()),
        };
        let text = render(&command, &mut empty()).unwrap();
        assert!(text.contains("\"a@b.com\""));
    }

    #[test]
    fn empty_stdin_is_empty_input() {
        let err = render(&RenderCommand::AddAccount { file: None }, &mut empty()).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::EmptyInput)));
    }

    #[test]
    fn switch_without_email_fails() {
        let err = render(&RenderCommand::Switch { email: None }, &mut empty()).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::EmptyIdentifier)));
    }

    #[test]
    fn delete_renders_quoted_email() {
        let command = RenderCommand::Delete {
            email: Some("x@y.com".to_string()),
        };
        assert_eq!(
            render(&command, &mut empty()).unwrap(),
            "accountManager.deleteAccount(\"x@y.com\")"
        );
    }

    #[test]
    fn example_is_a_valid_record() {
        let text = render(&RenderCommand::Example, &mut empty()).unwrap();
        let record = RecordValidator::validate(&text).unwrap();
        assert_eq!(record.email(), Some("example@warp.dev"));
        assert!(record.expiration_time().unwrap() > Utc::now().timestamp_millis());
    }
}
