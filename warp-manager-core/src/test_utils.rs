//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::cell::RefCell;
use std::sync::{Arc, Once};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::services::AccountService;
use crate::traits::AccountStore;
use crate::types::CredentialRecord;

/// Well-formed record used across tests.
pub const VALID_RECORD: &str = r#"{
  "email": "a@b.com",
  "tokenManager": {
    "accessToken": "AT",
    "refreshToken": "RT",
    "expirationTime": 1700000000000
  }
}"#;

/// Record JSON with the given values.
pub fn record_json(email: &str, access: &str, refresh: &str, expiration: i64) -> Value {
    json!({
        "email": email,
        "tokenManager": {
            "accessToken": access,
            "refreshToken": refresh,
            "expirationTime": expiration,
        }
    })
}

// ===== RecordingAccountStore =====

/// Call received by [`RecordingAccountStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    AddAccount(CredentialRecord),
    GetAccountList,
    GetActiveAccount,
    SetActiveAccount(String),
    DeleteAccount(String),
    BackupData,
    GetStorageStats,
    ClearAllData,
}

/// Store that only records what it was asked to do.
pub struct RecordingAccountStore {
    calls: RwLock<Vec<StoreCall>>,
}

impl RecordingAccountStore {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: StoreCall) -> CoreResult<()> {
        self.calls.write().await.push(call);
        Ok(())
    }
}

#[async_trait]
impl AccountStore for RecordingAccountStore {
    type Output = ();

    async fn add_account(&self, record: &CredentialRecord) -> CoreResult<()> {
        self.record(StoreCall::AddAccount(record.clone())).await
    }

    async fn get_account_list(&self) -> CoreResult<()> {
        self.record(StoreCall::GetAccountList).await
    }

    async fn get_active_account(&self) -> CoreResult<()> {
        self.record(StoreCall::GetActiveAccount).await
    }

    async fn set_active_account(&self, email: &str) -> CoreResult<()> {
        self.record(StoreCall::SetActiveAccount(email.to_string()))
            .await
    }

    async fn delete_account(&self, email: &str) -> CoreResult<()> {
        self.record(StoreCall::DeleteAccount(email.to_string())).await
    }

    async fn backup_data(&self) -> CoreResult<()> {
        self.record(StoreCall::BackupData).await
    }

    async fn get_storage_stats(&self) -> CoreResult<()> {
        self.record(StoreCall::GetStorageStats).await
    }

    async fn clear_all_data(&self) -> CoreResult<()> {
        self.record(StoreCall::ClearAllData).await
    }
}

// ===== Factory =====

/// Account service over a fresh recording store.
pub fn create_test_account_service() -> (
    AccountService<RecordingAccountStore>,
    Arc<RecordingAccountStore>,
) {
    let store = Arc::new(RecordingAccountStore::new());
    (AccountService::new(Arc::clone(&store)), store)
}

// ===== Log capture =====

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// `log` backend that records messages emitted on a capturing thread.
struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED.with(|captured| {
            if let Some(lines) = captured.borrow_mut().as_mut() {
                lines.push(record.args().to_string());
            }
        });
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

/// Run `f` and return every log message it emitted on this thread.
pub fn captured_logs(f: impl FnOnce()) -> Vec<String> {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in core tests");
        log::set_max_level(log::LevelFilter::Trace);
    });

    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
    f();
    CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default())
}
