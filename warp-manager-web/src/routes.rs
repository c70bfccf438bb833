//! HTTP handlers: the management page and the command API behind it.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, post, web};
use chrono::Utc;
use serde::Serialize;
use warp_manager_core::types::{
    AccountIdentifierRequest, ApiResponse, OperationInfo, ValidationReport,
};
use warp_manager_core::{Command, CommandSynthesizer, CredentialRecord, Operation};

use crate::error::AppError;
use crate::state::AppState;

/// Management page served at `/`.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

type ApiResult<T> = Result<web::Json<ApiResponse<T>>, AppError>;

#[derive(Debug, Serialize)]
pub struct CommandPayload {
    pub command: Command,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub version: &'static str,
    pub page_url: String,
    pub port: u16,
}

/// Raw request body as text; invalid UTF-8 gets the JSON error envelope.
fn body_text(body: &web::Bytes) -> Result<&str, AppError> {
    Ok(std::str::from_utf8(body)?)
}

fn command_response(command: Command) -> ApiResult<CommandPayload> {
    Ok(web::Json(ApiResponse::success(CommandPayload { command })))
}

/// Register every route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(index_html)
        .service(health)
        .service(info)
        .service(operations)
        .service(example)
        .service(validate)
        .service(add_account)
        .service(switch_account)
        .service(delete_account)
        .service(list_accounts)
        .service(active_account)
        .service(backup_data)
        .service(storage_stats)
        .service(clear_all_data)
        .service(system_test);
}

fn page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

#[get("/")]
async fn index() -> HttpResponse {
    page()
}

#[get("/index.html")]
async fn index_html() -> HttpResponse {
    page()
}

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/api/info")]
async fn info(state: web::Data<AppState>) -> ApiResult<ServerInfo> {
    Ok(web::Json(ApiResponse::success(ServerInfo {
        version: env!("CARGO_PKG_VERSION"),
        page_url: state.config.page_url(),
        port: state.config.port,
    })))
}

#[get("/api/operations")]
async fn operations() -> ApiResult<Vec<OperationInfo>> {
    let catalogue = Operation::ALL.into_iter().map(OperationInfo::from).collect();
    Ok(web::Json(ApiResponse::success(catalogue)))
}

#[get("/api/example")]
async fn example() -> ApiResult<CredentialRecord> {
    let record = CredentialRecord::example(Utc::now().timestamp_millis());
    Ok(web::Json(ApiResponse::success(record)))
}

#[post("/api/validate")]
async fn validate(state: web::Data<AppState>, body: web::Bytes) -> ApiResult<ValidationReport> {
    let record = state.accounts.validate(body_text(&body)?)?;
    Ok(web::Json(ApiResponse::success(ValidationReport::from(&record))))
}

#[post("/api/commands/add-account")]
async fn add_account(state: web::Data<AppState>, body: web::Bytes) -> ApiResult<CommandPayload> {
    command_response(state.accounts.add_account(body_text(&body)?).await?)
}

#[post("/api/commands/switch-account")]
async fn switch_account(
    state: web::Data<AppState>,
    req: web::Json<AccountIdentifierRequest>,
) -> ApiResult<CommandPayload> {
    command_response(state.accounts.switch_account(req.email.as_deref()).await?)
}

#[post("/api/commands/delete-account")]
async fn delete_account(
    state: web::Data<AppState>,
    req: web::Json<AccountIdentifierRequest>,
) -> ApiResult<CommandPayload> {
    command_response(state.accounts.delete_account(req.email.as_deref()).await?)
}

#[get("/api/commands/list")]
async fn list_accounts(state: web::Data<AppState>) -> ApiResult<CommandPayload> {
    command_response(state.accounts.list_accounts().await?)
}

#[get("/api/commands/active")]
async fn active_account(state: web::Data<AppState>) -> ApiResult<CommandPayload> {
    command_response(state.accounts.active_account().await?)
}

#[get("/api/commands/backup")]
async fn backup_data(state: web::Data<AppState>) -> ApiResult<CommandPayload> {
    command_response(state.accounts.backup_data().await?)
}

#[get("/api/commands/stats")]
async fn storage_stats(state: web::Data<AppState>) -> ApiResult<CommandPayload> {
    command_response(state.accounts.storage_stats().await?)
}

#[get("/api/commands/clear")]
async fn clear_all_data(state: web::Data<AppState>) -> ApiResult<CommandPayload> {
    command_response(state.accounts.clear_all_data().await?)
}

#[get("/api/commands/system-test")]
async fn system_test() -> ApiResult<CommandPayload> {
    command_response(CommandSynthesizer::system_test())
}
