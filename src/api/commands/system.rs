//! System command module
//!
//! Lets the webview log through the process stdout.

use crate::shared::error::AppResult;
use crate::shared::types::LogRequest;

#[tauri::command]
pub async fn log_message(request: LogRequest) -> AppResult<()> {
    println!("[{}] {}", request.level.to_uppercase(), request.message);
    Ok(())
}
