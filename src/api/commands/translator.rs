//! Translator command module
//!
//! IPC surface for the two buttons. Each command reads the entry
//! field's text at press time, runs the view-model action, and hands
//! the display string back to the webview.

use tauri::State;
use tokio::sync::Mutex;

use crate::core::features::translator::types::Direction;
use crate::core::features::translator::view_model::TranslatorState;
use crate::core::features::translator::GoogleTranslator;
use crate::shared::error::AppResult;
use crate::shared::types::{TranslateRequest, TranslateResponse};

#[tauri::command]
pub async fn translate_to_spanish(
    provider: State<'_, GoogleTranslator>,
    state: State<'_, Mutex<TranslatorState>>,
    request: TranslateRequest,
) -> AppResult<TranslateResponse> {
    run_action(&provider, &state, Direction::EnglishToSpanish, request).await
}

#[tauri::command]
pub async fn translate_to_english(
    provider: State<'_, GoogleTranslator>,
    state: State<'_, Mutex<TranslatorState>>,
    request: TranslateRequest,
) -> AppResult<TranslateResponse> {
    run_action(&provider, &state, Direction::SpanishToEnglish, request).await
}

// Remote failures are folded into the display string by the
// view-model, so the commands only ever answer Ok.
async fn run_action(
    provider: &GoogleTranslator,
    state: &Mutex<TranslatorState>,
    direction: Direction,
    request: TranslateRequest,
) -> AppResult<TranslateResponse> {
    let mut state = state.lock().await;
    state.input_text = request.text;
    let result = state.run_action(provider, direction).await.to_string();
    Ok(TranslateResponse { result })
}
