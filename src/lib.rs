mod api;
mod core;
mod shared;

use tauri::Manager;
use tokio::sync::Mutex;

use crate::core::features::translator::view_model::TranslatorState;
use crate::core::features::translator::GoogleTranslator;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Store provider and view-model state for access from commands
            app.manage(GoogleTranslator::new());
            app.manage(Mutex::new(TranslatorState::default()));

            // Deferred focus-set: give the entry field its focus shortly
            // after the window appears (the webview focuses the field
            // itself once the window is frontmost).
            if let Some(window) = app.get_webview_window("main") {
                tauri::async_runtime::spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                    if let Err(e) = window.set_focus() {
                        eprintln!("Failed to focus main window: {}", e);
                    }
                });
            }

            println!("✅ Translation widget initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::commands::translator::translate_to_spanish,
            api::commands::translator::translate_to_english,
            api::commands::system::log_message,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start Tauri application: {}", e);
            std::process::exit(1);
        });
}
