use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Payload of a translate command: the entry field's contents at press time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub struct TranslateRequest {
    pub text: String,
}

/// What the webview writes into the result label, verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub struct TranslateResponse {
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub struct LogRequest {
    pub level: String,
    pub message: String,
}
