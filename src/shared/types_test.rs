//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

use crate::shared::types::*;
use ts_rs::TS;

#[test]
fn export_bindings() {
    // Writes the TypeScript bindings consumed by ui/main.js tooling
    TranslateRequest::export().expect("Failed to export TranslateRequest");
    TranslateResponse::export().expect("Failed to export TranslateResponse");
    LogRequest::export().expect("Failed to export LogRequest");
}

#[test]
fn translate_request_round_trip() {
    let json = r#"{"text":"hello"}"#;
    let request: TranslateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.text, "hello");
    assert_eq!(serde_json::to_string(&request).unwrap(), json);
}

#[test]
fn translate_response_serializes_result_field() {
    let response = TranslateResponse {
        result: "Spanish: hola".to_string(),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["result"], "Spanish: hola");
}
