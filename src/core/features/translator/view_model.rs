//! Translator view-model
//!
//! The state the window displays, plus the pure request-building and
//! formatting functions. The UI binding (commands + webview) holds no
//! translation logic of its own.

use super::super::TranslationProvider;
use super::types::{Direction, TranslationRequest};
use crate::shared::error::AppError;

/// Shown when the entry field is empty at press time. Literal
/// emptiness only; the input is not trimmed first.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter text!";

#[derive(Debug, Clone, Default)]
pub struct TranslatorState {
    pub input_text: String,
    pub result_text: String,
}

/// Build the remote request for one button press, or `None` when the
/// input is empty and the placeholder applies.
pub fn build_request(direction: Direction, input: &str) -> Option<TranslationRequest> {
    if input.is_empty() {
        return None;
    }
    Some(TranslationRequest {
        text: input.to_string(),
        direction,
    })
}

pub fn format_result(direction: Direction, translated: &str) -> String {
    format!("{}: {}", direction.target_name(), translated)
}

/// Remote-failure policy: surface the failure in the result label
/// instead of leaving the press without visible effect.
pub fn format_failure(error: &AppError) -> String {
    format!("Translation failed: {}", error)
}

impl TranslatorState {
    /// Run one button press against the provider and update
    /// `result_text`. The result is non-empty on every path.
    pub async fn run_action<P: TranslationProvider + ?Sized>(
        &mut self,
        provider: &P,
        direction: Direction,
    ) -> &str {
        self.result_text = match build_request(direction, &self.input_text) {
            None => EMPTY_INPUT_MESSAGE.to_string(),
            Some(request) => match provider.translate(request).await {
                Ok(response) => format_result(direction, &response.translated),
                Err(error) => {
                    eprintln!("[Translator] {}", error);
                    format_failure(&error)
                }
            },
        };
        &self.result_text
    }
}
