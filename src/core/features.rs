//! Feature layer: the translation adapter and its view-model.

use crate::shared::error::AppResult;
use async_trait::async_trait;

pub mod translator;

use translator::types::{TranslationRequest, TranslationResponse};

/// Seam between the view-model and the remote translation service.
///
/// Production uses [`translator::GoogleTranslator`]; tests substitute a
/// deterministic provider.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Perform one blocking textual translation for the request's
    /// fixed source/target language pair.
    async fn translate(&self, request: TranslationRequest) -> AppResult<TranslationResponse>;
}
