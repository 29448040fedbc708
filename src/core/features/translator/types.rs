use isolang::Language;

fn lang_code(lang: Language) -> String {
    lang.to_639_1()
        .map(|c| c.to_string())
        .unwrap_or_else(|| lang.to_639_3().to_string())
}

/// The two fixed translation directions, selected by which button was
/// pressed. Never user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    EnglishToSpanish,
    SpanishToEnglish,
}

impl Direction {
    pub fn source(self) -> Language {
        match self {
            Direction::EnglishToSpanish => Language::Eng,
            Direction::SpanishToEnglish => Language::Spa,
        }
    }

    pub fn target(self) -> Language {
        match self {
            Direction::EnglishToSpanish => Language::Spa,
            Direction::SpanishToEnglish => Language::Eng,
        }
    }

    /// ISO 639-1 code of the source language, as sent on the wire.
    pub fn source_code(self) -> String {
        lang_code(self.source())
    }

    /// ISO 639-1 code of the target language, as sent on the wire.
    pub fn target_code(self) -> String {
        lang_code(self.target())
    }

    /// Display name of the target language, used as the result prefix.
    pub fn target_name(self) -> &'static str {
        match self {
            Direction::EnglishToSpanish => "Spanish",
            Direction::SpanishToEnglish => "English",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct TranslationResponse {
    pub translated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_language_codes() {
        assert_eq!(Direction::EnglishToSpanish.source_code(), "en");
        assert_eq!(Direction::EnglishToSpanish.target_code(), "es");
        assert_eq!(Direction::SpanishToEnglish.source_code(), "es");
        assert_eq!(Direction::SpanishToEnglish.target_code(), "en");
    }

    #[test]
    fn direction_target_names() {
        assert_eq!(Direction::EnglishToSpanish.target_name(), "Spanish");
        assert_eq!(Direction::SpanishToEnglish.target_name(), "English");
    }
}
