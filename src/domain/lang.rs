// Source/target language detection

/// Number of leading characters inspected by `detect`
pub const DETECT_WINDOW: usize = 20;

/// Translation direction supported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguagePair {
    /// English → Japanese
    EnJa,
    /// Japanese → English
    JaEn,
}

impl LanguagePair {
    pub fn model_id(&self) -> &'static str {
        match self {
            LanguagePair::EnJa => "en-ja",
            LanguagePair::JaEn => "ja-en",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            LanguagePair::EnJa => "en",
            LanguagePair::JaEn => "ja",
        }
    }

    pub fn target(&self) -> &'static str {
        match self {
            LanguagePair::EnJa => "ja",
            LanguagePair::JaEn => "en",
        }
    }
}

/// Guess the translation direction from the first characters of `text`.
///
/// Any non-ASCII character within the first `DETECT_WINDOW` characters is
/// taken as Japanese input. Everything else, including empty text, is
/// treated as English.
pub fn detect(text: &str) -> LanguagePair {
    if text.chars().take(DETECT_WINDOW).any(|c| !c.is_ascii()) {
        LanguagePair::JaEn
    } else {
        LanguagePair::EnJa
    }
}
