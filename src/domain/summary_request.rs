use super::LanguageCode;

/// A request that has passed input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub text: String,
    pub source_lang: LanguageCode,
    pub target_lang: LanguageCode,
}

impl SummaryRequest {
    pub fn new(text: String, source_lang: LanguageCode, target_lang: LanguageCode) -> Self {
        Self {
            text,
            source_lang,
            target_lang,
        }
    }
}
