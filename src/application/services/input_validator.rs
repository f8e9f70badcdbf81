use crate::domain::{LanguageCode, SummaryRequest};

pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5000;

/// Untyped request fields as they arrived. `None` covers both a missing field
/// and a field that was not a JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSummaryInput<'a> {
    pub text: Option<&'a str>,
    pub source_lang: Option<&'a str>,
    pub target_lang: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Text parameter is required and cannot be empty")]
    MissingText,
    #[error("Text exceeds maximum length of {max} characters")]
    TextTooLong { max: usize },
    #[error("Invalid source language provided")]
    InvalidSourceLanguage,
    #[error("Invalid target language provided")]
    InvalidTargetLanguage,
    #[error("Content-Type must be application/json")]
    UnsupportedContentType,
    #[error("Request body must be a JSON object")]
    MalformedBody,
}

#[derive(Debug, Clone)]
pub struct InputValidator {
    max_text_length: usize,
}

impl InputValidator {
    pub fn new(max_text_length: usize) -> Self {
        Self { max_text_length }
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    /// Checks run in a fixed order (text, length, source, target); the first
    /// failure is the one reported. Length is counted in chars.
    pub fn validate(&self, input: RawSummaryInput<'_>) -> Result<SummaryRequest, ValidationError> {
        let text = input
            .text
            .filter(|text| !text.trim().is_empty())
            .ok_or(ValidationError::MissingText)?;

        if text.chars().count() > self.max_text_length {
            return Err(ValidationError::TextTooLong {
                max: self.max_text_length,
            });
        }

        let source_lang = input
            .source_lang
            .and_then(LanguageCode::parse)
            .ok_or(ValidationError::InvalidSourceLanguage)?;

        let target_lang = input
            .target_lang
            .and_then(LanguageCode::parse)
            .ok_or(ValidationError::InvalidTargetLanguage)?;

        Ok(SummaryRequest::new(
            text.to_string(),
            source_lang,
            target_lang,
        ))
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_LENGTH)
    }
}
