use serde::{Deserialize, Serialize};

use super::LanguageCode;

/// The unit returned to the caller and stored in the response cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub translated: String,
    pub target_language: LanguageCode,
}

impl SummaryResult {
    pub fn new(summary: String, translated: String, target_language: LanguageCode) -> Self {
        Self {
            summary,
            translated,
            target_language,
        }
    }
}
