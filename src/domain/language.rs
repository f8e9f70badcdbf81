use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "es", "fr", "de", "it", "pt", "ru", "ja", "ko", "zh", "ar", "hi", "gu", "mr", "nl", "sv",
    "da", "no", "fi", "pl", "cs", "hu", "ro", "tr", "el", "he", "th", "vi", "id", "ms", "tl", "sw",
    "am", "eu", "be", "bg", "bn", "hr", "ca",
];

/// Languages some translation backends handle poorly, mapped to the closest
/// language they handle well.
pub const LANGUAGE_FALLBACKS: &[(&str, &str)] = &[("ca", "es"), ("eu", "es")];

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("gu", "Gujarati"),
    ("mr", "Marathi"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
    ("pl", "Polish"),
    ("cs", "Czech"),
    ("hu", "Hungarian"),
    ("ro", "Romanian"),
    ("tr", "Turkish"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("tl", "Tagalog"),
    ("sw", "Swahili"),
    ("am", "Amharic"),
    ("eu", "Basque"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("hr", "Croatian"),
    ("ca", "Catalan"),
];

/// A language code known to be in [`SUPPORTED_LANGUAGES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageCode(&'static str);

impl LanguageCode {
    pub const ENGLISH: LanguageCode = LanguageCode("en");

    /// Exact, case-sensitive membership check.
    pub fn parse(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|supported| **supported == code)
            .map(|supported| Self(*supported))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn is_english(&self) -> bool {
        *self == Self::ENGLISH
    }

    /// The code to hand to a translation backend.
    pub fn effective(&self) -> LanguageCode {
        LANGUAGE_FALLBACKS
            .iter()
            .find(|(from, _)| *from == self.0)
            .and_then(|(_, to)| Self::parse(to))
            .unwrap_or(*self)
    }

    pub fn display_name(&self) -> &'static str {
        LANGUAGE_NAMES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
            .unwrap_or(self.0)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("unsupported language code: {}", s))
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LanguageCode::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
