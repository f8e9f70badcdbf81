use std::fmt;

use super::LanguageCode;

const KEY_PREFIX: &str = "translate";
const HASHED_PREFIX_UNITS: usize = 100;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Response cache key: `translate:{source}:{target}:{hash}`.
///
/// Only the first 100 UTF-16 code units of the text feed the hash, so two
/// texts sharing that prefix share a key. Collisions give a wrong cache hit,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn build(source_lang: LanguageCode, target_lang: LanguageCode, text: &str) -> Self {
        Self(format!(
            "{}:{}:{}:{}",
            KEY_PREFIX,
            source_lang,
            target_lang,
            text_hash(text)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `h = h * 31 + unit` over UTF-16 code units, wrapped to `i32`, then the
/// absolute value in base 36.
pub fn text_hash(text: &str) -> String {
    let hash = text
        .encode_utf16()
        .take(HASHED_PREFIX_UNITS)
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        });

    to_base36(i64::from(hash).unsigned_abs())
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    String::from_utf8_lossy(&digits).into_owned()
}
