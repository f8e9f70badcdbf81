use regex::{Captures, Regex, RegexBuilder};

const PLACEHOLDER_PATTERN: &str = r"__PROTECTED_(\d+)__";

#[derive(Debug, thiserror::Error)]
pub enum ProtectedTermError {
    #[error("invalid protected vocabulary: {0}")]
    InvalidVocabulary(#[from] regex::Error),
}

/// Original spellings of the terms replaced by one `protect` call, indexed by
/// placeholder number. Lives only for the duration of one translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedTermMap {
    originals: Vec<String>,
}

impl ProtectedTermMap {
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.originals.get(index).map(String::as_str)
    }

    /// Placeholder/original pairs in substitution order.
    pub fn entries(&self) -> impl Iterator<Item = (String, &str)> {
        self.originals
            .iter()
            .enumerate()
            .map(|(index, original)| (placeholder(index), original.as_str()))
    }

    fn push(&mut self, original: &str) -> String {
        let token = placeholder(self.originals.len());
        self.originals.push(original.to_string());
        token
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedText {
    pub text: String,
    pub terms: ProtectedTermMap,
}

pub fn placeholder(index: usize) -> String {
    format!("__PROTECTED_{}__", index)
}

/// Swaps vocabulary terms for placeholders before translation and puts the
/// original spelling back afterwards.
///
/// Matching is whole-word and case-insensitive. Longer terms are tried first
/// so "Louis Vuitton" is not split by a shorter entry.
pub struct ProtectedTermGuard {
    vocabulary_size: usize,
    matcher: Option<Regex>,
    placeholder: Regex,
}

impl ProtectedTermGuard {
    pub fn new<S: AsRef<str>>(vocabulary: &[S]) -> Result<Self, ProtectedTermError> {
        let mut terms: Vec<&str> = vocabulary
            .iter()
            .map(|term| term.as_ref().trim())
            .filter(|term| !term.is_empty())
            .collect();
        terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        terms.dedup();

        let matcher = if terms.is_empty() {
            None
        } else {
            let alternation = terms
                .iter()
                .map(|term| regex::escape(term))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
                    .case_insensitive(true)
                    .size_limit(32 * 1024 * 1024)
                    .build()?,
            )
        };

        let placeholder = RegexBuilder::new(PLACEHOLDER_PATTERN)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            vocabulary_size: terms.len(),
            matcher,
            placeholder,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    pub fn protect(&self, text: &str) -> ProtectedText {
        let mut terms = ProtectedTermMap::default();

        let Some(matcher) = &self.matcher else {
            return ProtectedText {
                text: text.to_string(),
                terms,
            };
        };

        let replaced = matcher
            .replace_all(text, |caps: &Captures<'_>| terms.push(&caps[0]))
            .into_owned();

        ProtectedText {
            text: replaced,
            terms,
        }
    }

    /// Placeholders whose index is not in `terms` are left untouched.
    pub fn restore(&self, text: &str, terms: &ProtectedTermMap) -> String {
        if terms.is_empty() {
            return text.to_string();
        }

        self.placeholder
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| terms.get(index))
                    .unwrap_or(&caps[0])
                    .to_string()
            })
            .into_owned()
    }
}
