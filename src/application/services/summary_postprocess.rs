use std::collections::HashSet;

use crate::domain::split_sentences;

const PREAMBLE_OPENERS: &[&str] = &[
    "here is",
    "here's",
    "sure",
    "certainly",
    "the following",
    "below is",
];
const SUMMARY_MARKERS: &[&str] = &["summar", "key points", "main points", "tl;dr"];
const SUMMARY_LABEL: &str = "summary:";

/// Drops an introductory line such as "Here is a summary of the text:" and a
/// leading "Summary:" label. A response that is nothing but preamble is kept.
pub fn strip_preamble(response: &str) -> String {
    let trimmed = response.trim();

    let body = match trimmed.split_once('\n') {
        Some((first, rest)) if is_preamble_line(first) && !rest.trim().is_empty() => rest.trim(),
        Some(_) => trimmed,
        None => strip_inline_preamble(trimmed),
    };

    strip_label(body).trim().to_string()
}

/// Removes repeated sentences (case-insensitive) keeping first occurrences
/// in order.
pub fn deduplicate_sentences(text: &str) -> String {
    let mut seen = HashSet::new();
    split_sentences(text)
        .into_iter()
        .filter(|sentence| seen.insert(sentence.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first `sentence_count` sentences of `text`.
pub fn naive_summary(text: &str, sentence_count: usize) -> String {
    split_sentences(text)
        .into_iter()
        .take(sentence_count)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Preamble stripping followed by deduplication.
pub fn clean_generated_summary(response: &str) -> String {
    deduplicate_sentences(&strip_preamble(response))
}

fn is_preamble_line(line: &str) -> bool {
    let lower = line.trim().to_lowercase();
    if lower.ends_with(':') {
        return starts_with_opener(&lower) || names_summary(&lower);
    }
    match opener_remainder(&lower) {
        Some(rest) => names_summary(rest) || rest.chars().all(|c| !c.is_alphanumeric()),
        None => false,
    }
}

/// Text after a leading opener, when the opener is followed by a word boundary.
fn opener_remainder(lower: &str) -> Option<&str> {
    PREAMBLE_OPENERS.iter().find_map(|opener| {
        let rest = lower.strip_prefix(opener)?;
        match rest.chars().next() {
            Some(c) if c.is_alphanumeric() => None,
            _ => Some(rest),
        }
    })
}

fn starts_with_opener(lower: &str) -> bool {
    opener_remainder(lower).is_some()
}

fn names_summary(lower: &str) -> bool {
    SUMMARY_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn strip_inline_preamble(line: &str) -> &str {
    let Some((prefix, rest)) = line.split_once(':') else {
        return line;
    };
    let prefix = prefix.to_lowercase();
    if starts_with_opener(&prefix) && names_summary(&prefix) && !rest.trim().is_empty() {
        rest.trim()
    } else {
        line
    }
}

fn strip_label(text: &str) -> &str {
    match text.get(..SUMMARY_LABEL.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(SUMMARY_LABEL) => &text[SUMMARY_LABEL.len()..],
        _ => text,
    }
}
