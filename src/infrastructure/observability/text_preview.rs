const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_PREFIXES: [(&str, &str); 5] = [
    ("Bearer ", "Bearer [REDACTED]"),
    ("api_key=", "api_key=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
    ("secret=", "secret=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
];

/// Log-safe rendering of user text: truncated, with credential-shaped
/// values redacted.
pub fn text_preview(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let preview = if total > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&preview)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let mut result = text.to_string();

    for (pattern, replacement) in SENSITIVE_PREFIXES {
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(pattern) {
            let start = search_from + offset;
            let value_start = start + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(start..end, replacement);
            search_from = start + replacement.len();
        }
    }

    result
}
