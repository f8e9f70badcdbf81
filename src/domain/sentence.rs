use unicode_segmentation::UnicodeSegmentation;

const TERMINATORS: [&str; 3] = [".", "!", "?"];
const CLOSERS: [&str; 6] = ["\"", "'", ")", "\u{201D}", "\u{2019}", "]"];

/// Splits text into trimmed sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
/// brackets) that is followed by whitespace or the end of the text. Trailing
/// text without a terminator is returned as a final sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut graphemes = text.grapheme_indices(true).peekable();

    while let Some((idx, grapheme)) = graphemes.next() {
        if !TERMINATORS.contains(&grapheme) {
            continue;
        }

        let mut end = idx + grapheme.len();
        while let Some(&(next_idx, next)) = graphemes.peek() {
            if TERMINATORS.contains(&next) || CLOSERS.contains(&next) {
                end = next_idx + next.len();
                graphemes.next();
            } else {
                break;
            }
        }

        let at_boundary = graphemes
            .peek()
            .is_none_or(|(_, next)| next.chars().all(char::is_whitespace));
        if at_boundary {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
