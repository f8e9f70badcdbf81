use crate::application::ports::TextSplitter;
use crate::domain::{Chunk, split_sentences};

/// Packs whole sentences into chunks. Sentences inside one chunk are joined
/// with a single space; a sentence longer than the budget gets a chunk of its
/// own and is never cut.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceChunker;

impl SentenceChunker {
    pub fn new() -> Self {
        Self
    }
}

impl TextSplitter for SentenceChunker {
    fn split(&self, text: &str, max_chunk_size: usize) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for sentence in split_sentences(text) {
            let sentence_len = sentence.chars().count();

            if !current.is_empty() && current_len + 1 + sentence_len > max_chunk_size {
                chunks.push(Chunk::new(chunks.len(), std::mem::take(&mut current)));
                current_len = 0;
            }

            if !current.is_empty() {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(sentence);
            current_len += sentence_len;
        }

        if !current.is_empty() {
            chunks.push(Chunk::new(chunks.len(), current));
        }

        chunks
    }
}
