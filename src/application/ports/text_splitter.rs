use crate::domain::Chunk;

pub trait TextSplitter: Send + Sync {
    /// Splits `text` into ordered chunks of at most `max_chunk_size` chars,
    /// except where a single sentence is longer on its own.
    fn split(&self, text: &str, max_chunk_size: usize) -> Vec<Chunk>;
}
