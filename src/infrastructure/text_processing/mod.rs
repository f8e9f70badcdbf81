mod sentence_chunker;

pub use sentence_chunker::SentenceChunker;
