/// A sentence-aligned slice of input text sized for one summarization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
