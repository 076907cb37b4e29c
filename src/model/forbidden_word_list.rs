//! Forbidden word list (hh:forbiddenWordList)

/// Words that must not be split across line breaks (hh:forbiddenWordList).
///
/// The `itemCnt` attribute is derived from the word count on write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForbiddenWordList {
    words: Vec<String>,
}

impl ForbiddenWordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn add_word(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
