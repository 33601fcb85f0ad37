/// Longest token, in characters, that still counts as a word.
pub const DEFAULT_MAX_WORD_LEN: usize = 31;

/// How many words the report lists when no count is given.
pub const DEFAULT_TOP_N: usize = 10;

/// Limits applied while counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountConfig {
    /// Tokens longer than this are dropped without being counted.
    pub max_word_len: usize,
    /// Optional cap on distinct words; `None` lets the table grow freely.
    pub max_unique: Option<usize>,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            max_unique: None,
        }
    }
}
