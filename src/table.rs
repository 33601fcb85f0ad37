use crate::config::CountConfig;
use crate::error::{Result, WordFreqError};
use fnv::FnvHashMap;

/// A distinct word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub text: String,
    pub count: usize,
}

/// Occurrence counts keyed by normalized word, enumerable in first-seen order.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    index: FnvHashMap<String, usize>,
    records: Vec<WordRecord>,
    total: usize,
    dropped: usize,
    max_unique: Option<usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &CountConfig) -> Self {
        Self {
            max_unique: config.max_unique,
            ..Self::default()
        }
    }

    /// Counts one occurrence of an already normalized word.
    ///
    /// Fails when the word is new and the table already holds `max_unique`
    /// distinct words; the table is left unchanged in that case.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        if let Some(&slot) = self.index.get(word) {
            self.records[slot].count += 1;
            self.total += 1;
            return Ok(());
        }

        if let Some(limit) = self.max_unique {
            if self.records.len() >= limit {
                return Err(WordFreqError::CapacityExceeded { limit });
            }
        }

        self.index.insert(word.to_string(), self.records.len());
        self.records.push(WordRecord {
            text: word.to_string(),
            count: 1,
        });
        self.total += 1;
        Ok(())
    }

    pub(crate) fn note_dropped(&mut self, n: usize) {
        self.dropped += n;
    }

    pub fn total_words(&self) -> usize {
        self.total
    }

    pub fn unique_words(&self) -> usize {
        self.records.len()
    }

    /// Over-length tokens skipped while filling the table.
    pub fn dropped_words(&self) -> usize {
        self.dropped
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&slot| self.records[slot].count)
    }

    /// Records in the order their words first appeared.
    pub fn records(&self) -> impl Iterator<Item = &WordRecord> {
        self.records.iter()
    }
}
