use log::trace;
use std::str::Split;

/// Characters that separate words. Carriage return is included so CRLF input
/// tokenizes like LF input.
pub const DELIMITERS: &[char] = &[
    ' ', '\t', '\n', '\r', '`', '?', '!', '\'', '"', ';', ',', '.', ':', '+', '-', '*', '&', '%',
    '(', ')', '{', '}', '[', ']', '<', '>', '\\',
];

pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Lazy, lowercased word tokens from a single line of text.
pub struct Tokens<'a> {
    parts: Split<'a, fn(char) -> bool>,
    max_len: usize,
    dropped: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str, max_len: usize) -> Self {
        Self {
            parts: line.split(is_delimiter as fn(char) -> bool),
            max_len,
            dropped: 0,
        }
    }

    /// Over-length tokens skipped so far.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for part in self.parts.by_ref() {
            if part.is_empty() {
                continue;
            }
            let len = part.chars().count();
            if len > self.max_len {
                trace!("dropping over-length token of {} chars", len);
                self.dropped += 1;
                continue;
            }
            return Some(part.to_lowercase());
        }
        None
    }
}

pub fn tokenize(line: &str, max_len: usize) -> Tokens<'_> {
    Tokens::new(line, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        tokenize(line, 31).collect()
    }

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        assert_eq!(words("dog, dog; dog!"), ["dog", "dog", "dog"]);
        assert_eq!(
            words("(a+b)*c\t{d}[e]<f>\\g`h?i'j\"k:l%m&n.o-p"),
            ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p"]
        );
    }

    #[test]
    fn lowercases_every_token() {
        assert_eq!(words("Cat cat CAT"), ["cat", "cat", "cat"]);
    }

    #[test]
    fn keeps_characters_outside_the_delimiter_set() {
        assert_eq!(words("e-mail foo_bar x/y #1"), ["e", "mail", "foo_bar", "x/y", "#1"]);
    }

    #[test]
    fn empty_and_delimiter_only_lines_yield_nothing() {
        assert!(words("").is_empty());
        assert!(words("  ,,; ...\n").is_empty());
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        assert_eq!(words("end of line\r\n"), ["end", "of", "line"]);
    }

    #[test]
    fn drops_tokens_over_the_length_limit() {
        let long = "a".repeat(40);
        let line = format!("short {} tail", long);
        let mut tokens = tokenize(&line, 31);
        assert_eq!(tokens.next().as_deref(), Some("short"));
        assert_eq!(tokens.next().as_deref(), Some("tail"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.dropped(), 1);
    }

    #[test]
    fn boundary_length_is_kept() {
        let exact = "b".repeat(31);
        assert_eq!(words(&exact), [exact.clone()]);
        assert!(words(&"b".repeat(32)).is_empty());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let accented = "é".repeat(20);
        assert_eq!(words(&accented).len(), 1);
    }
}
