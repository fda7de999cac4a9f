//! Text normalization for titles and abstracts.

use std::collections::HashSet;
use std::io::{self, BufRead, BufReader, Read};

use crate::constants::normalizer::{BOUNDARY_CHARS, MIN_TOKEN_LEN, STRIPPED_CHARS};

/// Case-insensitive stopword set loaded from an external resource.
#[derive(Clone, Debug, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Build a stopword set from an iterator of words.
    ///
    /// Words are trimmed and lowercased; blank entries are dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Read a stopword set from a reader, one word per line.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let lines: Vec<String> = BufReader::new(reader).lines().collect::<Result<_, _>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Returns `true` when `word` is a stopword. Comparison is
    /// case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Normalize free text into a clean token stream.
///
/// Lowercases, strips the fixed punctuation class and digits, treats colons
/// and periods as token boundaries, then drops stopwords and tokens shorter
/// than two characters. Pure and idempotent: normalizing already-normalized
/// text is a no-op.
pub fn normalize(text: &str, stopwords: &Stopwords) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        if STRIPPED_CHARS.contains(&ch) || ch.is_ascii_digit() {
            continue;
        }
        if BOUNDARY_CHARS.contains(&ch) {
            cleaned.push(' ');
            continue;
        }
        cleaned.push(ch);
    }

    let tokens: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .filter(|token| !stopwords.contains(token))
        .collect();
    tokens.join(" ")
}
