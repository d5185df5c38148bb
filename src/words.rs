//! Dictionary normalization and the validated candidate list.
//!
//! Raw word lists arrive messy: mixed case, mixed lengths, words that
//! reuse a letter and can therefore never join a disjoint group. This
//! module filters all of that out up front and hands the rest of the crate
//! a list of candidates whose invariants (fixed length, all-distinct
//! letters) are checked exactly once.

use crate::mask::LetterMask;
use anyhow::{bail, Result};

/// Filter raw input down to candidate words.
///
/// Splits on whitespace, keeps tokens of exactly `word_length` characters,
/// lowercases them, and drops any token containing a non-letter or a
/// repeated letter. Input order is preserved; no duplicate or anagram
/// reduction is applied.
pub fn normalize_words(input: &str, word_length: usize) -> Vec<String> {
    input
        .split_whitespace()
        .filter(|token| token.len() == word_length)
        .map(|token| token.to_ascii_lowercase())
        .filter(|word| {
            word.bytes().all(|b| b.is_ascii_lowercase())
                && LetterMask::from_word(word).letter_count() == word_length
        })
        .collect()
}

/// The validated candidate list: words plus their cached letter masks.
///
/// A word's position in this list is its identity for the rest of the run;
/// the compatibility graph and every reported group refer to words by
/// index. The list is immutable after construction.
#[derive(Debug, Clone)]
pub struct Candidates {
    words: Vec<String>,
    masks: Vec<LetterMask>,
    word_length: usize,
}

impl Candidates {
    /// Build the candidate list, validating every word.
    ///
    /// Each word must be exactly `word_length` ASCII lowercase letters with
    /// no repeats. A violation is a caller bug, not recoverable input, so
    /// it fails here rather than poisoning the search invariants. An empty
    /// list is fine and simply yields no groups.
    pub fn new(words: Vec<String>, word_length: usize) -> Result<Self> {
        if word_length == 0 {
            bail!("word length must be at least 1");
        }
        let mut masks = Vec::with_capacity(words.len());
        for word in &words {
            if word.len() != word_length {
                bail!("word {word:?} does not have length {word_length}");
            }
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                bail!("word {word:?} contains a character outside a-z");
            }
            let mask = LetterMask::from_word(word);
            if mask.letter_count() != word_length {
                bail!("word {word:?} repeats a letter");
            }
            masks.push(mask);
        }
        Ok(Self {
            words,
            masks,
            word_length,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    pub fn mask(&self, index: usize) -> LetterMask {
        self.masks[index]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn masks(&self) -> &[LetterMask] {
        &self.masks
    }
}
