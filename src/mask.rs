//! Letter masks for words.
//!
//! A mask has one bit set per distinct letter present in a word, so two
//! words share a letter if and only if the bitwise AND of their masks is
//! nonzero. This is the O(1) disjointness test the whole search rests on.

use crate::ALPHABET_SIZE;

/// A bitmask over the lowercase ASCII alphabet, one bit per letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterMask(pub u32);

impl LetterMask {
    /// The mask with no letters set
    pub const EMPTY: Self = Self(0);

    /// Encode a word as its letter mask.
    ///
    /// Pure function of the word; repeated letters collapse onto the same
    /// bit, so a word with an internal repeat produces a mask with fewer
    /// set bits than its length. Callers that need exactly one bit per
    /// character must validate with [`LetterMask::letter_count`], which
    /// [`crate::Candidates::new`] does once at construction.
    ///
    /// Precondition: every character is ASCII lowercase `a`..=`z`.
    pub fn from_word(word: &str) -> Self {
        let mut bits = 0u32;
        for b in word.bytes() {
            debug_assert!(b.is_ascii_lowercase());
            bits |= 1 << (b - b'a') as u32;
        }
        Self(bits)
    }

    /// True if the two words behind these masks share no letter
    pub fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Mask containing the letters of both words
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Number of distinct letters in the mask
    pub fn letter_count(self) -> usize {
        debug_assert!(self.0 < 1 << ALPHABET_SIZE);
        self.0.count_ones() as usize
    }
}

impl std::fmt::Display for LetterMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..ALPHABET_SIZE as u32 {
            if self.0 & (1 << i) != 0 {
                write!(f, "{}", (b'a' + i as u8) as char)?;
            }
        }
        Ok(())
    }
}
