//! # Word Cliques
//!
//! A multithreaded exhaustive search for groups of letter-disjoint words.
//!
//! Every candidate word is encoded as a bitmask over the alphabet, a
//! compatibility graph links words that share no letter, and the search
//! enumerates every N-clique of that graph exactly once by intersecting
//! sorted neighbor lists along strictly increasing index paths.

pub mod graph;
pub mod mask;
pub mod report;
pub mod search;
pub mod words;

pub use graph::CompatibilityGraph;
pub use mask::LetterMask;
pub use search::{CliqueSearch, NullObserver, SearchObserver, SearchOutcome, SearchStats};
pub use words::{normalize_words, Candidates};

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Default word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of words per group
pub const DEFAULT_GROUP_SIZE: usize = 5;
