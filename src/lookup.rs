//! Abstraction over the dictionary tier the affix checker consults.
//!
//! Grounded on aspell's `LookupInfo`: a handle with three modes (exact word,
//! soundslike, "always true"). Concrete dictionaries only need to implement
//! [`Lookup::lookup`]; the other two methods default to the common case.

/// A dictionary hit: the root word as stored, plus the flag set it was
/// registered under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub root: Vec<u8>,
    pub affix_flags: Vec<u8>,
}

pub trait Lookup {
    /// Exact lookup of a stripped candidate root.
    fn lookup(&self, word: &[u8]) -> Option<WordEntry>;

    /// Approximate / phonetic-key lookup; most backends have no soundslike
    /// index and can leave this at its default (empty).
    fn soundslike_lookup(&self, _word: &[u8]) -> Vec<WordEntry> {
        Vec::new()
    }

    /// "Always true" mode: every candidate is accepted regardless of
    /// dictionary contents or required flag. Used by [`crate::checker::munch`]
    /// to enumerate every decomposition the rule set can explain.
    fn accepts_anything(&self) -> bool {
        false
    }
}

/// The "always true" `LookupInfo` mode.
pub struct AlwaysTrue;

impl Lookup for AlwaysTrue {
    fn lookup(&self, word: &[u8]) -> Option<WordEntry> {
        Some(WordEntry { root: word.to_vec(), affix_flags: Vec::new() })
    }

    fn accepts_anything(&self) -> bool {
        true
    }
}
