//! In-memory `.dic` word-list reader (§4.10, ambient) — the concrete
//! [`Lookup`] backing used by the CLI and tests.
//!
//! Grounded on the teacher's `dictionary.rs`, with the flag-type-guessing
//! heuristics dropped: flags are always single bytes, matching §3's
//! `AffEntry::flag: u8`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::lookup::{Lookup, WordEntry};

#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    pub word: Vec<u8>,
    pub flags: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    index: HashMap<Vec<u8>, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse a `count` header followed by `word[/flags]` lines. A word
    /// repeated later in the file has its flags concatenated onto the first
    /// entry rather than replacing it or being deduplicated, matching the
    /// non-deduplicating duplicate-flag behavior noted in the Design Notes.
    pub fn parse(content: &str) -> Self {
        let mut lines = content.lines();
        let declared_count: usize = lines.next().and_then(|l| l.trim().parse().ok()).unwrap_or_else(|| {
            log::warn!("dictionary is missing a valid word-count header");
            0
        });

        let mut dict = Dictionary::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (word, flags) = match line.split_once('/') {
                Some((w, f)) => (w.as_bytes(), f.as_bytes().to_vec()),
                None => (line.as_bytes(), Vec::new()),
            };

            if let Some(&idx) = dict.index.get(word) {
                dict.entries[idx].flags.extend_from_slice(&flags);
            } else {
                let idx = dict.entries.len();
                dict.index.insert(word.to_vec(), idx);
                dict.entries.push(DictionaryEntry { word: word.to_vec(), flags });
            }
        }

        if dict.entries.len() != declared_count {
            log::warn!(
                "dictionary declares {declared_count} entries but {} distinct words were parsed",
                dict.entries.len()
            );
        }

        dict
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn get_entry(&self, word: &[u8]) -> Option<&DictionaryEntry> {
        self.index.get(word).map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lookup for Dictionary {
    fn lookup(&self, word: &[u8]) -> Option<WordEntry> {
        let entry = self.get_entry(word)?;
        Some(WordEntry { root: entry.word.clone(), affix_flags: entry.flags.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_and_flags() {
        let dict = Dictionary::parse("2\nbake/D\ncry/D\n");
        assert_eq!(dict.len(), 2);
        let entry = dict.get_entry(b"bake").unwrap();
        assert_eq!(entry.flags, b"D");
    }

    #[test]
    fn word_without_flags_has_none() {
        let dict = Dictionary::parse("1\nsimple\n");
        let entry = dict.get_entry(b"simple").unwrap();
        assert!(entry.flags.is_empty());
    }

    #[test]
    fn duplicate_word_concatenates_flags_without_dedup() {
        let dict = Dictionary::parse("2\nwalk/D\nwalk/D\n");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get_entry(b"walk").unwrap().flags, b"DD");
    }

    #[test]
    fn lookup_via_trait() {
        let dict = Dictionary::parse("1\nplay/D\n");
        let hit = Lookup::lookup(&dict, b"play").unwrap();
        assert_eq!(hit.root, b"play");
        assert_eq!(hit.affix_flags, b"D");
    }
}
