pub mod affix;
pub mod checker;
pub mod dictionary;
pub mod editdist;
pub mod error;
pub mod expander;
pub mod lookup;

pub use affix::AffixStore;
pub use checker::{affix_check, get_word, munch, CasePattern};
pub use dictionary::Dictionary;
pub use editdist::{limit1_edit_distance, limit2_edit_distance, DistanceResult, Weights};
pub use error::{AffixError, Result};
pub use expander::{expand, ExpansionResult};
pub use lookup::{AlwaysTrue, Lookup, WordEntry};

use std::path::Path;

/// Orchestrates an [`AffixStore`] with a [`Dictionary`] lookup, mirroring
/// the role the teacher's `Runmunch` struct played over its flat
/// `AffixFile`/`Dictionary` pair.
pub struct Runmunch {
    affix_store: Option<AffixStore>,
    dictionary: Option<Dictionary>,
}

impl Runmunch {
    pub fn new() -> Self {
        Runmunch { affix_store: None, dictionary: None }
    }

    pub fn load_affix_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.affix_store = Some(AffixStore::load(path)?);
        Ok(())
    }

    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.dictionary = Some(Dictionary::load(path)?);
        Ok(())
    }

    pub fn check(&self, word: &[u8]) -> Result<Option<checker::CheckInfo>> {
        let store = self.affix_store.as_ref().ok_or(AffixError::NoAffixFile)?;
        let dict = self.dictionary.as_ref().ok_or(AffixError::NoDictionary)?;
        Ok(affix_check(store, dict, word))
    }

    pub fn unmunch(&self, limit: Option<usize>) -> Result<Vec<Vec<u8>>> {
        let store = self.affix_store.as_ref().ok_or(AffixError::NoAffixFile)?;
        let dict = self.dictionary.as_ref().ok_or(AffixError::NoDictionary)?;

        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for entry in dict.entries() {
            for result in expand(store, &entry.word, &entry.flags, limit) {
                if seen.insert(result.surface.clone()) {
                    out.push(result.surface);
                }
            }
        }
        Ok(out)
    }
}

impl Default for Runmunch {
    fn default() -> Self {
        Self::new()
    }
}
