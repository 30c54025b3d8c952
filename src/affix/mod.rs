//! The affix rule store: two [`table::RuleTable`]s (prefixes, suffixes)
//! plus the `.aff` file parser that populates them.
//!
//! Grounded on `AffixMgr` in the original aspell `affix.cpp`/`affix.hpp`,
//! split across this crate's `condition`/`entry`/`table`/`parser` modules
//! instead of one monolithic manager class.

pub mod condition;
pub mod entry;
pub mod parser;
pub mod table;

use entry::AffixKind;
use table::RuleTable;

#[derive(Clone, Debug)]
pub struct AffixStore {
    prefixes: RuleTable,
    suffixes: RuleTable,
}

impl AffixStore {
    fn empty() -> Self {
        AffixStore {
            prefixes: RuleTable::new(AffixKind::Prefix),
            suffixes: RuleTable::new(AffixKind::Suffix),
        }
    }

    fn insert(&mut self, kind: AffixKind, entry: entry::AffEntry) {
        match kind {
            AffixKind::Prefix => self.prefixes.insert(entry),
            AffixKind::Suffix => self.suffixes.insert(entry),
        }
    }

    /// Wire the subset-traversal links. Must run once after parsing
    /// completes (§4.3, aspell's `process_pfx_order`/`process_sfx_order`).
    fn finish(&mut self) {
        self.prefixes.wire_subset_links();
        self.suffixes.wire_subset_links();
    }

    pub fn prefixes(&self) -> &RuleTable {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &RuleTable {
        &self.suffixes
    }

    pub fn prefix_entry_count(&self) -> usize {
        self.prefixes.flags().map(|f| self.prefixes.by_flag(f).count()).sum()
    }

    pub fn suffix_entry_count(&self) -> usize {
        self.suffixes.flags().map(|f| self.suffixes.by_flag(f).count()).sum()
    }

    pub fn table(&self, kind: AffixKind) -> &RuleTable {
        match kind {
            AffixKind::Prefix => &self.prefixes,
            AffixKind::Suffix => &self.suffixes,
        }
    }
}
