//! A single compiled prefix or suffix rule.

use crate::affix::condition::Conditions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

/// One `PFX`/`SFX` entry line, compiled.
///
/// `key` is `append` for a prefix and `append` reversed for a suffix; it is
/// the sort/search key used by [`super::table::RuleTable`].
#[derive(Clone, Debug)]
pub struct AffEntry {
    pub flag: u8,
    pub strip: Vec<u8>,
    pub append: Vec<u8>,
    pub key: Vec<u8>,
    pub conds: Conditions,
    pub cross_product: bool,
    pub next_eq: Option<usize>,
    pub next_ne: Option<usize>,
}

impl AffEntry {
    pub fn new(
        kind: AffixKind,
        flag: u8,
        strip: Vec<u8>,
        append: Vec<u8>,
        conds: Conditions,
        cross_product: bool,
    ) -> Self {
        let key = match kind {
            AffixKind::Prefix => append.clone(),
            AffixKind::Suffix => append.iter().rev().copied().collect(),
        };
        AffEntry { flag, strip, append, key, conds, cross_product, next_eq: None, next_ne: None }
    }

    /// Reconstruct the candidate root for `word` under this rule, enforcing
    /// the length and condition-count guards before any byte-class test.
    ///
    /// Returns `None` if the rule cannot possibly apply (word too short).
    pub fn strip_candidate(&self, kind: AffixKind, word: &[u8]) -> Option<Vec<u8>> {
        let tmpl = word.len().checked_sub(self.append.len())?;
        if tmpl == 0 || tmpl + self.strip.len() < self.conds.num_conds() {
            return None;
        }
        let mut tmp = match kind {
            AffixKind::Prefix => {
                let mut v = self.strip.clone();
                v.extend_from_slice(&word[self.append.len()..]);
                v
            }
            AffixKind::Suffix => {
                let mut v = word[..tmpl].to_vec();
                v.extend_from_slice(&self.strip);
                v
            }
        };
        tmp.shrink_to_fit();
        Some(tmp)
    }

    /// Test the condition bitmap against the reconstructed root, reading
    /// from the front for prefixes and from the back for suffixes.
    pub fn conds_match(&self, kind: AffixKind, tmp: &[u8]) -> bool {
        let n = self.conds.num_conds();
        if tmp.len() < n {
            return false;
        }
        match kind {
            AffixKind::Prefix => self.conds.matches(&tmp[..n]),
            // The condition pattern is written left-to-right over the tail
            // of the word it matches, so no byte reversal is needed here —
            // only the slice window shifts to the end.
            AffixKind::Suffix => self.conds.matches(&tmp[tmp.len() - n..]),
        }
    }

    /// `PfxEntry::add` / `SfxEntry::add`: apply the rule directly to a root,
    /// without consulting a dictionary. Used by the expander (§4.7).
    ///
    /// `limit`, when `Some`, makes a suffix application that would shorten
    /// the word below it report as "consumed but not applied" (the `EMPTY`
    /// sentinel in the original source) by returning `Some(None)` instead of
    /// `None` (no match at all).
    pub fn apply_bounded(
        &self,
        kind: AffixKind,
        word: &[u8],
        limit: Option<usize>,
    ) -> Option<Option<Vec<u8>>> {
        if word.len() <= self.strip.len() || word.len() < self.conds.num_conds() {
            return None;
        }
        let matches = match kind {
            AffixKind::Prefix => self.conds.matches(&word[..self.conds.num_conds()]),
            AffixKind::Suffix => {
                let n = self.conds.num_conds();
                self.conds.matches(&word[word.len() - n..])
            }
        };
        if !matches {
            return None;
        }
        match kind {
            AffixKind::Prefix => {
                let mut out = self.append.clone();
                out.extend_from_slice(&word[self.strip.len()..]);
                Some(Some(out))
            }
            AffixKind::Suffix => {
                let alen = word.len() - self.strip.len();
                if let Some(limit) = limit {
                    if alen >= limit {
                        return Some(None);
                    }
                }
                let mut out = word[..alen].to_vec();
                out.extend_from_slice(&self.append);
                Some(Some(out))
            }
        }
    }
}
