//! Indexed store for one affix class (all prefixes, or all suffixes).
//!
//! Mirrors aspell's `pStart`/`pFlag` (and `sStart`/`sFlag`) pair: entries are
//! indexed both by flag byte and by their sort key, with a subset-traversal
//! decision tree (`next_eq`/`next_ne`) wired over the key-sorted lists so a
//! search can skip whole runs of entries in O(word length) rather than
//! scanning every rule. The aspell source builds this out of raw-pointer
//! linked lists; here entries live in one `Vec` and links are indices into
//! it.

use std::collections::HashMap;

use crate::affix::entry::{AffEntry, AffixKind};

#[derive(Clone, Debug)]
pub struct RuleTable {
    kind: AffixKind,
    entries: Vec<AffEntry>,
    by_flag: HashMap<u8, Vec<usize>>,
    by_key: [Vec<usize>; 256],
    max_strip: usize,
    max_strip_by_flag: HashMap<u8, usize>,
}

impl RuleTable {
    pub fn new(kind: AffixKind) -> Self {
        RuleTable {
            kind,
            entries: Vec::new(),
            by_flag: HashMap::new(),
            by_key: std::array::from_fn(|_| Vec::new()),
            max_strip: 0,
            max_strip_by_flag: HashMap::new(),
        }
    }

    pub fn kind(&self) -> AffixKind {
        self.kind
    }

    pub fn entry(&self, idx: usize) -> &AffEntry {
        &self.entries[idx]
    }

    pub fn max_strip(&self) -> usize {
        self.max_strip
    }

    pub fn max_strip_for_flag(&self, flag: u8) -> usize {
        self.max_strip_by_flag.get(&flag).copied().unwrap_or(0)
    }

    pub fn flags(&self) -> impl Iterator<Item = u8> + '_ {
        self.by_flag.keys().copied()
    }

    /// Entries registered under `flag`, in head-first (most-recently
    /// inserted) order, matching aspell's insert-at-head `flag_next` chain.
    pub fn by_flag(&self, flag: u8) -> impl Iterator<Item = &AffEntry> {
        self.by_flag
            .get(&flag)
            .into_iter()
            .flatten()
            .map(move |&i| &self.entries[i])
    }

    /// Register a compiled entry. Updates both indexes; subset links are
    /// computed afterwards in a single [`Self::wire_subset_links`] pass once
    /// the whole file has been parsed.
    pub fn insert(&mut self, entry: AffEntry) {
        self.max_strip = self.max_strip.max(entry.strip.len());
        let slot = self.max_strip_by_flag.entry(entry.flag).or_insert(0);
        *slot = (*slot).max(entry.strip.len());

        let idx = self.entries.len();
        self.by_flag.entry(entry.flag).or_default().insert(0, idx);

        if entry.key.is_empty() {
            self.by_key[0].push(idx);
        } else {
            let bucket = &mut self.by_key[entry.key[0] as usize];
            let pos = bucket
                .binary_search_by(|&other| self.entries[other].key.as_slice().cmp(&entry.key))
                .unwrap_or_else(|p| p);
            bucket.insert(pos, idx);
        }

        self.entries.push(entry);
    }

    /// Compute `next_eq`/`next_ne` for every key-indexed entry. Must run
    /// once after all entries are inserted.
    pub fn wire_subset_links(&mut self) {
        for bucket_idx in 1..256 {
            let ids = self.by_key[bucket_idx].clone();
            for (j, &e) in ids.iter().enumerate() {
                let mut k = j + 1;
                while k < ids.len() && is_subset(&self.entries[e].key, &self.entries[ids[k]].key) {
                    k += 1;
                }
                self.entries[e].next_ne = ids.get(k).copied();
                self.entries[e].next_eq = if j + 1 < ids.len()
                    && is_subset(&self.entries[e].key, &self.entries[ids[j + 1]].key)
                {
                    Some(ids[j + 1])
                } else {
                    None
                };
            }

            // Tightening pass: a maximal run of supersets terminates the
            // search, so the last entry of each run clears next_ne.
            for (j, &e) in ids.iter().enumerate() {
                let mut k = j + 1;
                let mut last_superset = None;
                while k < ids.len() && is_subset(&self.entries[e].key, &self.entries[ids[k]].key) {
                    last_superset = Some(ids[k]);
                    k += 1;
                }
                if let Some(m) = last_superset {
                    self.entries[m].next_ne = None;
                }
            }
        }
    }

    /// Entries with an empty key (slot 0), tried unconditionally.
    pub fn zero_length_entries(&self) -> impl Iterator<Item = &AffEntry> {
        self.by_key[0].iter().map(move |&i| &self.entries[i])
    }

    /// Walk the subset-ordered list for `search_word`'s bucket, applying
    /// `probe` to every entry whose key is a leading subset of
    /// `search_word`, stopping as soon as `probe` returns `Some`.
    pub fn search<T>(&self, search_word: &[u8], mut probe: impl FnMut(&AffEntry) -> Option<T>) -> Option<T> {
        let &first = search_word.first()?;
        let mut cur = self.by_key[first as usize].first().copied();
        while let Some(idx) = cur {
            let entry = &self.entries[idx];
            if is_subset(&entry.key, search_word) {
                if let Some(found) = probe(entry) {
                    return Some(found);
                }
                cur = entry.next_eq;
            } else {
                cur = entry.next_ne;
            }
        }
        None
    }

    /// Like [`Self::search`], but visits every matching entry instead of
    /// stopping at the first one `f` accepts. Used by munch (§4.6), which
    /// enumerates every decomposition rather than the first.
    pub fn for_each_matching(&self, search_word: &[u8], mut f: impl FnMut(&AffEntry)) {
        let Some(&first) = search_word.first() else { return };
        let mut cur = self.by_key[first as usize].first().copied();
        while let Some(idx) = cur {
            let entry = &self.entries[idx];
            if is_subset(&entry.key, search_word) {
                f(entry);
                cur = entry.next_eq;
            } else {
                cur = entry.next_ne;
            }
        }
    }
}

/// Returns true iff `a` is a leading subset of `b`: `b` starts with all of
/// `a`'s bytes (aspell's `isSubset`).
fn is_subset(a: &[u8], b: &[u8]) -> bool {
    a.len() <= b.len() && b[..a.len()] == *a
}
