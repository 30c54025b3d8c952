//! Case-pattern handling, the affix checker, `get_word` reconstruction, and
//! munch.
//!
//! Grounded on aspell's `affix.cpp` (`affix_check`, `prefix_check`,
//! `suffix_check`, `get_word`) and `affentry.cpp` (`PfxEntry::check`,
//! `SfxEntry::check`).

use crate::affix::entry::{AffEntry, AffixKind};
use crate::affix::AffixStore;
use crate::lookup::{AlwaysTrue, Lookup};

/// Surface-form case pattern (§4.5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CasePattern {
    AllLower,
    FirstUpper,
    AllUpper,
    /// Mixed case; treated as lower for matching, preserved verbatim on
    /// reconstruction (no case is reapplied).
    Mixed,
}

impl CasePattern {
    pub fn classify(word: &[u8]) -> Self {
        let upper = word.iter().filter(|b| b.is_ascii_uppercase()).count();
        let lower = word.iter().filter(|b| b.is_ascii_lowercase()).count();
        match (upper, lower) {
            (0, _) => CasePattern::AllLower,
            (_, 0) => CasePattern::AllUpper,
            _ if word.first().is_some_and(|b| b.is_ascii_uppercase())
                && word[1..].iter().all(|b| !b.is_ascii_uppercase()) =>
            {
                CasePattern::FirstUpper
            }
            _ => CasePattern::Mixed,
        }
    }
}

/// One prefix or suffix application recorded in a [`CheckInfo`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffixApplication {
    pub flag: u8,
    pub strip: Vec<u8>,
    pub append: Vec<u8>,
}

/// Result of a successful affix check: the dictionary root plus up to one
/// prefix and one suffix application.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub root: Vec<u8>,
    pub prefix: Option<AffixApplication>,
    pub suffix: Option<AffixApplication>,
}

fn to_application(entry: &AffEntry) -> AffixApplication {
    AffixApplication { flag: entry.flag, strip: entry.strip.clone(), append: entry.append.clone() }
}

/// `affix_check(word) -> Option<CheckInfo>` (§4.4).
pub fn affix_check(store: &AffixStore, lookup: &dyn Lookup, word: &[u8]) -> Option<CheckInfo> {
    log::trace!("affix_check: {}", String::from_utf8_lossy(word));
    let pattern = CasePattern::classify(word);

    let pfx_word = match pattern {
        CasePattern::AllUpper => word.to_ascii_lowercase(),
        CasePattern::FirstUpper => {
            let mut w = word.to_vec();
            if let Some(b) = w.first_mut() {
                *b = b.to_ascii_lowercase();
            }
            w
        }
        _ => word.to_vec(),
    };
    if let Some(ci) = prefix_check(store, lookup, &pfx_word) {
        return Some(ci);
    }

    let sfx_word = match pattern {
        CasePattern::AllUpper => word.to_ascii_lowercase(),
        _ => word.to_vec(),
    };
    suffix_check(store, lookup, &sfx_word, None)
}

fn prefix_check(store: &AffixStore, lookup: &dyn Lookup, word: &[u8]) -> Option<CheckInfo> {
    let table = store.prefixes();
    for entry in table.zero_length_entries() {
        if let Some(ci) = check_prefix_entry(entry, store, lookup, word) {
            return Some(ci);
        }
    }
    table.search(word, |entry| check_prefix_entry(entry, store, lookup, word))
}

fn check_prefix_entry(
    entry: &AffEntry,
    store: &AffixStore,
    lookup: &dyn Lookup,
    word: &[u8],
) -> Option<CheckInfo> {
    let tmp = entry.strip_candidate(AffixKind::Prefix, word)?;
    if !entry.conds_match(AffixKind::Prefix, &tmp) {
        return None;
    }

    if let Some(hit) = lookup.lookup(&tmp) {
        if lookup.accepts_anything() || hit.affix_flags.contains(&entry.flag) {
            return Some(CheckInfo { root: tmp, prefix: Some(to_application(entry)), suffix: None });
        }
    }

    if entry.cross_product {
        if let Some(mut ci) = suffix_check(store, lookup, &tmp, Some(entry)) {
            ci.prefix = Some(to_application(entry));
            return Some(ci);
        }
    }

    None
}

fn suffix_check(
    store: &AffixStore,
    lookup: &dyn Lookup,
    word: &[u8],
    paired_prefix: Option<&AffEntry>,
) -> Option<CheckInfo> {
    let table = store.suffixes();
    for entry in table.zero_length_entries() {
        if let Some(ci) = check_suffix_entry(entry, lookup, word, paired_prefix) {
            return Some(ci);
        }
    }
    let mut rev = word.to_vec();
    rev.reverse();
    table.search(&rev, |entry| check_suffix_entry(entry, lookup, word, paired_prefix))
}

fn check_suffix_entry(
    entry: &AffEntry,
    lookup: &dyn Lookup,
    word: &[u8],
    paired_prefix: Option<&AffEntry>,
) -> Option<CheckInfo> {
    if paired_prefix.is_some() && !entry.cross_product {
        return None;
    }
    let tmp = entry.strip_candidate(AffixKind::Suffix, word)?;
    if !entry.conds_match(AffixKind::Suffix, &tmp) {
        return None;
    }
    let hit = lookup.lookup(&tmp)?;
    if !(lookup.accepts_anything() || hit.affix_flags.contains(&entry.flag)) {
        return None;
    }
    if let Some(pfx) = paired_prefix {
        if !(lookup.accepts_anything() || hit.affix_flags.contains(&pfx.flag)) {
            return None;
        }
    }
    Some(CheckInfo { root: tmp, prefix: None, suffix: Some(to_application(entry)) })
}

/// Reconstruct the surface form from a confirmed [`CheckInfo`] under `pattern`.
pub fn get_word(pattern: CasePattern, ci: &CheckInfo) -> Vec<u8> {
    let mut w = ci.root.clone();

    if let Some(pfx) = &ci.prefix {
        let mut v = pfx.append.clone();
        v.extend_from_slice(&w[pfx.strip.len()..]);
        w = v;
    }
    if let Some(sfx) = &ci.suffix {
        let cut = w.len() - sfx.strip.len();
        w.truncate(cut);
        w.extend_from_slice(&sfx.append);
    }

    match pattern {
        CasePattern::AllUpper => w.make_ascii_uppercase(),
        CasePattern::FirstUpper => {
            if let Some(b) = w.first_mut() {
                *b = b.to_ascii_uppercase();
            }
        }
        CasePattern::AllLower | CasePattern::Mixed => {}
    }
    w
}

/// `munch(word) -> Vec<CheckInfo>` (§4.6): every affix decomposition the
/// rule set can explain, ignoring dictionary presence. Empty for all-upper
/// input.
pub fn munch(store: &AffixStore, word: &[u8]) -> Vec<CheckInfo> {
    if CasePattern::classify(word) == CasePattern::AllUpper {
        return Vec::new();
    }
    let lookup = AlwaysTrue;
    let mut out = Vec::new();

    for entry in store.prefixes().zero_length_entries() {
        munch_prefix_entry(entry, store, &lookup, word, &mut out);
    }
    store
        .prefixes()
        .for_each_matching(word, |entry| munch_prefix_entry(entry, store, &lookup, word, &mut out));

    for entry in store.suffixes().zero_length_entries() {
        munch_suffix_entry(entry, &lookup, word, None, &mut out);
    }
    let mut rev = word.to_vec();
    rev.reverse();
    store
        .suffixes()
        .for_each_matching(&rev, |entry| munch_suffix_entry(entry, &lookup, word, None, &mut out));

    out
}

fn munch_prefix_entry(
    entry: &AffEntry,
    store: &AffixStore,
    lookup: &dyn Lookup,
    word: &[u8],
    out: &mut Vec<CheckInfo>,
) {
    let Some(tmp) = entry.strip_candidate(AffixKind::Prefix, word) else { return };
    if !entry.conds_match(AffixKind::Prefix, &tmp) {
        return;
    }
    if lookup.lookup(&tmp).is_none() {
        return;
    }
    let pfx_app = to_application(entry);
    out.push(CheckInfo { root: tmp.clone(), prefix: Some(pfx_app.clone()), suffix: None });

    if entry.cross_product {
        for sentry in store.suffixes().zero_length_entries() {
            munch_suffix_entry(sentry, lookup, &tmp, Some((entry, &pfx_app)), out);
        }
        let mut rev = tmp.clone();
        rev.reverse();
        store
            .suffixes()
            .for_each_matching(&rev, |sentry| munch_suffix_entry(sentry, lookup, &tmp, Some((entry, &pfx_app)), out));
    }
}

fn munch_suffix_entry(
    entry: &AffEntry,
    lookup: &dyn Lookup,
    word: &[u8],
    paired_prefix: Option<(&AffEntry, &AffixApplication)>,
    out: &mut Vec<CheckInfo>,
) {
    if paired_prefix.is_some() && !entry.cross_product {
        return;
    }
    let Some(tmp) = entry.strip_candidate(AffixKind::Suffix, word) else { return };
    if !entry.conds_match(AffixKind::Suffix, &tmp) {
        return;
    }
    if lookup.lookup(&tmp).is_none() {
        return;
    }
    let suf_app = to_application(entry);
    let prefix_field = paired_prefix.map(|(_, app)| app.clone());
    out.push(CheckInfo { root: tmp, prefix: prefix_field, suffix: Some(suf_app) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::WordEntry;

    fn sfx_d_store() -> AffixStore {
        AffixStore::parse(
            "SET ISO8859-1\n\
             SFX D Y 4\n\
             SFX D   0     d          e\n\
             SFX D   y     ied        [^aeiou]y\n\
             SFX D   0     ed         [^ey]\n\
             SFX D   0     ed         [aeiou]y\n",
            "en_US.aff",
        )
        .unwrap()
    }

    struct Dict(Vec<(&'static str, &'static [u8])>);
    impl Lookup for Dict {
        fn lookup(&self, word: &[u8]) -> Option<WordEntry> {
            self.0
                .iter()
                .find(|(w, _)| w.as_bytes() == word)
                .map(|(w, f)| WordEntry { root: w.as_bytes().to_vec(), affix_flags: f.to_vec() })
        }
    }

    #[test]
    fn baked_recognized_via_sfx_d() {
        let store = sfx_d_store();
        let dict = Dict(vec![("bake", b"D"), ("cry", b"D"), ("play", b"D"), ("walk", b"D")]);

        for (word, root) in [("baked", "bake"), ("cried", "cry"), ("played", "play"), ("walked", "walk")] {
            let ci = affix_check(&store, &dict, word.as_bytes())
                .unwrap_or_else(|| panic!("{word} should be recognized"));
            assert_eq!(ci.root, root.as_bytes());
        }
    }

    #[test]
    fn bakeed_not_recognized() {
        let store = sfx_d_store();
        let dict = Dict(vec![("bake", b"D")]);
        assert!(affix_check(&store, &dict, b"bakeed").is_none());
    }

    #[test]
    fn get_word_reconstructs_surface() {
        let store = sfx_d_store();
        let dict = Dict(vec![("cry", b"D")]);
        let ci = affix_check(&store, &dict, b"cried").unwrap();
        let pattern = CasePattern::classify(b"cried");
        assert_eq!(get_word(pattern, &ci), b"cried");
    }

    #[test]
    fn first_upper_prefix_check_lowercases_leading_byte() {
        let store = AffixStore::parse(
            "SET ISO8859-1\nPFX U Y 1\nPFX U   0     un         .\n",
            "test.aff",
        )
        .unwrap();
        let dict = Dict(vec![("happy", b"U")]);
        let ci = affix_check(&store, &dict, b"Unhappy").unwrap();
        assert_eq!(ci.root, b"happy");
        assert_eq!(get_word(CasePattern::FirstUpper, &ci), b"Unhappy");
    }

    #[test]
    fn munch_enumerates_without_dictionary() {
        let store = sfx_d_store();
        let decomps = munch(&store, b"played");
        assert!(decomps.iter().any(|ci| ci.root == b"play"));
    }

    #[test]
    fn suffix_without_cross_product_rejects_prefix_pairing() {
        // PFX Y allows cross-product; SFX X does not. A prefix+suffix
        // combination must be rejected even though the prefix side permits it.
        let store = AffixStore::parse(
            "SET ISO8859-1\n\
             PFX Y Y 1\n\
             PFX Y   0     un         .\n\
             \n\
             SFX X N 1\n\
             SFX X   0     s          .\n",
            "test.aff",
        )
        .unwrap();
        let dict = Dict(vec![("happy", b"YX")]);
        assert!(affix_check(&store, &dict, b"unhappys").is_none());

        let decomps = munch(&store, b"unhappys");
        assert!(decomps.iter().all(|ci| !(ci.prefix.is_some() && ci.suffix.is_some())));
    }

    #[test]
    fn munch_returns_empty_for_all_upper() {
        let store = sfx_d_store();
        assert!(munch(&store, b"PLAYED").is_empty());
    }
}
