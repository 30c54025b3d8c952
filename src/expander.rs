//! Affix expansion (§4.7): generate every surface form an affix store can
//! derive from a root plus a flag list.
//!
//! Grounded on aspell's `AffixMgr::expand`/`expand_suffix`, reworked to
//! operate over [`AffEntry::apply_bounded`] instead of `PfxEntry::add`/
//! `SfxEntry::add` member calls.

use std::collections::HashSet;

use crate::affix::entry::AffixKind;
use crate::affix::AffixStore;

/// One surface form produced by [`expand`], with the suffix flags that were
/// still available (not yet consumed past `limit`) on this particular
/// surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionResult {
    pub surface: Vec<u8>,
    pub residual_suffix_flags: Vec<u8>,
}

/// `expand(root, flags, limit) -> Vec<ExpansionResult>` (§4.7). `limit` of
/// `None` means unbounded.
pub fn expand(store: &AffixStore, root: &[u8], flags: &[u8], limit: Option<usize>) -> Vec<ExpansionResult> {
    log::trace!("expand: {} with {} flags", String::from_utf8_lossy(root), flags.len());

    let suffix_flags: Vec<u8> = flags
        .iter()
        .copied()
        .filter(|&f| store.suffixes().by_flag(f).next().is_some())
        .collect();
    let cross_suffix_flags: Vec<u8> = suffix_flags
        .iter()
        .copied()
        .filter(|&f| store.suffixes().by_flag(f).any(|e| e.cross_product))
        .collect();

    let mut seen = HashSet::new();
    seen.insert(root.to_vec());
    let mut bases: Vec<(Vec<u8>, Vec<u8>)> = vec![(root.to_vec(), suffix_flags)];

    for &f in flags {
        for entry in store.prefixes().by_flag(f) {
            if let Some(Some(new_word)) = entry.apply_bounded(AffixKind::Prefix, root, None) {
                let residual = if entry.cross_product { cross_suffix_flags.clone() } else { Vec::new() };
                if seen.insert(new_word.clone()) {
                    bases.push((new_word, residual));
                }
                break;
            }
        }
    }

    let mut out = Vec::new();
    for (base, base_suffix_flags) in &bases {
        let mut not_expanded = Vec::new();
        let mut derived = Vec::new();

        for &f in base_suffix_flags {
            let mut expanded = false;
            for entry in store.suffixes().by_flag(f) {
                match entry.apply_bounded(AffixKind::Suffix, base, limit) {
                    Some(Some(new_word)) => {
                        if seen.insert(new_word.clone()) {
                            derived.push(ExpansionResult { surface: new_word, residual_suffix_flags: Vec::new() });
                        }
                        expanded = true;
                        break;
                    }
                    // Condition matched but application would shorten the word
                    // past `limit`: the flag is consumed, not retained.
                    Some(None) => {
                        expanded = true;
                        break;
                    }
                    None => continue,
                }
            }
            if !expanded {
                not_expanded.push(f);
            }
        }

        out.push(ExpansionResult { surface: base.clone(), residual_suffix_flags: not_expanded });
        out.extend(derived);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::AffixStore;

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

    #[test]
    fn expands_bake_to_baked() {
        let store = sfx_d_store();
        let results = expand(&store, b"bake", b"D", None);
        assert!(results.iter().any(|r| r.surface == b"baked"));
    }

    #[test]
    fn expands_cry_to_cried_via_y_to_ied() {
        let store = sfx_d_store();
        let results = expand(&store, b"cry", b"D", None);
        assert!(results.iter().any(|r| r.surface == b"cried"));
    }

    #[test]
    fn root_itself_is_always_present() {
        let store = sfx_d_store();
        let results = expand(&store, b"walk", b"D", None);
        assert!(results.iter().any(|r| r.surface == b"walk"));
    }

    #[test]
    fn no_duplicate_surfaces() {
        let store = sfx_d_store();
        let results = expand(&store, b"play", b"D", None);
        let mut surfaces: Vec<_> = results.iter().map(|r| r.surface.clone()).collect();
        let before = surfaces.len();
        surfaces.sort();
        surfaces.dedup();
        assert_eq!(surfaces.len(), before);
    }

    #[test]
    fn successfully_applied_flag_is_not_reported_as_residual() {
        let store = sfx_d_store();
        let results = expand(&store, b"bake", b"D", None);
        let base = results.iter().find(|r| r.surface == b"bake").unwrap();
        assert!(!base.residual_suffix_flags.contains(&b'D'));
    }

    #[test]
    fn unmatched_flag_is_reported_as_residual() {
        // Flag Z has a suffix rule, but its condition never matches "bake",
        // so the flag is neither applied nor consumed — it must stay
        // residual.
        let store = AffixStore::parse(
            "SET ISO8859-1\n\
             SFX Z Y 1\n\
             SFX Z   0     s          z\n",
            "test.aff",
        )
        .unwrap();
        let results = expand(&store, b"bake", b"Z", None);
        let base = results.iter().find(|r| r.surface == b"bake").unwrap();
        assert_eq!(base.residual_suffix_flags, vec![b'Z']);
    }

    #[test]
    fn limit_consumes_flag_without_applying() {
        let store = sfx_d_store();
        // "bake" -> "baked" needs alen = 4 (b,a,k,e); a limit of 1 should
        // suppress the suffix application entirely.
        let results = expand(&store, b"bake", b"D", Some(1));
        assert!(!results.iter().any(|r| r.surface == b"baked"));
    }
}
