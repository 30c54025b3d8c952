use runmunch::{affix_check, expand, AffixStore, Dictionary, Runmunch};

#[test]
fn basic_affix_parsing() {
    let affix_content = "SET ISO8859-1\n\
        PFX U Y 1\n\
        PFX U   0     un         .\n\
        \n\
        SFX E Y 1\n\
        SFX E   0     ed         .\n";

    let store = AffixStore::parse(affix_content, "test.aff").expect("should parse basic affix file");
    assert_eq!(store.prefix_entry_count(), 1);
    assert_eq!(store.suffix_entry_count(), 1);
}

#[test]
fn word_expansion_with_prefix_and_suffix() {
    let affix_content = "SET ISO8859-1\n\
        PFX U Y 1\n\
        PFX U   0     un         .\n\
        \n\
        SFX E Y 1\n\
        SFX E   0     ed         .\n";

    let store = AffixStore::parse(affix_content, "test.aff").expect("should parse affix file");

    let happy = expand(&store, b"happy", b"U", None);
    assert!(happy.iter().any(|r| r.surface == b"happy"));
    assert!(happy.iter().any(|r| r.surface == b"unhappy"));

    let work = expand(&store, b"work", b"E", None);
    assert!(work.iter().any(|r| r.surface == b"work"));
    assert!(work.iter().any(|r| r.surface == b"worked"));
}

#[test]
fn dictionary_parsing() {
    let dict_content = "3\nhello/E\nworld\ntest/U\n";
    let dictionary = Dictionary::parse(dict_content);
    assert_eq!(dictionary.len(), 3);

    assert_eq!(dictionary.get_entry(b"hello").unwrap().flags, b"E");
    assert!(dictionary.get_entry(b"world").unwrap().flags.is_empty());
    assert_eq!(dictionary.get_entry(b"test").unwrap().flags, b"U");
}

#[test]
fn full_runmunch_workflow() {
    let affix_content = "SET ISO8859-1\n\
        PFX U Y 1\n\
        PFX U   0     un         .\n\
        \n\
        SFX E Y 1\n\
        SFX E   0     ed         .\n";
    let dict_content = "2\nhappy/U\nwork/E\n";

    std::fs::write("/tmp/runmunch_test.aff", affix_content).expect("should write affix file");
    std::fs::write("/tmp/runmunch_test.dic", dict_content).expect("should write dict file");

    let mut runmunch = Runmunch::new();
    runmunch.load_affix_file("/tmp/runmunch_test.aff").expect("should load affix file");
    runmunch.load_dictionary("/tmp/runmunch_test.dic").expect("should load dictionary file");

    let results = runmunch.unmunch(None).expect("should generate expanded words");
    let as_strings: Vec<String> = results.iter().map(|w| String::from_utf8_lossy(w).into_owned()).collect();

    assert!(as_strings.contains(&"happy".to_string()));
    assert!(as_strings.contains(&"unhappy".to_string()));
    assert!(as_strings.contains(&"work".to_string()));
    assert!(as_strings.contains(&"worked".to_string()));

    let _ = std::fs::remove_file("/tmp/runmunch_test.aff");
    let _ = std::fs::remove_file("/tmp/runmunch_test.dic");
}

/// The scenario from the `SFX D` appendix: four inflections of the same
/// suffix flag, each matching a different condition branch.
#[test]
fn sfx_d_scenario_from_appendix() {
    let affix_content = "SET ISO8859-1\n\
        SFX D Y 4\n\
        SFX D   0     d          e\n\
        SFX D   y     ied        [^aeiou]y\n\
        SFX D   0     ed         [^ey]\n\
        SFX D   0     ed         [aeiou]y\n";
    let store = AffixStore::parse(affix_content, "en_US.aff").unwrap();

    let dict_content = "4\nbake/D\ncry/D\nplay/D\nwalk/D\n";
    let dictionary = Dictionary::parse(dict_content);

    for (word, root) in [("baked", "bake"), ("cried", "cry"), ("played", "play"), ("walked", "walk")] {
        let ci = affix_check(&store, &dictionary, word.as_bytes())
            .unwrap_or_else(|| panic!("{word} should be recognized"));
        assert_eq!(ci.root, root.as_bytes());
    }

    assert!(affix_check(&store, &dictionary, b"bakeed").is_none());
}
