use runmunch::{expand, AffixStore, Runmunch};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Runmunch Basic Usage Example ===\n");

    let affix_content = "SET ISO8859-1\n\
        SFX D Y 4\n\
        SFX D   0     d          e\n\
        SFX D   y     ied        [^aeiou]y\n\
        SFX D   0     ed         [^ey]\n\
        SFX D   0     ed         [aeiou]y\n";

    println!("1. Expanding roots directly via expand():");
    let store = AffixStore::parse(affix_content, "example.aff")?;
    for root in ["bake", "cry", "play", "walk"] {
        let results = expand(&store, root.as_bytes(), b"D", None);
        let surfaces: Vec<String> =
            results.into_iter().map(|r| String::from_utf8_lossy(&r.surface).into_owned()).collect();
        println!("  {root} -> {surfaces:?}");
    }

    println!("\n2. Dictionary-backed unmunch:");
    let dict_content = "4\nbake/D\ncry/D\nplay/D\nwalk/D\n";
    std::fs::write("/tmp/example.aff", affix_content)?;
    std::fs::write("/tmp/example.dic", dict_content)?;

    let mut runmunch = Runmunch::new();
    runmunch.load_affix_file("/tmp/example.aff")?;
    runmunch.load_dictionary("/tmp/example.dic")?;

    let all_expanded = runmunch.unmunch(None)?;
    println!("  Expanded {} surface forms from dictionary:", all_expanded.len());
    for word in &all_expanded {
        println!("    - {}", String::from_utf8_lossy(word));
    }

    println!("\n3. Checking a surface form:");
    if let Some(ci) = runmunch.check(b"cried")? {
        println!("  'cried' -> root '{}'", String::from_utf8_lossy(&ci.root));
    }

    let _ = std::fs::remove_file("/tmp/example.aff");
    let _ = std::fs::remove_file("/tmp/example.dic");

    println!("\n=== Example Complete ===");
    Ok(())
}
