use std::io::{self, BufRead, BufReader};
use std::process;

use clap::{Arg, Command};

use runmunch::editdist::{limit2_edit_distance, Weights};
use runmunch::{get_word, CasePattern, Runmunch};

fn main() {
    env_logger::init();

    let matches = Command::new("runmunch")
        .version("0.1.0")
        .about("An aspell-style affix engine: check, unmunch, and distance tools")
        .subcommand_required(true)
        .subcommand(
            Command::new("check")
                .about("Read words from stdin, recognize them against an affix+dictionary pair")
                .arg(Arg::new("affix").help("Affix file (.aff)").required(true).value_name("AFFIX").index(1))
                .arg(
                    Arg::new("dictionary")
                        .help("Dictionary file (.dic)")
                        .required(true)
                        .value_name("DICTIONARY")
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("unmunch")
                .about("Expand every dictionary entry via its affix flags and print the surface forms")
                .arg(Arg::new("affix").help("Affix file (.aff)").required(true).value_name("AFFIX").index(1))
                .arg(
                    Arg::new("dictionary")
                        .help("Dictionary file (.dic)")
                        .required(true)
                        .value_name("DICTIONARY")
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("distance")
                .about("Print the bounded edit distance between two words")
                .arg(Arg::new("a").help("First word").required(true).value_name("A").index(1))
                .arg(Arg::new("b").help("Second word").required(true).value_name("B").index(2)),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("check", sub)) => {
            let affix = sub.get_one::<String>("affix").unwrap();
            let dictionary = sub.get_one::<String>("dictionary").unwrap();
            run_check(affix, dictionary)
        }
        Some(("unmunch", sub)) => {
            let affix = sub.get_one::<String>("affix").unwrap();
            let dictionary = sub.get_one::<String>("dictionary").unwrap();
            run_unmunch(affix, dictionary)
        }
        Some(("distance", sub)) => {
            let a = sub.get_one::<String>("a").unwrap();
            let b = sub.get_one::<String>("b").unwrap();
            run_distance(a, b)
        }
        _ => unreachable!("subcommand_required guarantees one of the above"),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_check(affix: &str, dictionary: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut runmunch = Runmunch::new();
    runmunch.load_affix_file(affix)?;
    runmunch.load_dictionary(dictionary)?;

    for line in read_stdin_words()? {
        match runmunch.check(line.as_bytes())? {
            Some(ci) => {
                let pattern = CasePattern::classify(line.as_bytes());
                let reconstructed = get_word(pattern, &ci);
                debug_assert_eq!(reconstructed, line.as_bytes());
                let root = String::from_utf8_lossy(&ci.root);
                let mut flags = String::new();
                if let Some(p) = &ci.prefix {
                    flags.push_str(&format!("+{}", p.flag as char));
                }
                if let Some(s) = &ci.suffix {
                    flags.push_str(&format!("+{}", s.flag as char));
                }
                println!("{line} -> {root} ({flags})");
            }
            None => println!("{line}: not recognized"),
        }
    }
    Ok(())
}

fn run_unmunch(affix: &str, dictionary: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut runmunch = Runmunch::new();
    runmunch.load_affix_file(affix)?;
    runmunch.load_dictionary(dictionary)?;

    for surface in runmunch.unmunch(None)? {
        println!("{}", String::from_utf8_lossy(&surface));
    }
    Ok(())
}

fn run_distance(a: &str, b: &str) -> Result<(), Box<dyn std::error::Error>> {
    let weights = Weights::default();
    let result = limit2_edit_distance(a.as_bytes(), b.as_bytes(), &weights);
    println!("{}", result.cost);
    Ok(())
}

fn read_stdin_words() -> io::Result<Vec<String>> {
    let stdin = io::stdin();
    let reader = BufReader::new(stdin.lock());
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_string();
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}
