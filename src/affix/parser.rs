//! Line-oriented `.aff` rule file parser.
//!
//! Whitespace-delimited fields, `#` comments, blank lines ignored. Builds
//! [`AffEntry`] values through [`Conditions::parse`] and registers them with
//! the owning [`super::AffixStore`].

use std::fs;
use std::path::Path;

use crate::affix::condition::Conditions;
use crate::affix::entry::{AffEntry, AffixKind};
use crate::affix::AffixStore;
use crate::error::{AffixError, Result};

/// The encoding every affix/dictionary file in this crate is assumed to use.
/// `SET` lines are checked against this literal, matching the single-encoding
/// assertion the hard-core spec requires (no charset conversion tables).
const DATA_ENCODING: &str = "ISO8859-1";

impl AffixStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content, &path.as_ref().display().to_string())
    }

    pub fn parse(content: &str, path: &str) -> Result<Self> {
        let mut store = AffixStore::empty();
        let lines: Vec<&str> = content.lines().collect();
        let mut i = 0usize;

        while i < lines.len() {
            let line = lines[i].split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                i += 1;
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.first().copied() {
                Some("SET") => {
                    let encoding = parts.get(1).copied().unwrap_or("");
                    if encoding != DATA_ENCODING {
                        log::error!("affix file declares encoding '{encoding}', expected '{DATA_ENCODING}'");
                        return Err(AffixError::BadFileFormat {
                            path: path.to_string(),
                            message: format!(
                                "Expected the file to be in \"{DATA_ENCODING}\" not \"{encoding}\"."
                            ),
                        });
                    }
                    i += 1;
                }
                Some("PFX") | Some("SFX") => {
                    let kind = if parts[0] == "PFX" { AffixKind::Prefix } else { AffixKind::Suffix };
                    let consumed = parse_block(&mut store, &lines, i, kind, path)?;
                    i += consumed;
                }
                _ => {
                    i += 1;
                }
            }
        }

        store.finish();
        log::debug!(
            "parsed '{path}': {} prefix entries, {} suffix entries",
            store.prefix_entry_count(),
            store.suffix_entry_count()
        );
        Ok(store)
    }
}

fn parse_block(
    store: &mut AffixStore,
    lines: &[&str],
    start: usize,
    kind: AffixKind,
    path: &str,
) -> Result<usize> {
    let header: Vec<&str> = lines[start].split_whitespace().collect();
    if header.len() < 4 {
        return Err(corrupt(path, start + 1, header.get(1).copied().unwrap_or("?")));
    }

    let flag = parse_flag(header[1]).ok_or_else(|| corrupt(path, start + 1, header[1]))?;
    let cross_product = header[2] == "Y";
    let count: usize = header[3]
        .parse()
        .map_err(|_| corrupt(path, start + 1, header[1]))?;

    let mut consumed = 1;
    let mut parsed = 0;
    while parsed < count {
        let line_no = start + consumed;
        if line_no >= lines.len() {
            return Err(AffixError::BadFileFormat {
                path: path.to_string(),
                message: format!("unexpected end of file inside rule block for flag '{}'", header[1]),
            });
        }
        consumed += 1;
        let raw = lines[line_no].split('#').next().unwrap_or("").trim();
        if raw.is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.len() < 4 || fields[0] != header[0] {
            return Err(corrupt(path, line_no + 1, header[1]));
        }
        let line_flag = parse_flag(fields[1]).ok_or_else(|| corrupt(path, line_no + 1, header[1]))?;
        if line_flag != flag {
            return Err(corrupt(path, line_no + 1, header[1]));
        }

        let strip = if fields[2] == "0" { Vec::new() } else { fields[2].as_bytes().to_vec() };
        let append = if fields[3] == "0" { Vec::new() } else { fields[3].as_bytes().to_vec() };
        let cond_pattern = fields.get(4).copied().unwrap_or(".");
        let conds = Conditions::parse(cond_pattern)
            .map_err(|_| corrupt(path, line_no + 1, header[1]))?;

        let entry = AffEntry::new(kind, flag, strip, append, conds, cross_product);
        store.insert(kind, entry);
        parsed += 1;
    }

    Ok(consumed)
}

/// Flags are single bytes (`AffEntry::flag: u8`, §3); anything else is a
/// corrupt rule.
fn parse_flag(s: &str) -> Option<u8> {
    let mut bytes = s.bytes();
    let b = bytes.next()?;
    if bytes.next().is_some() {
        return None;
    }
    Some(b)
}

fn corrupt(path: &str, line: usize, flag: &str) -> AffixError {
    AffixError::CorruptRule {
        path: path.to_string(),
        line,
        flag: flag.chars().next().unwrap_or('?'),
    }
}
