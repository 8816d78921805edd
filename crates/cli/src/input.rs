//! Line-based l-mer input: one l-mer per line, blank lines skipped.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Read l-mers from `path`, trimming surrounding whitespace and upper-casing.
pub fn read_lmers(path: &Path) -> Result<Vec<String>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("file '{}' not found", path.display())
        }
        Err(e) => return Err(e).with_context(|| format!("opening {}", path.display())),
    };
    let lmers = parse_lmers(BufReader::new(file))
        .with_context(|| format!("reading {}", path.display()))?;
    if lmers.is_empty() {
        bail!("input file '{}' is empty", path.display());
    }
    Ok(lmers)
}

pub fn parse_lmers<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_ascii_uppercase());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_skips_blank_and_trims() {
        let text = "ATG\n\n  tgc \r\nGCC\n   \n";
        let lmers = parse_lmers(text.as_bytes()).unwrap();
        assert_eq!(lmers, ["ATG", "TGC", "GCC"]);
    }

    #[test]
    fn read_reports_missing_and_empty_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = read_lmers(&missing).unwrap_err();
        assert!(err.to_string().contains("not found"));

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "\n \n").unwrap();
        let err = read_lmers(&empty).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn read_then_solve() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lmers.txt");
        fs::write(&path, "ATG\nTGC\nGCC\n").unwrap();
        let lmers = read_lmers(&path).unwrap();
        let sol = sbh::solve_with_defaults(&lmers).unwrap();
        assert_eq!(sol.sequence, "ATGCC");
    }
}
