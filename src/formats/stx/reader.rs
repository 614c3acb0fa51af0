//! STX file reading

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::document::{StxDocument, StxRecord};

/// Read an STX file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or a line is malformed.
pub fn read_stx<P: AsRef<Path>>(path: P) -> Result<StxDocument> {
    let content = fs::read_to_string(path)?;
    parse_stx(&content)
}

/// Parse STX from a string
///
/// Blank lines and `!` comment lines are skipped. Keywords must be ASCII
/// alphabetic; fields are trimmed and may be empty.
///
/// # Errors
/// Returns an error if a non-comment line has no valid keyword.
pub fn parse_stx(content: &str) -> Result<StxDocument> {
    let mut doc = StxDocument::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('!') {
            continue;
        }

        let mut parts = trimmed.split(',').map(str::trim);
        let keyword = parts.next().unwrap_or_default();
        if keyword.is_empty() {
            return Err(Error::InvalidRecord {
                line,
                message: "missing keyword".to_string(),
            });
        }
        if !keyword.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidRecord {
                line,
                message: format!("malformed keyword '{keyword}'"),
            });
        }

        doc.records.push(StxRecord {
            keyword: keyword.to_string(),
            fields: parts.map(String::from).collect(),
            line,
        });
    }

    tracing::debug!("parsed {} STX records", doc.records.len());
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let doc = parse_stx("! header\n\nNODE, 1, 0, 0, 0\n  ! indented comment\nNODE, 2, 1, 0, 0\n")
            .unwrap();
        assert_eq!(doc.records.len(), 2);
        assert_eq!(doc.records[0].keyword, "NODE");
        assert_eq!(doc.records[0].line, 3);
        assert_eq!(doc.records[1].line, 5);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let doc = parse_stx("MATL,  1 , S355 ,210000000000,7850").unwrap();
        assert_eq!(
            doc.records[0].fields,
            vec!["1", "S355", "210000000000", "7850"]
        );
    }

    #[test]
    fn test_malformed_keyword_is_an_error() {
        let err = parse_stx("NODE, 1, 0, 0, 0\n42, 1").unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_missing_keyword_is_an_error() {
        let err = parse_stx(", 1, 2").unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { line: 1, .. }));
    }
}
