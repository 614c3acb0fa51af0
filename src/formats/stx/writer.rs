//! STX file writing

use std::fs;
use std::path::Path;

use crate::error::Result;

use super::document::StxDocument;

/// Write an STX document to disk
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_stx<P: AsRef<Path>>(doc: &StxDocument, path: P) -> Result<()> {
    fs::write(path, serialize_stx(doc))?;
    Ok(())
}

/// Serialize an STX document to text
#[must_use]
pub fn serialize_stx(doc: &StxDocument) -> String {
    let mut out = String::from("! structural text model\n");
    for record in &doc.records {
        out.push_str(&record.keyword);
        for field in &record.fields {
            out.push_str(", ");
            out.push_str(field);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::super::document::StxRecord;
    use super::super::reader::parse_stx;
    use super::*;

    #[test]
    fn test_serialize_then_parse_preserves_records() {
        let mut doc = StxDocument::new();
        doc.records.push(StxRecord::new(
            "NODE",
            vec!["1".into(), "0".into(), "0".into(), "0".into()],
        ));
        doc.records.push(StxRecord::new("BAR", vec!["1".into(), "1".into(), "2".into(), "0".into()]));

        let text = serialize_stx(&doc);
        let reparsed = parse_stx(&text).unwrap();

        assert_eq!(reparsed.records.len(), 2);
        assert_eq!(reparsed.records[0].keyword, doc.records[0].keyword);
        assert_eq!(reparsed.records[0].fields, doc.records[0].fields);
        assert_eq!(reparsed.records[1].fields, doc.records[1].fields);
    }

    #[test]
    fn test_output_starts_with_comment_header() {
        let text = serialize_stx(&StxDocument::new());
        assert!(text.starts_with("! "));
    }
}
